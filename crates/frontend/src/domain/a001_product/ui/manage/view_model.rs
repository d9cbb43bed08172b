use super::model::{HttpGateway, ProductGateway};
use super::state::{find_row, rows_from, ProductForm, ProductRow, RowAction};
use crate::shared::browser;
use contracts::domain::a001_product::aggregate::ProductId;
use leptos::prelude::*;
use leptos::task::spawn_local;

const SAVE_FAILED: &str = "Не удалось сохранить товар.";
const DELETE_FAILED: &str = "Не удалось удалить товар.";
const DELETE_CONFIRM: &str = "Удалить этот товар?";

/// ViewModel for the product manage page
#[derive(Clone, Copy)]
pub struct ProductManageViewModel {
    pub form: RwSignal<ProductForm>,
    pub items: RwSignal<Vec<ProductRow>>,
}

impl ProductManageViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductForm::new()),
            items: RwSignal::new(Vec::new()),
        }
    }

    /// Reload the whole table. On failure the previous rows stay.
    pub fn load_list(&self) {
        let vm = *self;
        spawn_local(async move { vm.reload(&HttpGateway).await });
    }

    /// Create or update depending on the form mode
    pub fn submit_command(&self) {
        let vm = *self;
        spawn_local(async move { vm.submit(&HttpGateway).await });
    }

    pub fn edit_command(&self, row: &ProductRow) {
        self.form.update(|f| f.load(row));
        browser::scroll_to_top();
    }

    pub fn cancel_command(&self) {
        self.form.update(|f| f.reset());
    }

    pub fn delete_command(&self, id: ProductId) {
        let vm = *self;
        spawn_local(async move { vm.delete(&HttpGateway, id).await });
    }

    /// Entry point of the delegated table click handler
    pub fn handle_row_action(&self, action: RowAction) {
        match action {
            RowAction::Edit(id) => {
                let row = self.items.with_untracked(|rows| find_row(rows, id).cloned());
                match row {
                    Some(row) => self.edit_command(&row),
                    None => log::warn!("Edit requested for unknown product {}", id),
                }
            }
            RowAction::Delete(id) => self.delete_command(id),
        }
    }

    async fn reload<G: ProductGateway>(&self, gateway: &G) {
        match gateway.fetch_products().await {
            Ok(products) => {
                log::debug!("Loaded {} products", products.len());
                self.items.set(rows_from(products));
            }
            Err(e) => log::error!("Failed to load products: {}", e),
        }
    }

    async fn submit<G: ProductGateway>(&self, gateway: &G) {
        let request = self.form.get_untracked().save_request();
        let result = gateway.save(&request).await;
        match &result {
            Ok(response) => gateway.alert(&response.message),
            Err(e) => {
                log::error!("Failed to save product: {}", e);
                gateway.alert(SAVE_FAILED);
            }
        }

        let reload = self
            .form
            .try_update(|f| f.complete_save(result.is_ok()))
            .unwrap_or(false);
        if reload {
            self.reload(gateway).await;
        }
    }

    async fn delete<G: ProductGateway>(&self, gateway: &G, id: ProductId) {
        if !gateway.confirm(DELETE_CONFIRM) {
            return;
        }

        match gateway.delete(id).await {
            Ok(response) => {
                gateway.alert(&response.message);
                self.reload(gateway).await;
            }
            Err(e) => {
                log::error!("Failed to delete product {}: {}", id, e);
                gateway.alert(DELETE_FAILED);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::state::{FormMode, SaveRequest};
    use super::*;
    use contracts::domain::a001_product::aggregate::{MessageResponse, Product};
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Records every call and answers with canned results.
    #[derive(Default)]
    struct FakeGateway {
        confirm_answer: bool,
        fail_writes: bool,
        products: Vec<Product>,
        calls: RefCell<Vec<String>>,
        alerts: RefCell<Vec<String>>,
    }

    impl FakeGateway {
        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn write_result(&self, message: &str) -> Result<MessageResponse, String> {
            if self.fail_writes {
                Err("HTTP 500".into())
            } else {
                Ok(MessageResponse::new(message))
            }
        }
    }

    impl ProductGateway for FakeGateway {
        async fn fetch_products(&self) -> Result<Vec<Product>, String> {
            self.calls.borrow_mut().push("fetch".into());
            Ok(self.products.clone())
        }

        async fn save(&self, request: &SaveRequest) -> Result<MessageResponse, String> {
            let call = match request {
                SaveRequest::Create(_) => "create".to_string(),
                SaveRequest::Update(id, _) => format!("update {}", id),
            };
            self.calls.borrow_mut().push(call);
            self.write_result("saved")
        }

        async fn delete(&self, id: ProductId) -> Result<MessageResponse, String> {
            self.calls.borrow_mut().push(format!("delete {}", id));
            self.write_result("deleted")
        }

        fn confirm(&self, _message: &str) -> bool {
            self.confirm_answer
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    fn product(id: i64, company: &str) -> Product {
        Product {
            id: ProductId(id),
            company: company.into(),
            product_name: "Widget".into(),
            package_unit: "Box".into(),
            contact: None,
        }
    }

    fn filled_form() -> ProductForm {
        ProductForm {
            mode: FormMode::Create,
            company: "Acme".into(),
            product_name: "Widget".into(),
            package_unit: "Box".into(),
            contact: String::new(),
        }
    }

    #[test]
    fn test_declined_delete_sends_nothing() {
        let vm = ProductManageViewModel::new();
        let gateway = FakeGateway::default();

        block_on(vm.delete(&gateway, ProductId(7)));

        assert!(gateway.calls().is_empty());
        assert!(gateway.alerts.borrow().is_empty());
    }

    #[test]
    fn test_confirmed_delete_reloads_and_keeps_form() {
        let vm = ProductManageViewModel::new();
        vm.form.set(filled_form());
        let gateway = FakeGateway {
            confirm_answer: true,
            products: vec![product(1, "Acme")],
            ..Default::default()
        };

        block_on(vm.delete(&gateway, ProductId(7)));

        assert_eq!(gateway.calls(), vec!["delete 7", "fetch"]);
        assert_eq!(*gateway.alerts.borrow(), vec!["deleted".to_string()]);
        assert_eq!(vm.items.get_untracked().len(), 1);
        assert_eq!(vm.form.get_untracked(), filled_form());
    }

    #[test]
    fn test_failed_delete_alerts_without_reload() {
        let vm = ProductManageViewModel::new();
        let gateway = FakeGateway {
            confirm_answer: true,
            fail_writes: true,
            ..Default::default()
        };

        block_on(vm.delete(&gateway, ProductId(7)));

        assert_eq!(gateway.calls(), vec!["delete 7"]);
        assert_eq!(*gateway.alerts.borrow(), vec![DELETE_FAILED.to_string()]);
    }

    #[test]
    fn test_failed_save_keeps_form_and_skips_reload() {
        let vm = ProductManageViewModel::new();
        vm.form.set(filled_form());
        vm.items.set(rows_from(vec![product(1, "Old")]));
        let gateway = FakeGateway {
            fail_writes: true,
            products: vec![product(2, "New")],
            ..Default::default()
        };

        block_on(vm.submit(&gateway));

        assert_eq!(gateway.calls(), vec!["create"]);
        assert_eq!(*gateway.alerts.borrow(), vec![SAVE_FAILED.to_string()]);
        assert_eq!(vm.form.get_untracked(), filled_form());
        assert_eq!(vm.items.get_untracked()[0].company, "Old");
    }

    #[test]
    fn test_successful_update_resets_form_and_reloads() {
        let vm = ProductManageViewModel::new();
        let row = rows_from(vec![product(42, "Acme")]).remove(0);
        vm.form.update(|f| f.load(&row));
        let gateway = FakeGateway {
            products: vec![product(42, "Acme"), product(43, "Zeta")],
            ..Default::default()
        };

        block_on(vm.submit(&gateway));

        assert_eq!(gateway.calls(), vec!["update 42", "fetch"]);
        assert_eq!(*gateway.alerts.borrow(), vec!["saved".to_string()]);
        assert_eq!(vm.form.get_untracked(), ProductForm::new());
        assert_eq!(vm.items.get_untracked().len(), 2);
    }
}
