use contracts::domain::a001_product::aggregate::{Product, ProductDto, ProductId};

pub const TITLE_CREATE: &str = "Новый товар";
pub const TITLE_EDIT: &str = "Редактирование товара";

pub const ACTION_EDIT: &str = "edit";
pub const ACTION_DELETE: &str = "delete";

// ============================================================================
// Form state
// ============================================================================

/// Режим формы: создание нового товара или редактирование существующего
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit {
        id: ProductId,
    },
}

/// Состояние формы товара. Поля хранятся как строки ввода;
/// `mode` заменяет скрытое поле идентификатора.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductForm {
    pub mode: FormMode,
    pub company: String,
    pub product_name: String,
    pub package_unit: String,
    pub contact: String,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit loader: copies the row into the form and switches to edit mode.
    pub fn load(&mut self, row: &ProductRow) {
        self.mode = FormMode::Edit { id: row.id };
        self.company = row.company.clone();
        self.product_name = row.product_name.clone();
        self.package_unit = row.package_unit.clone();
        self.contact = row.contact.clone();
    }

    /// Clears every field and returns to create mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_edit_mode(&self) -> bool {
        self.selected_id().is_some()
    }

    pub fn selected_id(&self) -> Option<ProductId> {
        match self.mode {
            FormMode::Create => None,
            FormMode::Edit { id } => Some(id),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit_mode() {
            TITLE_EDIT
        } else {
            TITLE_CREATE
        }
    }

    pub fn cancel_visible(&self) -> bool {
        self.is_edit_mode()
    }

    pub fn to_dto(&self) -> ProductDto {
        ProductDto {
            company: self.company.clone(),
            product_name: self.product_name.clone(),
            package_unit: self.package_unit.clone(),
            contact: Some(self.contact.clone()),
        }
    }

    /// Create in create mode, update of the selected id in edit mode.
    pub fn save_request(&self) -> SaveRequest {
        match self.mode {
            FormMode::Create => SaveRequest::Create(self.to_dto()),
            FormMode::Edit { id } => SaveRequest::Update(id, self.to_dto()),
        }
    }

    /// Applies the outcome of a save round trip. Success resets the form;
    /// failure keeps everything the user entered. Returns whether the list
    /// must be reloaded.
    pub fn complete_save(&mut self, succeeded: bool) -> bool {
        if succeeded {
            self.reset();
        }
        succeeded
    }
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRequest {
    Create(ProductDto),
    Update(ProductId, ProductDto),
}

impl SaveRequest {
    pub fn path(&self) -> String {
        match self {
            SaveRequest::Create(_) => "/api/products".to_string(),
            SaveRequest::Update(id, _) => format!("/api/products/{}", id),
        }
    }

    pub fn dto(&self) -> &ProductDto {
        match self {
            SaveRequest::Create(dto) | SaveRequest::Update(_, dto) => dto,
        }
    }
}

// ============================================================================
// Table rows
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductRow {
    pub id: ProductId,
    pub company: String,
    pub product_name: String,
    pub package_unit: String,
    pub contact: String,
}

impl From<Product> for ProductRow {
    fn from(p: Product) -> Self {
        let contact = p.contact_or_empty().to_string();
        Self {
            id: p.id,
            contact,
            company: p.company,
            product_name: p.product_name,
            package_unit: p.package_unit,
        }
    }
}

impl ProductRow {
    /// Visible cells in column order
    pub fn cells(&self) -> [&str; 3] {
        [&self.company, &self.product_name, &self.package_unit]
    }
}

/// Rows in backend order, one per product.
pub fn rows_from(products: Vec<Product>) -> Vec<ProductRow> {
    products.into_iter().map(Into::into).collect()
}

pub fn find_row(rows: &[ProductRow], id: ProductId) -> Option<&ProductRow> {
    rows.iter().find(|row| row.id == id)
}

// ============================================================================
// Row actions (delegated from the table body)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit(ProductId),
    Delete(ProductId),
}

impl RowAction {
    /// Parses the `data-action` / `data-id` pair of a clicked control.
    pub fn parse(action: &str, id: &str) -> Option<Self> {
        let id = ProductId::from_string(id).ok()?;
        match action {
            ACTION_EDIT => Some(RowAction::Edit(id)),
            ACTION_DELETE => Some(RowAction::Delete(id)),
            _ => None,
        }
    }
}
