use super::state::{RowAction, ACTION_DELETE, ACTION_EDIT};
use super::view_model::ProductManageViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Resolves the action control under the click, if any.
fn row_action_from_event(ev: &leptos::ev::MouseEvent) -> Option<RowAction> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let control = target.closest("[data-action]").ok()??;
    let action = control.get_attribute("data-action")?;
    let id = control.get_attribute("data-id")?;
    RowAction::parse(&action, &id)
}

#[component]
pub fn ProductManagePage() -> impl IntoView {
    let vm = ProductManageViewModel::new();
    vm.load_list();

    // Один обработчик на всё тело таблицы вместо колбэка на каждую строку
    let on_table_click = move |ev: leptos::ev::MouseEvent| {
        if let Some(action) = row_action_from_event(&ev) {
            vm.handle_row_action(action);
        }
    };

    view! {
        <div class="page product-manage">
            <div class="header">
                <div class="header__content">
                    {icon("products")}
                    <h1 class="header__title">{"Управление товарами"}</h1>
                </div>
                <div class="header__actions">
                    <button type="button" class="button button--secondary" on:click=move |_| vm.load_list()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                </div>
            </div>

            <div class="details-container product-form">
                <div class="details-header">
                    <h3 id="form-title">{move || vm.form.with(|f| f.title())}</h3>
                </div>

                <form
                    id="product-form"
                    class="details-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        vm.submit_command();
                    }
                >
                    <div class="form-group">
                        <label for="company">{"Компания"}</label>
                        <input
                            type="text"
                            id="company"
                            required=true
                            prop:value=move || vm.form.with(|f| f.company.clone())
                            on:input=move |ev| vm.form.update(|f| f.company = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="product_name">{"Наименование"}</label>
                        <input
                            type="text"
                            id="product_name"
                            required=true
                            prop:value=move || vm.form.with(|f| f.product_name.clone())
                            on:input=move |ev| vm.form.update(|f| f.product_name = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="package_unit">{"Упаковка"}</label>
                        <input
                            type="text"
                            id="package_unit"
                            required=true
                            prop:value=move || vm.form.with(|f| f.package_unit.clone())
                            on:input=move |ev| vm.form.update(|f| f.package_unit = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="contact">{"Контакт"}</label>
                        <input
                            type="text"
                            id="contact"
                            prop:value=move || vm.form.with(|f| f.contact.clone())
                            on:input=move |ev| vm.form.update(|f| f.contact = event_target_value(&ev))
                            placeholder="Необязательно"
                        />
                    </div>

                    <div class="details-actions">
                        <button type="submit" class="button button--primary">
                            {icon("save")}
                            {"Сохранить"}
                        </button>
                        <button
                            type="button"
                            id="cancel-edit-btn"
                            class="button button--secondary"
                            style:display=move || if vm.form.with(|f| f.cancel_visible()) { "inline-block" } else { "none" }
                            on:click=move |_| vm.cancel_command()
                        >
                            {icon("cancel")}
                            {"Отмена"}
                        </button>
                    </div>
                </form>
            </div>

            <div class="table">
                <table id="product-list-table" class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Компания"}</th>
                            <th class="table__header-cell">{"Наименование"}</th>
                            <th class="table__header-cell">{"Упаковка"}</th>
                            <th class="table__header-cell">{"Действия"}</th>
                        </tr>
                    </thead>
                    <tbody on:click=on_table_click>
                        {move || vm.items.get().into_iter().map(|row| {
                            let id = row.id.as_string();
                            let [company, product_name, package_unit] = row.cells().map(str::to_string);
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{company}</td>
                                    <td class="table__cell">{product_name}</td>
                                    <td class="table__cell">{package_unit}</td>
                                    <td class="table__cell">
                                        <button type="button" class="button button--secondary" data-action=ACTION_EDIT data-id=id.clone()>
                                            {icon("edit")}
                                            {"Изменить"}
                                        </button>
                                        <button type="button" class="button button--danger" data-action=ACTION_DELETE data-id=id>
                                            {icon("delete")}
                                            {"Удалить"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
