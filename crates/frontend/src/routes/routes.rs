use crate::domain::a001_product::ui::manage::ProductManagePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// `/manage` is the historical URL of the admin page; `/` shows the same page.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <p class="page">{"Страница не найдена"}</p> }>
                    <Route path=path!("/") view=ProductManagePage />
                    <Route path=path!("/manage") view=ProductManagePage />
                </Routes>
            </main>
        </Router>
    }
}
