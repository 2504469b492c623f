//! Page chrome shared by top-level routes.

use leptos::prelude::*;

/// Header + content wrapper. Provides layout only.
#[component]
pub fn PageContainer(children: Children) -> impl IntoView {
    view! {
        <div class="page-container">
            <header class="page-container__header toolbar">
                <a class="toolbar__brand" href="/">"MonsterEOS"</a>
            </header>
            <main class="page-container__content">{children()}</main>
        </div>
    }
}
