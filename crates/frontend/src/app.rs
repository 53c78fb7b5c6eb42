use crate::domain::a001_valid_preparation::ui::list::ValidPreparationList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <ValidPreparationList />
        </main>
    }
}
