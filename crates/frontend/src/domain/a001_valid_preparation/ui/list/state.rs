use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ValidPreparationListState {
    pub sort_field: String,
    pub sort_ascending: bool,
    pub show_archived: bool,
    pub page: u64,
    /// Non-empty query switches the list from paging to search results
    pub query: String,
}

impl ValidPreparationListState {
    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

impl Default for ValidPreparationListState {
    fn default() -> Self {
        Self {
            sort_field: "name".to_string(),
            sort_ascending: true,
            show_archived: false,
            page: 1,
            query: String::new(),
        }
    }
}

pub fn create_state() -> RwSignal<ValidPreparationListState> {
    RwSignal::new(ValidPreparationListState::default())
}
