pub mod state;

use self::state::create_state;
use super::details::ValidPreparationDetails;
use crate::domain::a001_valid_preparation::api::{
    archive_valid_preparation, list_valid_preparations, search_valid_preparations,
};
use crate::shared::date_utils::{format_optional_timestamp, format_timestamp};
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use contracts::domain::a001_valid_preparation::ValidPreparation;
use contracts::domain::common::{Pagination, Timestamp};
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct ValidPreparationRow {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub applicability: &'static str,
    pub created_on: Timestamp,
    pub created_on_display: String,
    pub archived: bool,
    pub archived_on_display: String,
}

impl From<ValidPreparation> for ValidPreparationRow {
    fn from(vp: ValidPreparation) -> Self {
        Self {
            id: vp.id,
            applicability: if vp.applicable_to_all_ingredients {
                "All ingredients"
            } else {
                "Selected ingredients"
            },
            created_on_display: format_timestamp(vp.created_on),
            created_on: vp.created_on,
            archived: vp.is_archived(),
            archived_on_display: format_optional_timestamp(vp.archived_on),
            name: vp.name,
            description: vp.description,
            icon: vp.icon,
        }
    }
}

impl Sortable for ValidPreparationRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "description" => self
                .description
                .to_lowercase()
                .cmp(&other.description.to_lowercase()),
            "icon" => self.icon.to_lowercase().cmp(&other.icon.to_lowercase()),
            "created_on" => self.created_on.cmp(&other.created_on),
            _ => Ordering::Equal,
        }
    }
}

/// Rows to display, in display order
pub fn visible_rows(
    mut rows: Vec<ValidPreparationRow>,
    sort_field: &str,
    sort_ascending: bool,
    show_archived: bool,
) -> Vec<ValidPreparationRow> {
    if !show_archived {
        rows.retain(|r| !r.archived);
    }
    sort_list(&mut rows, sort_field, sort_ascending);
    rows
}

/// Pager caption, e.g. "21-40 of 41"
pub fn pager_summary(pagination: &Pagination) -> String {
    match pagination.shown_range() {
        Some((first, last)) => format!("{}-{} of {}", first, last, pagination.filtered_count),
        None => "No entries".to_string(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ValidPreparationList() -> impl IntoView {
    let state = create_state();
    let (items, set_items) = signal::<Vec<ValidPreparationRow>>(Vec::new());
    // None while showing search results
    let (pagination, set_pagination) = signal::<Option<Pagination>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    // None: no editor open; Some(None): new record; Some(Some(id)): editing
    let (editing, set_editing) = signal::<Option<Option<u64>>>(None);

    let fetch = move || {
        let s = state.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            if s.is_searching() {
                match search_valid_preparations(&s.query).await {
                    Ok(found) => {
                        set_items.set(found.into_iter().map(Into::into).collect());
                        set_pagination.set(None);
                        set_error.set(None);
                    }
                    Err(e) => set_error.set(Some(e)),
                }
                return;
            }

            match list_valid_preparations(s.page, Pagination::DEFAULT_LIMIT).await {
                Ok(list) => {
                    let rows: Vec<ValidPreparationRow> =
                        list.data.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_pagination.set(Some(list.pagination));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let go_to_page = move |page: u64| {
        state.update(|s| s.page = page.max(1));
        fetch();
    };

    let archive = move |id: u64| {
        let confirmed = web_sys::window()
            .and_then(|win| win.confirm_with_message("Archive this preparation?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match archive_valid_preparation(id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(format!("Archive failed: {}", e))),
            }
        });
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let sorted_items = move || {
        let s = state.get();
        visible_rows(items.get(), &s.sort_field, s.sort_ascending, s.show_archived)
    };

    let header_cell = move |field: &'static str, title: &'static str| {
        view! {
            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort(field)>
                {title}
                <span class={move || get_sort_class(&state.get().sort_field, field)}>
                    {move || {
                        let s = state.get();
                        get_sort_indicator(&s.sort_field, field, s.sort_ascending)
                    }}
                </span>
            </th>
        }
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Valid preparations"}</h2>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| set_editing.set(Some(None))
                    >
                        {"New preparation"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {"Refresh"}
                    </button>
                    <input
                        type="search"
                        class="header__search"
                        placeholder="Search name or description"
                        prop:value=move || state.get().query
                        on:change=move |ev| {
                            let query = event_target_value(&ev);
                            state.update(|s| {
                                s.query = query;
                                s.page = 1;
                            });
                            fetch();
                        }
                    />
                    <label class="header__toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || state.get().show_archived
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                state.update(|s| s.show_archived = checked);
                            }
                        />
                        {"Show archived"}
                    </label>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || editing.get().map(|id| view! {
                <ValidPreparationDetails
                    id=id
                    on_saved=Callback::new(move |_| {
                        set_editing.set(None);
                        fetch();
                    })
                    on_cancel=Callback::new(move |_| set_editing.set(None))
                />
            })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {header_cell("name", "Name")}
                            {header_cell("description", "Description")}
                            {header_cell("icon", "Icon")}
                            <th class="table__header-cell">{"Applies to"}</th>
                            {header_cell("created_on", "Created")}
                            <th class="table__header-cell">{"Archived"}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|row| {
                            let id = row.id;
                            let archived = row.archived;
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--archived=archived
                                    on:click=move |_| set_editing.set(Some(Some(id)))
                                >
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.icon}</td>
                                    <td class="table__cell">{row.applicability}</td>
                                    <td class="table__cell">{row.created_on_display}</td>
                                    <td class="table__cell">{row.archived_on_display}</td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--secondary"
                                            disabled=archived
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                archive(id);
                                            }
                                        >
                                            {"Archive"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            {move || pagination.get().map(|p| view! {
                <div class="pagination">
                    <button
                        class="button button--secondary"
                        disabled=!p.has_previous_page()
                        on:click=move |_| go_to_page(p.page.saturating_sub(1))
                    >
                        {"Previous"}
                    </button>
                    <span class="pagination__summary">{pager_summary(&p)}</span>
                    <button
                        class="button button--secondary"
                        disabled=!p.has_next_page()
                        on:click=move |_| go_to_page(p.page + 1)
                    >
                        {"Next"}
                    </button>
                </div>
            })}
        </div>
    }
}
