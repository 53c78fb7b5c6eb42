use super::view_model::ValidPreparationDetailsViewModel;
use leptos::prelude::*;

#[component]
pub fn ValidPreparationDetails(
    id: Option<u64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ValidPreparationDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container valid-preparation-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() { "Edit preparation" } else { "New preparation" }}
                </h3>
                {move || vm.is_dirty().then(|| view! {
                    <span class="badge badge--warning">{"Unsaved changes"}</span>
                })}
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        placeholder="e.g. dice"
                    />
                </div>

                <div class="form-group">
                    <label for="description">{"Description"}</label>
                    <textarea
                        id="description"
                        prop:value=move || vm.form.get().description
                        on:input=move |ev| {
                            vm.form.update(|f| f.description = event_target_value(&ev))
                        }
                        placeholder="e.g. cut into small cubes"
                    />
                </div>

                <div class="form-group">
                    <label for="icon">{"Icon"}</label>
                    <input
                        type="text"
                        id="icon"
                        prop:value=move || vm.form.get().icon
                        on:input=move |ev| vm.form.update(|f| f.icon = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || vm.form.get().applicable_to_all_ingredients
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                vm.form.update(|f| f.applicable_to_all_ingredients = checked);
                            }
                        />
                        {"Applicable to all ingredients"}
                    </label>
                </div>
            </div>

            <div class="details-actions">
                <button class="button button--primary" on:click=move |_| vm.save_command(on_saved)>
                    {"Save"}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
