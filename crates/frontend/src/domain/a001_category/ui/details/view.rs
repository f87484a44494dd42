use super::view_model::CategoryDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_category::aggregate::{DESCRIPTION_MAX_LEN, NAME_MAX_LEN};
use leptos::ev;
use leptos::prelude::*;

/// Add/edit form in a modal. Rendered only while the list state holds a form session.
#[component]
pub fn CategoryDetails(
    vm: CategoryDetailsViewModel,
    /// Called after a successful create/update, once the form has closed
    on_saved: Callback<()>,
) -> impl IntoView {
    let is_saving = Signal::derive(move || vm.is_saving());

    view! {
        <Show when=move || vm.is_open()>
            {
                let mode = vm.mode_untracked();
                let title = mode.map(|m| m.title()).unwrap_or_default();
                let submit_label = mode.map(|m| m.submit_label()).unwrap_or_default();

                view! {
                    <Modal
                        title=title
                        on_close=Callback::new(move |_| vm.close())
                        locked=is_saving
                        class="category-form-modal"
                    >
                        <form
                            class="details-form"
                            novalidate=true
                            on:submit=move |ev: ev::SubmitEvent| {
                                ev.prevent_default();
                                vm.save_command(on_saved);
                            }
                        >
                            <div class="form-group">
                                <label for="category-name">"Category Name *"</label>
                                <input
                                    type="text"
                                    id="category-name"
                                    maxlength=NAME_MAX_LEN.to_string()
                                    required=true
                                    placeholder="Enter category name"
                                    prop:value=move || vm.name()
                                    disabled=move || vm.is_saving()
                                    on:input=move |ev| vm.set_name(event_target_value(&ev))
                                />
                            </div>

                            <div class="form-group">
                                <label for="category-description">"Description *"</label>
                                <textarea
                                    id="category-description"
                                    maxlength=DESCRIPTION_MAX_LEN.to_string()
                                    rows="4"
                                    required=true
                                    placeholder="Enter category description"
                                    prop:value=move || vm.description()
                                    disabled=move || vm.is_saving()
                                    on:input=move |ev| vm.set_description(event_target_value(&ev))
                                />
                            </div>

                            {move || vm.error().map(|e| view! {
                                <div class="form-error" role="alert">
                                    {icon("alert")}
                                    <span>{e}</span>
                                </div>
                            })}

                            <div class="details-actions">
                                <button
                                    type="button"
                                    class="button button--secondary"
                                    disabled=move || vm.is_saving()
                                    on:click=move |_| vm.close()
                                >
                                    "Cancel"
                                </button>
                                <button
                                    type="submit"
                                    class="button button--primary"
                                    disabled=move || vm.is_saving() || !vm.is_form_valid()
                                >
                                    {move || if vm.is_saving() { "Saving..." } else { submit_label }}
                                </button>
                            </div>
                        </form>
                    </Modal>
                }
            }
        </Show>
    }
}
