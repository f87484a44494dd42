//! Confirmation step before a category is activated or deactivated

use crate::shared::modal::Modal;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

pub fn confirmation_message(category: &Category) -> String {
    format!(
        "Are you sure you want to {} the category \"{}\"?",
        category.toggle_verb(),
        category.display_name()
    )
}

#[component]
pub fn StatusToggleConfirm(
    /// Category awaiting confirmation; the dialog is hidden while `None`
    #[prop(into)]
    target: Signal<Option<Category>>,
    /// Status request in flight: the dialog cannot be dismissed or confirmed again
    #[prop(into)]
    sending: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || target.with(|t| t.is_some())>
            {
                let message = target
                    .with_untracked(|t| t.as_ref().map(confirmation_message))
                    .unwrap_or_default();
                view! {
                    <Modal
                        title="Confirm Status Change"
                        on_close=on_cancel
                        locked=sending
                        class="confirm-modal"
                    >
                        <p class="confirm-message">{message}</p>
                        <div class="details-actions">
                            <button
                                type="button"
                                class="button button--secondary"
                                disabled=move || sending.get()
                                on:click=move |_| on_cancel.run(())
                            >
                                "Cancel"
                            </button>
                            <button
                                type="button"
                                class="button button--primary"
                                disabled=move || sending.get()
                                on:click=move |_| on_confirm.run(())
                            >
                                {move || if sending.get() { "Updating..." } else { "Confirm" }}
                            </button>
                        </div>
                    </Modal>
                }
            }
        </Show>
    }
}
