use crate::shared::components::ui::StatusBadge;
use leptos::ev;
use leptos::prelude::*;

/// Inline status switch with badge
///
/// The checkbox never flips on its own: a click only asks the parent for a
/// status change, and the row is re-rendered from server data afterwards.
#[component]
pub fn StatusSwitch(
    /// Current status of the row
    active: bool,
    /// Accessible label, e.g. the category name
    #[prop(into)]
    label: String,
    /// Called when the user asks to flip the status
    on_request: Callback<()>,
) -> impl IntoView {
    let handle_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        on_request.run(());
    };

    view! {
        <div class="status-cell">
            <label class="toggle-switch" title=format!("Change status of {}", label)>
                <input type="checkbox" prop:checked=active on:click=handle_click />
                <span class="toggle-slider"></span>
            </label>
            <StatusBadge active=active />
        </div>
    }
}
