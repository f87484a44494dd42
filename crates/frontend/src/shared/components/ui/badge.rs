use leptos::prelude::*;

/// Active / inactive badge shown next to a status switch
#[component]
pub fn StatusBadge(
    /// `true` renders the active variant
    active: bool,
) -> impl IntoView {
    let (class, label) = if active {
        ("badge badge--status badge--status-active", "Active")
    } else {
        ("badge badge--status badge--status-inactive", "Inactive")
    };

    view! {
        <span class=class>{label}</span>
    }
}
