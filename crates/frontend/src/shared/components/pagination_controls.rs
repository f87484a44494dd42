use crate::shared::icons::icon;
use leptos::prelude::*;

/// "Page 2 of 5", with the total item count appended when known
pub fn page_label(current_page: u32, total_pages: u32, total_count: Option<u64>) -> String {
    let base = format!("Page {} of {}", current_page + 1, total_pages.max(1));
    match total_count {
        Some(count) => format!("{} ({})", base, count),
        None => base,
    }
}

/// PaginationControls component - Previous / page info / Next
///
/// Page numbers are 0-indexed; the parent decides whether to render it at all.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total count of items, if the server reports it
    #[prop(into)]
    total_count: Signal<Option<u64>>,

    /// Disables both buttons, e.g. while a page is loading
    #[prop(into)]
    disabled: Signal<bool>,

    /// Callback when page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let at_first = move || current_page.get() == 0;
    let at_last = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                type="button"
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get_untracked();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || at_first() || disabled.get()
            >
                {icon("chevron-left")}
                " Previous"
            </button>
            <span class="pagination-info">
                {move || page_label(current_page.get(), total_pages.get(), total_count.get())}
            </span>
            <button
                type="button"
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get_untracked();
                    if page + 1 < total_pages.get_untracked() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || at_last() || disabled.get()
            >
                "Next "
                {icon("chevron-right")}
            </button>
        </div>
    }
}
