use leptos::prelude::*;

/// Header block of a list page: title, explanatory text and action buttons
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// One-paragraph description under the title
    #[prop(optional, into)]
    description: MaybeProp<String>,

    /// Action buttons rendered on the right
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {move || description.get().map(|text| view! {
                    <p class="page-header__description">{text}</p>
                })}
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
