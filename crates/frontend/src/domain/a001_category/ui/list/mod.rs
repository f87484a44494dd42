pub mod state;

use self::state::{create_state, CategoryListState, FetchOutcome};
use crate::domain::a001_category::api;
use crate::domain::a001_category::ui::details::{CategoryDetails, CategoryDetailsViewModel};
use crate::domain::a001_category::ui::status_toggle::StatusToggleConfirm;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_switch::StatusSwitch;
use crate::shared::icons::icon;
use crate::shared::notify;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a001_category::listing::StatusFilter;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

const COLUMN_COUNT: &str = "5";

/// Fetch the current page; follows the cursor back when the page vanished
async fn refresh_list(state: RwSignal<CategoryListState>) {
    loop {
        let Some((ticket, query)) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        let result = api::fetch_categories(&query).await.map_err(|e| {
            log::error!("Error fetching categories: {}", e);
            e.user_message("Failed to fetch categories")
        });
        match state.try_update(|s| s.finish_fetch(ticket, result)) {
            Some(FetchOutcome::PageOutOfRange) => {
                log::debug!("Page {} no longer exists, reloading", query.page + 1);
            }
            Some(FetchOutcome::Stale) => {
                log::debug!("Dropped stale category list response #{}", ticket);
                return;
            }
            _ => return,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let state = create_state();
    let vm = CategoryDetailsViewModel::new(state);

    // Narrow views of the state so typing in the form does not re-render the table
    let items = Memo::new(move |_| state.with(|s| s.items.clone()));
    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));
    let pending_toggle = Memo::new(move |_| state.with(|s| s.pending_toggle().cloned()));
    let toggling = Memo::new(move |_| state.with(|s| s.is_toggling()));

    let load_categories = move || spawn_local(refresh_list(state));

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_categories();
        }
    });

    let change_filter = move |value: String| {
        let filter = StatusFilter::from_value(&value);
        if state.try_update(|s| s.set_filter(filter)) == Some(true) {
            load_categories();
        }
    };

    let go_to_page = move |page: u32| {
        if state.try_update(|s| s.go_to_page(page)) == Some(true) {
            load_categories();
        }
    };

    let request_toggle = move |category: Category| {
        if let Some(Err(e)) = state.try_update(|s| s.request_toggle(category)) {
            log::debug!("Status change not requested: {}", e);
        }
    };

    let confirm_toggle = move || {
        let Some(category) = state.try_update(|s| s.confirm_toggle()).flatten() else {
            return;
        };
        spawn_local(async move {
            match api::toggle_category_status(category.category_id).await {
                Ok(()) => {
                    // keep the dialog locked until the row shows the new status
                    refresh_list(state).await;
                    state.update(|s| {
                        s.finish_toggle();
                    });
                }
                Err(e) => {
                    log::error!("Error toggling status of category {}: {}", category.category_id, e);
                    state.update(|s| {
                        s.finish_toggle();
                    });
                    notify::alert("Failed to update category status");
                }
            }
        });
    };

    view! {
        <div class="page category-list">
            <PageHeader
                title=Category::list_name()
                description="Manage your product categories. Add, edit, or deactivate categories to organize your inventory effectively."
            >
                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.open_add()
                    >
                        {icon("plus")}
                        " Add New Category"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_categories()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </Space>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <label for="status-filter" class="filter-panel__label">"Filter by Status:"</label>
                        <select
                            id="status-filter"
                            class="filter-panel__select"
                            prop:value=move || state.with(|s| s.filter.as_str())
                            on:change=move |ev| change_filter(event_target_value(&ev))
                        >
                            {StatusFilter::ALL
                                .into_iter()
                                .map(|f| view! { <option value=f.as_str()>{f.label()}</option> })
                                .collect_view()}
                        </select>
                    </Flex>
                </div>

                {move || error.get().map(|err| view! {
                    <div class="alert alert--error" role="alert">
                        {icon("alert")}
                        <span>"Error: " {err}</span>
                    </div>
                })}

                <Show when=move || loading.get()>
                    <div class="loading">"Loading categories..."</div>
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=60.0>"ID"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Category Name"</TableHeaderCell>
                                <TableHeaderCell min_width=260.0>"Description"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|c| (c.category_id, c.status, c.category_name.clone(), c.description.clone())
                                children=move |category: Category| {
                                    let id = category.id();
                                    let editable = category.can_edit();
                                    let name = category.display_name().to_string();
                                    let for_toggle = category.clone();

                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{id.value()}</TableCellLayout>
                                            </TableCell>

                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {category.category_name}
                                                </TableCellLayout>
                                            </TableCell>

                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {category.description}
                                                </TableCellLayout>
                                            </TableCell>

                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusSwitch
                                                        active=category.status
                                                        label=name
                                                        on_request=Callback::new(move |_| request_toggle(for_toggle.clone()))
                                                    />
                                                </TableCellLayout>
                                            </TableCell>

                                            <TableCell>
                                                <TableCellLayout>
                                                    <span title=(!editable).then_some("Cannot update inactive category")>
                                                        <Button
                                                            appearance=ButtonAppearance::Secondary
                                                            size=ButtonSize::Small
                                                            disabled=!editable
                                                            on_click=move |_| vm.open_edit_command(id)
                                                        >
                                                            {icon("edit")}
                                                            " Update"
                                                        </Button>
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />

                            <Show when=move || !loading.get() && items.with(|i| i.is_empty())>
                                <TableRow>
                                    <TableCell attr:colspan=COLUMN_COUNT>
                                        <TableCellLayout>
                                            <span class="table__empty">"No categories found"</span>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            </Show>
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || state.with(|s| s.show_pagination())>
                    <PaginationControls
                        current_page=Signal::derive(move || state.with(|s| s.page))
                        total_pages=Signal::derive(move || state.with(|s| s.total_pages.unwrap_or(1)))
                        total_count=Signal::derive(move || state.with(|s| s.total_count))
                        disabled=Signal::derive(move || loading.get())
                        on_page_change=Callback::new(go_to_page)
                    />
                </Show>
            </div>

            <CategoryDetails vm=vm on_saved=Callback::new(move |_| load_categories()) />

            <StatusToggleConfirm
                target=pending_toggle
                sending=toggling
                on_confirm=Callback::new(move |_| confirm_toggle())
                on_cancel=Callback::new(move |_| {
                    if state.try_update(|s| s.cancel_toggle()) == Some(false) {
                        log::debug!("Ignoring cancel while the status request is in flight");
                    }
                })
            />
        </div>
    }
}
