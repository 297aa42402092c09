//! Paged, searchable grid of the signed-in user's assets.
//!
//! The list gates itself on a connectivity probe: while probing it shows a
//! spinner, on failure a full retry screen, and only once connected does it
//! fetch pages. The fetch re-runs whenever the page index changes or the
//! probe reconnects; create, update, and delete restart it. The search box
//! filters the fetched page client-side by asset or category name.

use api::models::{Asset, Page};
use api::ApiError;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Spinner};
use crate::views::ModalOverlay;
use crate::{icons, AssetCard, AssetForm, Icon};

/// Assets fetched per page.
const PAGE_SIZE: u32 = 9;

/// Probe lifecycle for the backend.
#[derive(Clone, Copy, Debug, PartialEq)]
enum ConnectionStatus {
    Checking,
    Connected,
    Disconnected,
}

/// What the list's error banner is reporting.
#[derive(Clone, Debug, PartialEq)]
enum ListError {
    /// The page fetch failed.
    Load(ApiError),
    /// A delete failed; the fetched page is still valid.
    Delete(ApiError),
}

impl ListError {
    /// Whether the banner should offer an inline "Retry connection". Driven
    /// by the error's classification, never by its message text.
    fn is_connectivity(&self) -> bool {
        match self {
            ListError::Load(err) | ListError::Delete(err) => err.is_connectivity(),
        }
    }

    fn message(&self) -> String {
        match self {
            ListError::Load(err) => err.to_string(),
            ListError::Delete(_) => "Failed to delete asset".to_string(),
        }
    }
}

#[component]
pub fn AssetList() -> Element {
    let mut connection = use_signal(|| ConnectionStatus::Checking);
    let mut current_page = use_signal(|| 0u32);
    let mut page = use_signal(|| Option::<Page<Asset>>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<ListError>::None);
    let mut search = use_signal(String::new);
    let mut form_open = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Asset>::None);
    let mut delete_target = use_signal(|| Option::<i64>::None);

    // One probe on mount decides which of the three screens renders
    let _ = use_future(move || async move { probe(connection).await });

    let mut assets_task = use_resource(move || async move {
        if connection() != ConnectionStatus::Connected {
            return;
        }
        loading.set(true);
        error.set(None);
        match api::assets::list(current_page(), PAGE_SIZE).await {
            Ok(fetched) => page.set(Some(fetched)),
            Err(err) => {
                if err.is_connectivity() {
                    connection.set(ConnectionStatus::Disconnected);
                }
                error.set(Some(ListError::Load(err)));
            }
        }
        loading.set(false);
    });

    let retry = move |_: MouseEvent| {
        spawn(async move {
            connection.set(ConnectionStatus::Checking);
            probe(connection).await;
        });
    };

    let confirm_delete = move |_: MouseEvent| {
        spawn(async move {
            let Some(id) = delete_target() else { return };
            delete_target.set(None);
            match api::assets::remove(id).await {
                Ok(()) => assets_task.restart(),
                Err(err) => {
                    tracing::error!(%err, "failed to delete asset");
                    error.set(Some(ListError::Delete(err)));
                }
            }
        });
    };

    let term = search();
    let filtered: Vec<Asset> = page()
        .map(|p| p.content)
        .unwrap_or_default()
        .into_iter()
        .filter(|asset| matches_search(asset, &term))
        .collect();
    let pagination = page().filter(|p| p.total_pages > 1);

    match connection() {
        ConnectionStatus::Checking => rsx! {
            div {
                class: "flex items-center justify-center h-64",
                div {
                    class: "text-center",
                    Spinner { class: "w-8 h-8 border-4 border-indigo-600 mx-auto mb-4" }
                    p { class: "text-gray-600", "Checking backend connection..." }
                }
            }
        },

        ConnectionStatus::Disconnected => rsx! {
            div {
                class: "flex items-center justify-center h-64",
                div {
                    class: "text-center max-w-md",
                    Icon {
                        icon: icons::FaCircleExclamation,
                        width: 64,
                        height: 64,
                        fill: "#ef4444",
                        class: "mx-auto mb-4",
                    }
                    h3 {
                        class: "text-lg font-semibold text-gray-900 mb-2",
                        "Backend Connection Failed"
                    }
                    p {
                        class: "text-gray-600 mb-4",
                        "Cannot connect to the backend server. Please ensure it's running on http://localhost:8080"
                    }
                    div {
                        class: "space-y-2 text-sm text-gray-500 mb-4",
                        p { "To start the backend:" }
                        code {
                            class: "block bg-gray-100 p-2 rounded",
                            "cd backend && mvn spring-boot:run"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: retry,
                        "Retry Connection"
                    }
                }
            }
        },

        ConnectionStatus::Connected if loading() && page().is_none() => rsx! {
            div {
                class: "flex items-center justify-center h-64",
                div {
                    class: "text-center",
                    Spinner { class: "w-8 h-8 border-4 border-indigo-600 mx-auto mb-4" }
                    p { class: "text-gray-600", "Loading assets..." }
                }
            }
        },

        ConnectionStatus::Connected => rsx! {
            div {
                class: "space-y-6",

                div {
                    class: "flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4",
                    div {
                        h1 { class: "text-2xl font-bold text-gray-900", "My Assets" }
                        p { class: "text-gray-600", "Manage your personal assets" }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "flex items-center gap-2",
                        onclick: move |_| {
                            editing.set(None);
                            form_open.set(true);
                        },
                        Icon { icon: icons::FaPlus, width: 18, height: 18 }
                        span { "Add Asset" }
                    }
                }

                div {
                    class: "relative",
                    span {
                        class: "search-icon text-gray-400",
                        Icon { icon: icons::FaMagnifyingGlass, width: 18, height: 18 }
                    }
                    input {
                        r#type: "text",
                        placeholder: "Search assets...",
                        value: search(),
                        oninput: move |evt| search.set(evt.value()),
                        class: "w-full pl-10 pr-4 py-3 border border-gray-300 rounded-lg focus-ring transition-colors",
                    }
                }

                if let Some(err) = error() {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded-lg",
                        div {
                            class: "flex items-center gap-2",
                            Icon { icon: icons::FaCircleExclamation, width: 18, height: 18 }
                            span { {err.message()} }
                        }
                        if err.is_connectivity() {
                            button {
                                class: "mt-2 text-sm underline cursor-pointer",
                                onclick: retry,
                                "Retry connection"
                            }
                        }
                    }
                }

                if filtered.is_empty() {
                    div {
                        class: "text-center py-12",
                        div {
                            class: "flex items-center justify-center w-16 h-16 bg-gray-100 rounded-full mx-auto mb-4 text-gray-400",
                            Icon { icon: icons::FaPlus, width: 32, height: 32 }
                        }
                        h3 { class: "text-lg font-medium text-gray-900 mb-2", "No assets found" }
                        if term.is_empty() {
                            p { class: "text-gray-600 mb-4", "Get started by adding your first asset" }
                            Button {
                                variant: ButtonVariant::Primary,
                                class: "inline-flex items-center gap-2",
                                onclick: move |_| {
                                    editing.set(None);
                                    form_open.set(true);
                                },
                                Icon { icon: icons::FaPlus, width: 18, height: 18 }
                                span { "Add Your First Asset" }
                            }
                        } else {
                            p { class: "text-gray-600 mb-4", "Try adjusting your search terms" }
                        }
                    }
                } else {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                        for asset in filtered {
                            AssetCard {
                                key: "{asset.id}",
                                asset: asset.clone(),
                                on_edit: move |selected| {
                                    editing.set(Some(selected));
                                    form_open.set(true);
                                },
                                on_delete: move |id| delete_target.set(Some(id)),
                            }
                        }
                    }

                    if let Some(p) = pagination {
                        PaginationFooter {
                            page: p,
                            on_prev: move |_| current_page.set(current_page().saturating_sub(1)),
                            on_next: move |_| current_page.set(current_page() + 1),
                        }
                    }
                }

                if form_open() {
                    AssetForm {
                        asset: editing(),
                        on_close: move |_| {
                            form_open.set(false);
                            editing.set(None);
                        },
                        on_saved: move |_| {
                            form_open.set(false);
                            editing.set(None);
                            assets_task.restart();
                        },
                    }
                }

                if delete_target().is_some() {
                    ModalOverlay {
                        on_close: move |_| delete_target.set(None),
                        div {
                            class: "p-6",
                            h3 { class: "text-lg font-semibold text-gray-900 mb-2", "Delete Asset" }
                            p {
                                class: "text-gray-600 mb-4",
                                "Are you sure you want to delete this asset?"
                            }
                            div {
                                class: "flex gap-3",
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    class: "flex-1",
                                    onclick: move |_| delete_target.set(None),
                                    "Cancel"
                                }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    class: "flex-1 bg-red-600 hover:bg-red-700",
                                    onclick: confirm_delete,
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        },
    }
}

#[component]
fn PaginationFooter(
    page: Page<Asset>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let (from, to, total) = results_range(&page);
    let current = page.number + 1;
    let total_pages = page.total_pages;

    rsx! {
        div {
            class: "flex items-center justify-between",
            div {
                class: "text-sm text-gray-700",
                "Showing {from} to {to} of {total} results"
            }
            div {
                class: "flex items-center gap-2",
                Button {
                    variant: ButtonVariant::Secondary,
                    class: "p-2",
                    disabled: page.first,
                    onclick: move |_| on_prev.call(()),
                    Icon { icon: icons::FaChevronLeft, width: 18, height: 18 }
                }
                span { class: "px-4 py-2 text-sm font-medium", "Page {current} of {total_pages}" }
                Button {
                    variant: ButtonVariant::Secondary,
                    class: "p-2",
                    disabled: page.last,
                    onclick: move |_| on_next.call(()),
                    Icon { icon: icons::FaChevronRight, width: 18, height: 18 }
                }
            }
        }
    }
}

/// One probe round. Flips the status once the backend answers or errors.
async fn probe(mut connection: Signal<ConnectionStatus>) {
    match api::probe::check().await {
        Ok(()) => connection.set(ConnectionStatus::Connected),
        Err(err) => {
            tracing::error!(%err, "backend connection failed");
            connection.set(ConnectionStatus::Disconnected);
        }
    }
}

/// Case-insensitive match on asset name or category name. An empty term
/// matches everything.
fn matches_search(asset: &Asset, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    asset.asset_name.to_lowercase().contains(&term)
        || asset
            .category
            .as_ref()
            .map(|c| c.category_name.to_lowercase().contains(&term))
            .unwrap_or(false)
}

/// 1-based "Showing X to Y of Z results" bounds from the envelope.
fn results_range<T>(page: &Page<T>) -> (i64, i64, i64) {
    let from = page.number * page.size + 1;
    let to = ((page.number + 1) * page.size).min(page.total_elements);
    (from, to, page.total_elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::AssetCategory;

    fn asset(name: &str, category: Option<&str>) -> Asset {
        Asset {
            id: 1,
            user_id: 1,
            asset_name: name.to_string(),
            category_id: 1,
            status_id: 1,
            purchase_date: "2024-01-15".to_string(),
            warranty_expiry_date: None,
            asset_image_url: None,
            created_at: "2024-01-15T09:00:00".to_string(),
            updated_at: "2024-01-15T09:00:00".to_string(),
            category: category.map(|name| AssetCategory {
                id: 1,
                category_name: name.to_string(),
            }),
            status: None,
        }
    }

    fn envelope(number: i64, size: i64, total_elements: i64, total_pages: i64) -> Page<Asset> {
        Page {
            content: Vec::new(),
            total_elements,
            total_pages,
            size,
            number,
            first: number == 0,
            last: number + 1 >= total_pages,
        }
    }

    #[test]
    fn test_search_matches_name_case_insensitive() {
        let laptop = asset("MacBook Pro", Some("Laptop"));
        assert!(matches_search(&laptop, "macbook"));
        assert!(matches_search(&laptop, "BOOK"));
        assert!(!matches_search(&laptop, "bike"));
    }

    #[test]
    fn test_search_matches_category_name() {
        let laptop = asset("MacBook Pro", Some("Laptop"));
        assert!(matches_search(&laptop, "laptop"));
        assert!(matches_search(&laptop, "LAP"));
    }

    #[test]
    fn test_search_handles_missing_category() {
        let orphan = asset("Desk", None);
        assert!(matches_search(&orphan, "desk"));
        assert!(!matches_search(&orphan, "furniture"));
    }

    #[test]
    fn test_empty_search_matches_everything() {
        assert!(matches_search(&asset("Desk", None), ""));
    }

    #[test]
    fn test_results_range_first_page() {
        assert_eq!(results_range(&envelope(0, 9, 20, 3)), (1, 9, 20));
    }

    #[test]
    fn test_results_range_last_partial_page() {
        assert_eq!(results_range(&envelope(2, 9, 20, 3)), (19, 20, 20));
    }

    #[test]
    fn test_results_range_single_short_page() {
        assert_eq!(results_range(&envelope(0, 9, 4, 1)), (1, 4, 4));
    }

    #[test]
    fn test_banner_retry_follows_error_classification() {
        // A timeout is a connectivity failure even though its display text
        // never mentions the backend
        let timeout = ListError::Load(ApiError::Timeout);
        assert!(timeout.is_connectivity());
        assert!(!timeout.message().contains("backend"));

        // A rejection whose backend message happens to mention the backend
        // is not one
        let rejected = ListError::Load(ApiError::Rejected {
            status: 400,
            message: "backend validation rejected the asset".to_string(),
        });
        assert!(!rejected.is_connectivity());
        assert!(rejected.message().contains("backend"));

        assert!(!ListError::Load(ApiError::Server(500)).is_connectivity());
        assert!(ListError::Load(ApiError::Unreachable).is_connectivity());
    }

    #[test]
    fn test_delete_failure_keeps_fixed_message() {
        let failed = ListError::Delete(ApiError::Server(500));
        assert_eq!(failed.message(), "Failed to delete asset");
        assert!(!failed.is_connectivity());

        // A delete that failed for connectivity reasons still offers retry
        assert!(ListError::Delete(ApiError::Unreachable).is_connectivity());
    }
}
