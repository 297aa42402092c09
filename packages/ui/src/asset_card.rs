//! Card presentation of a single asset: name, category and status badges,
//! dates, and the optional image. Edit and delete are delegated to the
//! parent through event handlers.

use api::models::Asset;
use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::{icons, Icon};

#[component]
pub fn AssetCard(
    asset: Asset,
    on_edit: EventHandler<Asset>,
    on_delete: EventHandler<i64>,
) -> Element {
    let mut image_failed = use_signal(|| false);

    let category_name = asset
        .category
        .as_ref()
        .map(|c| c.category_name.clone())
        .unwrap_or_default();
    let status_name = asset
        .status
        .as_ref()
        .map(|s| s.status_name.clone())
        .unwrap_or_default();
    let status_classes = status_badge_classes(&status_name);

    let purchased = format_date(&asset.purchase_date);
    let warranty = asset.warranty_expiry_date.as_deref().map(format_date);
    let expired = asset
        .warranty_expiry_date
        .as_deref()
        .map(|date| expired_before(date, today()))
        .unwrap_or(false);
    let warranty_classes = if expired {
        "text-red-600"
    } else {
        "text-gray-600"
    };

    let asset_id = asset.id;
    let edit_asset = asset.clone();
    let image_url = asset.asset_image_url.clone();
    let asset_name = asset.asset_name.clone();

    rsx! {
        div {
            class: "bg-white rounded-xl shadow-sm border border-gray-200 hover-shadow p-6",
            div {
                class: "flex items-start justify-between mb-4",
                div {
                    class: "flex-1",
                    h3 {
                        class: "text-lg font-semibold text-gray-900 mb-1",
                        "{asset.asset_name}"
                    }
                    div {
                        class: "flex items-center gap-2 text-sm text-gray-600",
                        span {
                            class: "bg-blue-100 text-blue-800 px-2 py-1 rounded-full",
                            "{category_name}"
                        }
                        span {
                            class: "px-2 py-1 rounded-full {status_classes}",
                            "{status_name}"
                        }
                    }
                }
                div {
                    class: "flex items-center gap-2",
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "hover:text-indigo-600 hover:bg-indigo-50",
                        onclick: move |_| on_edit.call(edit_asset.clone()),
                        Icon { icon: icons::FaPenToSquare, width: 16, height: 16 }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "hover:text-red-600 hover:bg-red-50",
                        onclick: move |_| on_delete.call(asset_id),
                        Icon { icon: icons::FaTrashCan, width: 16, height: 16 }
                    }
                }
            }

            div {
                class: "space-y-3",
                div {
                    class: "flex items-center gap-2 text-sm text-gray-600",
                    Icon { icon: icons::FaCalendar, width: 14, height: 14 }
                    span { "Purchased: {purchased}" }
                }

                if let Some(warranty) = warranty {
                    div {
                        class: "flex items-center gap-2 text-sm",
                        Icon { icon: icons::FaShieldHalved, width: 14, height: 14 }
                        span {
                            class: "{warranty_classes}",
                            if expired {
                                "Warranty: {warranty} (Expired)"
                            } else {
                                "Warranty: {warranty}"
                            }
                        }
                    }
                }

                if let Some(url) = &image_url {
                    div {
                        class: "flex items-center gap-2 text-sm text-gray-600",
                        Icon { icon: icons::FaArrowUpRightFromSquare, width: 14, height: 14 }
                        a {
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "text-indigo-600 hover:text-indigo-800 transition-colors",
                            "View Image"
                        }
                    }
                }
            }

            if let Some(url) = &image_url {
                if !image_failed() {
                    div {
                        class: "mt-4",
                        img {
                            src: "{url}",
                            alt: "{asset_name}",
                            class: "w-full h-32 object-cover rounded-lg",
                            onerror: move |_| image_failed.set(true),
                        }
                    }
                }
            }
        }
    }
}

/// Badge colors by status name. Unknown statuses read as a warning state.
fn status_badge_classes(status: &str) -> &'static str {
    match status {
        "Active" => "bg-green-100 text-green-800",
        "Sold" => "bg-yellow-100 text-yellow-800",
        _ => "bg-red-100 text-red-800",
    }
}

/// `"2024-01-15"` renders as `"Jan 15, 2024"`. Unparseable input falls back
/// to the raw string rather than hiding the record.
fn format_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Whether `iso` falls strictly before `today`. Unparseable dates never
/// count as expired.
fn expired_before(iso: &str, today: NaiveDate) -> bool {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|date| date < today)
        .unwrap_or(false)
}

fn today() -> NaiveDate {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        NaiveDate::from_ymd_opt(
            now.get_full_year() as i32,
            now.get_month() + 1,
            now.get_date(),
        )
        .unwrap_or(NaiveDate::MIN)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::Local::now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(iso: &str) -> NaiveDate {
        NaiveDate::parse_from_str(iso, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-15"), "Jan 15, 2024");
        assert_eq!(format_date("2023-06-05"), "Jun 5, 2023");
        assert_eq!(format_date("not a date"), "not a date");
    }

    #[test]
    fn test_status_badge_colors() {
        assert_eq!(status_badge_classes("Active"), "bg-green-100 text-green-800");
        assert_eq!(status_badge_classes("Sold"), "bg-yellow-100 text-yellow-800");
        assert_eq!(status_badge_classes("Discarded"), "bg-red-100 text-red-800");
        assert_eq!(
            status_badge_classes("Under Repair"),
            "bg-red-100 text-red-800"
        );
        assert_eq!(status_badge_classes(""), "bg-red-100 text-red-800");
    }

    #[test]
    fn test_warranty_expiry() {
        let today = date("2024-06-01");
        assert!(expired_before("2024-05-31", today));
        assert!(!expired_before("2024-06-01", today));
        assert!(!expired_before("2024-06-02", today));
        assert!(!expired_before("garbage", today));
    }
}
