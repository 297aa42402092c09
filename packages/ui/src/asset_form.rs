//! Modal form for creating or editing an asset.
//!
//! On mount the form probes the backend, then loads categories and statuses
//! for the selects. Both selects use id 0 as their "nothing selected"
//! placeholder, which [`AssetPayload::validate`] rejects; validation runs
//! before any network call. The form performs the create or update itself
//! and reports back through `on_saved`, so errors stay inside the modal.

use api::models::{Asset, AssetCategory, AssetPayload, AssetStatus};
use api::{ApiError, ValidationError};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label, Spinner};
use crate::views::ModalOverlay;
use crate::{icons, Icon};

#[component]
pub fn AssetForm(
    asset: Option<Asset>,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let editing = asset.is_some();
    let asset_id = asset.as_ref().map(|a| a.id);
    let prefill = asset
        .as_ref()
        .map(AssetPayload::from_asset)
        .unwrap_or_default();

    let mut form = use_signal(|| prefill);
    let mut categories = use_signal(Vec::<AssetCategory>::new);
    let mut statuses = use_signal(Vec::<AssetStatus>::new);
    let mut loading_data = use_signal(|| true);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<FormError>::None);

    // Probe then fetch the select options; the form is unusable without them
    let _ = use_resource(move || async move {
        loading_data.set(true);
        error.set(None);
        match load_form_data().await {
            Ok((fetched_categories, fetched_statuses)) => {
                categories.set(fetched_categories);
                statuses.set(fetched_statuses);
            }
            Err(err) => error.set(Some(FormError::Api(err))),
        }
        loading_data.set(false);
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let payload = form();
            if let Err(err) = payload.validate() {
                error.set(Some(FormError::Validation(err)));
                return;
            }

            saving.set(true);
            let result = match asset_id {
                Some(id) => api::assets::update(id, &payload).await.map(|_| ()),
                None => api::assets::create(&payload).await.map(|_| ()),
            };
            saving.set(false);

            match result {
                Ok(()) => on_saved.call(()),
                Err(err) => error.set(Some(FormError::Api(err))),
            }
        });
    };

    let title = if editing { "Edit Asset" } else { "Add New Asset" };
    let submit_label = if editing { "Update" } else { "Create" };
    let category_count = categories().len();
    let status_count = statuses().len();
    let selected_category = form().category_id;
    let selected_status = form().status_id;
    let warranty_value = form().warranty_expiry_date.unwrap_or_default();
    let image_value = form().asset_image_url.unwrap_or_default();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),

            div {
                class: "flex items-center justify-between p-6 border-b border-gray-200",
                h2 { class: "text-xl font-semibold text-gray-900", "{title}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "hover:text-gray-600 hover:bg-gray-100",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: icons::FaXmark, width: 18, height: 18 }
                }
            }

            if loading_data() {
                div {
                    class: "p-6 text-center",
                    Spinner { class: "w-8 h-8 border-4 border-indigo-600 mx-auto mb-4" }
                    p { class: "text-gray-600", "Loading form data..." }
                }
            } else {
                form {
                    onsubmit: handle_submit,
                    class: "p-6 space-y-4",

                    if let Some(err) = error() {
                        div {
                            class: "bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded-lg text-sm",
                            {err.message()}
                            if err.is_connectivity() {
                                div {
                                    class: "mt-2 text-xs",
                                    p { "Troubleshooting steps:" }
                                    ul {
                                        class: "list-disc list-inside mt-1",
                                        li {
                                            "Ensure the backend is running: "
                                            code { "cd backend && mvn spring-boot:run" }
                                        }
                                        li { "Check if http://localhost:8080/api/test is accessible" }
                                        li { "Verify database connection" }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        Label { r#for: "assetName", "Asset Name *" }
                        Input {
                            id: "assetName",
                            r#type: "text",
                            placeholder: "Enter asset name",
                            required: true,
                            value: form().asset_name,
                            oninput: move |evt: FormEvent| form.write().asset_name = evt.value(),
                        }
                    }

                    div {
                        Label { r#for: "categoryId", "Category * ({category_count} available)" }
                        select {
                            id: "categoryId",
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus-ring transition-colors",
                            value: "{selected_category}",
                            onchange: move |evt: FormEvent| {
                                form.write().category_id = evt.value().parse().unwrap_or(0);
                            },
                            option { value: "0", "Select a category" }
                            for category in categories() {
                                option { value: "{category.id}", "{category.category_name}" }
                            }
                        }
                    }

                    div {
                        Label { r#for: "statusId", "Status * ({status_count} available)" }
                        select {
                            id: "statusId",
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus-ring transition-colors",
                            value: "{selected_status}",
                            onchange: move |evt: FormEvent| {
                                form.write().status_id = evt.value().parse().unwrap_or(0);
                            },
                            option { value: "0", "Select a status" }
                            for status in statuses() {
                                option { value: "{status.id}", "{status.status_name}" }
                            }
                        }
                    }

                    div {
                        Label { r#for: "purchaseDate",
                            Icon { icon: icons::FaCalendar, width: 14, height: 14 }
                            " Purchase Date *"
                        }
                        Input {
                            id: "purchaseDate",
                            r#type: "date",
                            required: true,
                            value: form().purchase_date,
                            oninput: move |evt: FormEvent| form.write().purchase_date = evt.value(),
                        }
                    }

                    div {
                        Label { r#for: "warrantyExpiryDate",
                            Icon { icon: icons::FaCalendar, width: 14, height: 14 }
                            " Warranty Expiry Date"
                        }
                        Input {
                            id: "warrantyExpiryDate",
                            r#type: "date",
                            value: warranty_value,
                            oninput: move |evt: FormEvent| {
                                let value = evt.value();
                                form.write().warranty_expiry_date = (!value.is_empty()).then_some(value);
                            },
                        }
                    }

                    div {
                        Label { r#for: "assetImageUrl",
                            Icon { icon: icons::FaArrowUpRightFromSquare, width: 14, height: 14 }
                            " Image URL"
                        }
                        Input {
                            id: "assetImageUrl",
                            r#type: "url",
                            placeholder: "https://example.com/image.jpg",
                            value: image_value,
                            oninput: move |evt: FormEvent| {
                                let value = evt.value();
                                form.write().asset_image_url = (!value.is_empty()).then_some(value);
                            },
                        }
                    }

                    div {
                        class: "flex gap-3 pt-4",
                        Button {
                            variant: ButtonVariant::Secondary,
                            class: "flex-1",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            class: "flex-1 flex items-center justify-center gap-2",
                            disabled: saving() || loading_data(),
                            if saving() {
                                Spinner { class: "w-5 h-5 border-2 border-white" }
                            } else {
                                Icon { icon: icons::FaFloppyDisk, width: 14, height: 14 }
                                span { "{submit_label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// What the form's error banner is reporting: a local required-field
/// failure, or a failed API call.
#[derive(Clone, Debug, PartialEq)]
enum FormError {
    Validation(ValidationError),
    Api(ApiError),
}

impl FormError {
    /// Whether the banner should show the backend troubleshooting steps.
    /// Driven by the error's classification, never by its message text.
    fn is_connectivity(&self) -> bool {
        matches!(self, FormError::Api(err) if err.is_connectivity())
    }

    fn message(&self) -> String {
        match self {
            FormError::Validation(err) => err.to_string(),
            FormError::Api(err) => err.to_string(),
        }
    }
}

/// Probe the backend, then fetch both lookup tables for the selects.
async fn load_form_data() -> Result<(Vec<AssetCategory>, Vec<AssetStatus>), ApiError> {
    api::probe::check().await?;
    let categories = api::master_data::categories().await?;
    let statuses = api::master_data::statuses().await?;
    tracing::debug!(
        categories = categories.len(),
        statuses = statuses.len(),
        "form data loaded"
    );
    Ok((categories, statuses))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_troubleshooting_shown_for_connectivity_only() {
        assert!(FormError::Api(ApiError::Unreachable).is_connectivity());
        // Timeouts qualify even though their text never mentions the backend
        let timeout = FormError::Api(ApiError::Timeout);
        assert!(timeout.is_connectivity());
        assert!(!timeout.message().contains("backend"));

        // A rejection message mentioning the backend does not qualify
        let rejected = FormError::Api(ApiError::Rejected {
            status: 400,
            message: "backend validation rejected the asset".to_string(),
        });
        assert!(!rejected.is_connectivity());
        assert!(rejected.message().contains("backend"));

        assert!(!FormError::Validation(ValidationError::MissingName).is_connectivity());
    }

    #[test]
    fn test_banner_carries_field_and_api_messages() {
        assert_eq!(
            FormError::Validation(ValidationError::MissingCategory).message(),
            "Please select a category"
        );
        assert_eq!(
            FormError::Api(ApiError::Timeout).message(),
            "Request timed out. Please try again."
        );
    }
}
