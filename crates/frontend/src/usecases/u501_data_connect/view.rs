use super::api;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::shared::api_error::ApiError;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_data_connect::{
    display_name, validate_upload, DataConnect, UploadCandidate,
};
use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::File;

/// Invalid-file message stays visible this long
const ERROR_CLEAR_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq)]
enum UploadStatus {
    Success,
    Error(String),
}

/// An expiring error may only clear the status it set itself
fn should_clear(current: Option<&UploadStatus>, expiring: &UploadStatus) -> bool {
    current == Some(expiring)
}

fn candidate(file: &File) -> UploadCandidate {
    UploadCandidate::new(file.name(), file.type_())
}

#[component]
pub fn DataConnectPage() -> impl IntoView {
    // web_sys::File is not Send+Sync, store locally
    let selected_file = StoredValue::new_local(None::<File>);
    let (file_name, set_file_name) = signal(None::<String>);
    let (status, set_status) = signal(None::<UploadStatus>);
    let (is_uploading, set_is_uploading) = signal(false);
    let (drag_over, set_drag_over) = signal(false);
    // the navigate closure is not Send+Sync, store locally
    let navigate = StoredValue::new_local(use_navigate());

    let show_error = move |err: ApiError| {
        let shown = UploadStatus::Error(err.to_string());
        set_status.set(Some(shown.clone()));
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(ERROR_CLEAR_MS).await;
            let current = status.try_get_untracked().flatten();
            if should_clear(current.as_ref(), &shown) {
                set_status.set(None);
            }
        });
    };

    let handle_file = move |file: Option<File>| {
        set_status.set(None);
        let picked = file.as_ref().map(candidate);
        match validate_upload(picked.as_ref()) {
            Ok(()) => {
                set_file_name.set(picked.map(|c| c.name));
                selected_file.set_value(file);
            }
            Err(e) => {
                log::info!("rejected upload: {}", e);
                set_file_name.set(None);
                selected_file.set_value(None);
                show_error(e);
            }
        }
    };

    let on_input_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        handle_file(input.files().and_then(|files| files.get(0)));
        input.set_value("");
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if file.is_some() {
            handle_file(file);
        }
    };

    let on_connect = move |_: ev::MouseEvent| {
        let Some(file) = selected_file.get_value() else {
            show_error(ApiError::Upload("No file selected".to_string()));
            return;
        };
        log::info!("{}: uploading {}", DataConnect::full_name(), file.name());
        set_is_uploading.set(true);
        set_status.set(None);
        leptos::task::spawn_local(async move {
            match api::upload_file(&file).await {
                Ok(response) => {
                    log::info!("data connected: {:?}", response.body);
                    set_status.set(Some(UploadStatus::Success));
                    set_file_name.set(None);
                    selected_file.set_value(None);
                    set_is_uploading.set(false);
                    navigate.with_value(|nav| nav("/", NavigateOptions::default()));
                }
                Err(e) => {
                    log::error!("Error uploading file: {}", e);
                    set_is_uploading.set(false);
                    set_status.set(Some(UploadStatus::Error(e.to_string())));
                }
            }
        });
    };

    let open_picker = move |_: ev::MouseEvent| {
        if let Some(input) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("data-connect-file-input"))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            input.click();
        }
    };

    view! {
        <PageFrame page_id="u501_data_connect--usecase" category=PAGE_CAT_USECASE>
            <div class="data-connect">
                <div class="data-connect__header">
                    <div class="data-connect__icon">{icon("database")}</div>
                    <h1>{DataConnect::display_name()}</h1>
                    <p>"Upload your sales and inventory history as a CSV or Excel file."</p>
                </div>

                <div
                    class="data-connect__dropzone"
                    class:data-connect__dropzone--active=move || drag_over.get()
                    class:data-connect__dropzone--error=move || {
                        matches!(status.get(), Some(UploadStatus::Error(_)))
                    }
                    class:data-connect__dropzone--success=move || {
                        status.get() == Some(UploadStatus::Success)
                    }
                    on:click=open_picker
                    on:dragover=move |ev: web_sys::DragEvent| {
                        ev.prevent_default();
                        set_drag_over.set(true);
                    }
                    on:dragleave=move |ev: web_sys::DragEvent| {
                        ev.prevent_default();
                        set_drag_over.set(false);
                    }
                    on:drop=on_drop
                >
                    {icon("upload")}
                    <p class="data-connect__hint">"Drag and drop your file here, or click to browse"</p>
                    <p class="data-connect__formats">"Supported formats: .csv, .xls, .xlsx"</p>
                    <input
                        id="data-connect-file-input"
                        type="file"
                        accept=".csv,.xls,.xlsx,text/csv"
                        style="display: none;"
                        on:change=on_input_change
                    />
                </div>

                <div class="data-connect__file" class:data-connect__file--empty=move || file_name.get().is_none()>
                    {icon("file-text")}
                    <span>{move || display_name(file_name.get().as_deref())}</span>
                </div>

                {move || status.get().map(|s| match s {
                    UploadStatus::Success => view! {
                        <div class="data-connect__status data-connect__status--success">
                            {icon("check-circle")}
                            <span>"Data connected successfully!"</span>
                        </div>
                    }
                        .into_any(),
                    UploadStatus::Error(message) => view! {
                        <div class="data-connect__status data-connect__status--error">
                            {icon("alert-triangle")}
                            <span>{message}</span>
                        </div>
                    }
                        .into_any(),
                })}

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || file_name.get().is_none() || is_uploading.get())
                    on_click=on_connect
                >
                    {icon("cloud")}
                    {move || if is_uploading.get() { "Uploading..." } else { "Connect Data" }}
                </Button>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_clears_itself() {
        let shown = UploadStatus::Error("Please upload a CSV or Excel file".into());
        assert!(should_clear(Some(&shown), &shown));
    }

    #[test]
    fn test_newer_status_survives() {
        let expiring = UploadStatus::Error("No file selected".into());
        let newer = UploadStatus::Error("Server error (500)".into());
        assert!(!should_clear(Some(&newer), &expiring));
        assert!(!should_clear(Some(&UploadStatus::Success), &expiring));
        assert!(!should_clear(None, &expiring));
    }
}
