//! Upload controller: file picker, upload button, and the click flow.
//!
//! One click orchestrates one upload attempt: read the selected file, start
//! the cosmetic progress animation, POST the multipart body, then reflect
//! the settled outcome in the page.

use leptos::html::Input;
use leptos::*;

use crate::components::ProgressTicker;
use crate::config::{ResponseField, UploadConfig};
use crate::services::upload_image;

#[component]
pub fn UploadSection(
    /// Endpoint and response-field mapping for this deployment.
    config: UploadConfig,
    is_uploading: ReadSignal<bool>,
    set_is_uploading: WriteSignal<bool>,
    set_percent: WriteSignal<u8>,
    set_progress_shown: WriteSignal<bool>,
    set_grade: WriteSignal<Option<String>>,
    set_result_text: WriteSignal<Option<String>>,
) -> impl IntoView {
    let file_input_ref = create_node_ref::<Input>();

    let on_upload_click = move |_| {
        // garde anti double-clic: un seul upload à la fois
        if is_uploading.get() {
            return;
        }

        let file = file_input_ref
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let file = match file {
            Some(file) => file,
            None => {
                alert("Please select a file to upload.");
                return;
            }
        };

        set_is_uploading.set(true);
        set_progress_shown.set(true);
        let ticker = ProgressTicker::start(set_percent);

        // Lancer l'upload
        let config = config.clone();
        spawn_local(async move {
            log::info!("📤 Uploading {} ({} bytes)", file.name(), file.size());

            match upload_image(file, &config).await {
                Ok(report) => {
                    ticker.finish();
                    log::info!("Success: {:?}", report);

                    let value = report.display_value(config.result_field);
                    match config.result_field {
                        ResponseField::Note => set_grade.set(Some(value)),
                        ResponseField::Text => set_result_text.set(Some(value)),
                    }

                    set_progress_shown.set(false);
                    scroll_to_top();
                }
                Err(e) => {
                    ticker.cancel();
                    log::error!("Error: {}", e);
                    alert("Upload failed.");

                    set_progress_shown.set(false);
                    set_grade.set(None);
                    set_result_text.set(None);
                }
            }

            set_is_uploading.set(false);
        });
    };

    view! {
        <div class="upload-section" id="uploadZone">
            <input type="file" id="fileInput" accept="image/*" node_ref=file_input_ref/>
            <button
                class="upload-button"
                id="uploadBtn"
                disabled=move || is_uploading.get()
                on:click=on_upload_click
            >
                {move || if is_uploading.get() { "⏳ Uploading..." } else { "Upload" }}
            </button>
        </div>
    }
}

/// Blocking user-facing notice, `window.alert` style.
fn alert(message: &str) {
    if let Err(e) = gloo_utils::window().alert_with_message(message) {
        log::warn!("Failed to show alert ({}): {:?}", message, e);
    }
}

/// Scroll the page back to the verdict at the top.
fn scroll_to_top() {
    gloo_utils::window().scroll_to_with_x_and_y(0.0, 0.0);
}
