//! PDF upload component with drag & drop support.
//!
//! Stages files in the [`UploadController`], submits them to the backend
//! and publishes the report (or the failure) for the results panel.

use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement, MouseEvent};

use crate::components::FileList;
use crate::controller::{Outcome, UploadController};
use crate::dom::{event_within, files_from_list, notify};
use crate::render::{build_report_view, ErrorPanel, ResultsView};
use crate::services::extract_and_validate;
use crate::AppConfig;

/// Stage a batch, alerting when it holds no PDF.
fn stage_files(controller: RwSignal<UploadController<File>>, batch: Vec<File>) {
    let incoming = batch.len();
    match controller.try_update(|c| c.add_files(batch)) {
        Some(Ok(added)) => log::info!("📎 Staged {} of {} file(s)", added, incoming),
        Some(Err(e)) => notify(&e.to_string()),
        None => log::warn!("Upload controller is gone"),
    }
}

#[component]
pub fn UploadSection(
    controller: RwSignal<UploadController<File>>,
    results: RwSignal<Option<ResultsView>>,
) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let (drag_over, set_drag_over) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let is_busy = move || controller.with(|c| c.is_busy());

    // Picker: stage, then always clear so the same file can be picked again
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            if files.length() > 0 {
                stage_files(controller, files_from_list(&files));
            }
        }
        input.set_value("");
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(true);
    };

    let on_drag_leave = move |_: DragEvent| set_drag_over.set(false);

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            stage_files(controller, files_from_list(&files));
        }
    };

    // Clicking the zone opens the picker, except on the file list
    let on_zone_click = move |ev: MouseEvent| {
        if event_within(&ev, ".file-list") {
            return;
        }
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let on_submit = move |_: MouseEvent| {
        let files = match controller.try_update(|c| c.begin_submission()) {
            Some(Ok(files)) => files,
            Some(Err(e)) if e.is_user_facing() => {
                notify(&e.to_string());
                return;
            }
            Some(Err(e)) => {
                log::debug!("Submit ignored: {}", e);
                return;
            }
            None => return,
        };

        results.set(None);
        let config = config.clone();

        spawn_local(async move {
            let outcome = match extract_and_validate(&files, &config).await {
                Ok(report) => {
                    results.set(Some(ResultsView::Report(build_report_view(&report))));
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                    Outcome::Success
                }
                Err(e) => {
                    log::error!("❌ Upload error: {}", e);
                    results.set(Some(ResultsView::Failure(ErrorPanel::new(
                        e.to_string(),
                        config.api_url.clone(),
                    ))));
                    Outcome::Failure
                }
            };

            controller.update(|c| c.finish_submission(outcome));
        });
    };

    view! {
        <section class="upload-container" id="upload">
            <div
                class="upload-area"
                class:drag-over=move || drag_over.get()
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
                on:click=on_zone_click
            >
                <div class="upload-icon">"📤"</div>
                <div class="upload-text">"Drag & drop PDF invoices here"</div>
                <div class="upload-hint">"or click to browse"</div>
                <div class="upload-hint">
                    {move || format!("Up to {} PDFs per upload", controller.with(|c| c.max_files()))}
                </div>

                <input
                    type="file"
                    accept="application/pdf"
                    multiple=true
                    style="display:none"
                    node_ref=file_input
                    on:change=on_file_change
                />

                <FileList controller=controller/>
            </div>

            <button
                class="btn btn-primary upload-button"
                disabled=move || !controller.with(|c| c.can_submit())
                on:click=on_submit
            >
                {move || if is_busy() { "⏳ Processing..." } else { "Extract & Validate" }}
            </button>

            <Show when=is_busy fallback=|| view! { }>
                <div class="loading">
                    <div class="spinner"></div>
                    <p>"Extracting and validating invoices..."</p>
                </div>
            </Show>
        </section>
    }
}
