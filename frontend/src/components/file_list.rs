//! Staged PDFs with per-file remove buttons.

use leptos::*;
use web_sys::{File, MouseEvent};

use crate::controller::UploadController;
use crate::render::file_rows;

#[component]
pub fn FileList(controller: RwSignal<UploadController<File>>) -> impl IntoView {
    // Rows (and their indices) are rebuilt from the current selection on
    // every change, so a remove button always targets the right file.
    let rows = move || controller.with(|c| file_rows(c.selection().files()));

    view! {
        <div class="file-list">
            <For
                each=rows
                key=|row| (row.index, row.name.clone())
                children=move |row| {
                    let index = row.index;
                    let on_remove = move |ev: MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        controller.update(|c| {
                            if let Some(file) = c.remove_file(index) {
                                log::info!("🗑️ Removed {}", file.name());
                            }
                        });
                    };

                    view! {
                        <div class="file-item">
                            <div class="file-icon">"📄"</div>
                            <div class="file-details">
                                <div class="file-name">{row.name}</div>
                                <div class="file-size">{row.size_label}</div>
                            </div>
                            <div class="file-status">
                                <span class="ready-badge">"Ready"</span>
                            </div>
                            <button class="remove-file" title="Remove file" on:click=on_remove>
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
