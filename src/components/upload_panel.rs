use crate::api;
use crate::format::format_file_size;
use crate::monitoring::Logger;
use dioxus::prelude::*;
use dioxus::web::WebEventExt;
use wasm_bindgen::JsCast;

const FILE_INPUT_ID: &str = "pdf-input";

/// Severity of the upload status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

impl StatusLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// The file currently queued for upload. Selection is not validated
/// here; the upload workflow checks it just before sending.
#[derive(Clone)]
struct SelectedFile {
    file: web_sys::File,
    name: String,
    size_bytes: f64,
    content_type: String,
}

impl SelectedFile {
    fn new(file: web_sys::File) -> Self {
        let name = file.name();
        let size_bytes = file.size();
        let content_type = file.type_();
        Self {
            file,
            name,
            size_bytes,
            content_type,
        }
    }
}

fn file_input() -> Option<web_sys::HtmlInputElement> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(FILE_INPUT_ID)?.dyn_into().ok()
}

async fn read_and_upload(selection: &SelectedFile) -> Result<api::UploadResponse, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(selection.file.array_buffer())
        .await
        .map_err(|_| "Failed to read file".to_string())?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    api::upload_pdf(&selection.name, &bytes).await
}

#[component]
pub fn UploadPanel() -> Element {
    let mut selected = use_signal(|| Option::<SelectedFile>::None);
    let mut status = use_signal(|| Option::<(StatusLevel, String)>::None);
    let mut is_uploading = use_signal(|| false);
    let mut drag_active = use_signal(|| false);

    let on_file_change = move |_evt: Event<FormData>| {
        let picked = file_input()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(SelectedFile::new);
        selected.set(picked);
    };

    let on_drop = move |evt: Event<DragData>| {
        evt.prevent_default();
        drag_active.set(false);
        let dropped = evt
            .try_as_web_event()
            .and_then(|drag| drag.data_transfer())
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        if let Some(file) = dropped {
            selected.set(Some(SelectedFile::new(file)));
        }
    };

    let on_upload = move |_evt: Event<MouseData>| {
        let Some(selection) = selected() else {
            status.set(Some((
                StatusLevel::Error,
                "Please select a PDF file.".to_string(),
            )));
            return;
        };
        if !api::is_pdf_type(&selection.content_type) {
            status.set(Some((
                StatusLevel::Error,
                "Please select a valid PDF file.".to_string(),
            )));
            return;
        }

        is_uploading.set(true);
        status.set(Some((
            StatusLevel::Info,
            "Uploading and processing PDF...".to_string(),
        )));

        spawn(async move {
            match read_and_upload(&selection).await {
                Ok(resp) => {
                    status.set(Some((
                        StatusLevel::Success,
                        format!(
                            "PDF processed successfully! {} text chunks indexed.",
                            resp.chunks
                        ),
                    )));
                    selected.set(None);
                    if let Some(input) = file_input() {
                        input.set_value("");
                    }
                }
                Err(e) => {
                    Logger::error(&format!("Upload failed: {}", e));
                    status.set(Some((StatusLevel::Error, format!("Error: {}", e))));
                }
            }
            is_uploading.set(false);
        });
    };

    let dropzone_class = if drag_active() {
        "file-upload dragover"
    } else {
        "file-upload"
    };

    rsx! {
        section { class: "upload-panel",
            div {
                class: "{dropzone_class}",
                ondragenter: move |evt: Event<DragData>| {
                    evt.prevent_default();
                    drag_active.set(true);
                },
                ondragover: move |evt: Event<DragData>| {
                    evt.prevent_default();
                    drag_active.set(true);
                },
                ondragleave: move |evt: Event<DragData>| {
                    evt.prevent_default();
                    drag_active.set(false);
                },
                ondrop: on_drop,

                input {
                    id: FILE_INPUT_ID,
                    r#type: "file",
                    accept: ".pdf",
                    disabled: is_uploading(),
                    onchange: on_file_change,
                }

                div { class: "file-info",
                    if let Some(selection) = selected() {
                        strong { "Selected: " }
                        "{selection.name}"
                        br {}
                        small { "Size: {format_file_size(selection.size_bytes)}" }
                    } else {
                        "No file selected"
                    }
                }
            }

            button {
                class: "upload-btn",
                disabled: is_uploading(),
                onclick: on_upload,
                if is_uploading() {
                    span { class: "loading-dots",
                        span {}
                        span {}
                        span {}
                    }
                    " Uploading..."
                } else {
                    "Upload PDF"
                }
            }

            if let Some((level, message)) = status() {
                div { class: "status {level.css_class()}", "{message}" }
            }
        }
    }
}
