use crate::api::{ApiError, FileUpload, NewDocument};
use leptos::*;

pub const DOCUMENT_TYPES: [(&str, &str); 4] = [
    ("CONTRACT", "Contract"),
    ("IDENTIFICATION", "Identification"),
    ("CERTIFICATE", "Certificate"),
    ("OTHER", "Other"),
];

pub fn document_type_label(value: &str) -> String {
    DOCUMENT_TYPES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(value))
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| value.to_string())
}

#[derive(Clone, Copy)]
pub struct UploadFormState {
    name: RwSignal<String>,
    document_type: RwSignal<String>,
    file: RwSignal<Option<FileUpload>>,
}

impl Default for UploadFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            document_type: create_rw_signal(DOCUMENT_TYPES[0].0.to_string()),
            file: create_rw_signal(None),
        }
    }
}

impl UploadFormState {
    pub fn name_signal(&self) -> RwSignal<String> {
        self.name
    }

    pub fn type_signal(&self) -> RwSignal<String> {
        self.document_type
    }

    pub fn file_signal(&self) -> RwSignal<Option<FileUpload>> {
        self.file
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.document_type.set(DOCUMENT_TYPES[0].0.to_string());
        self.file.set(None);
    }

    /// The name falls back to the chosen file's name when left blank.
    pub fn to_payload(self) -> Result<(NewDocument, FileUpload), ApiError> {
        let file = self
            .file
            .get()
            .ok_or_else(|| ApiError::validation("Choose a file to upload."))?;
        let name = match self.name.get().trim() {
            "" => file.file_name.clone(),
            name => name.to_string(),
        };
        let document_type = self.document_type.get().trim().to_string();
        if document_type.is_empty() {
            return Err(ApiError::validation("Please choose a document type."));
        }
        Ok((
            NewDocument {
                name,
                document_type,
            },
            file,
        ))
    }
}

/// Reads the first file selected in an `<input type="file">`.
#[cfg(target_arch = "wasm32")]
pub async fn read_selected_file(input: web_sys::HtmlInputElement) -> Result<FileUpload, ApiError> {
    let file = input
        .files()
        .and_then(|files| files.get(0))
        .ok_or_else(|| ApiError::validation("Choose a file to upload."))?;
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::unknown("Failed to read the selected file"))?;
    let content_type = match file.type_() {
        t if t.is_empty() => "application/octet-stream".to_string(),
        t => t,
    };
    Ok(FileUpload {
        file_name: file.name(),
        content_type,
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn read_selected_file(_input: web_sys::HtmlInputElement) -> Result<FileUpload, ApiError> {
    Err(ApiError::unknown("File input is only available in the browser"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    fn pdf() -> FileUpload {
        FileUpload {
            file_name: "contract.pdf".into(),
            content_type: "application/pdf".into(),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn payload_requires_a_file() {
        with_runtime(|| {
            let state = UploadFormState::default();
            state.name_signal().set("Contract".into());
            assert_eq!(state.to_payload().unwrap_err().error, "Choose a file to upload.");
        });
    }

    #[test]
    fn blank_name_uses_file_name() {
        with_runtime(|| {
            let state = UploadFormState::default();
            state.file_signal().set(Some(pdf()));
            let (meta, file) = state.to_payload().unwrap();
            assert_eq!(meta.name, "contract.pdf");
            assert_eq!(meta.document_type, "CONTRACT");
            assert_eq!(file.bytes, vec![1, 2, 3]);

            state.name_signal().set("  Signed contract ".into());
            assert_eq!(state.to_payload().unwrap().0.name, "Signed contract");

            state.reset();
            assert!(state.file_signal().get().is_none());
        });
    }

    #[test]
    fn labels_known_types_and_passes_unknown_through() {
        assert_eq!(document_type_label("certificate"), "Certificate");
        assert_eq!(document_type_label("PAYSLIP"), "PAYSLIP");
    }
}
