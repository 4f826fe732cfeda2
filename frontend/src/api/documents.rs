use reqwest::{
    header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    multipart::{Form, Part},
};

use super::{
    client::{map_error_response, map_json_response, ApiClient},
    types::{ApiError, Document, DownloadedFile, FileUpload, NewDocument},
};

fn file_part(file: &FileUpload) -> Result<Part, ApiError> {
    Part::bytes(file.bytes.clone())
        .file_name(file.file_name.clone())
        .mime_str(&file.content_type)
        .map_err(|e| ApiError::validation(format!("Invalid file type: {}", e)))
}

fn upload_form(meta: Option<&NewDocument>, file: &FileUpload) -> Result<Form, ApiError> {
    let mut form = Form::new();
    if let Some(meta) = meta {
        form = form
            .text("name", meta.name.clone())
            .text("documentType", meta.document_type.clone());
    }
    Ok(form.part("file", file_part(file)?))
}

/// Extracts the file name from `attachment; filename="a.pdf"` (or the
/// RFC 5987 `filename*=UTF-8''a.pdf` form).
pub(crate) fn content_disposition_file_name(header: &str) -> Option<String> {
    let mut plain = None;
    for part in header.split(';').map(str::trim) {
        if let Some(encoded) = part.strip_prefix("filename*=") {
            let value = encoded.split("''").nth(1).unwrap_or(encoded);
            let decoded = percent_encoding::percent_decode_str(value.trim_matches('"'))
                .decode_utf8_lossy()
                .into_owned();
            if !decoded.is_empty() {
                return Some(decoded);
            }
        } else if let Some(value) = part.strip_prefix("filename=") {
            let value = value.trim_matches('"');
            if !value.is_empty() {
                plain = Some(value.to_string());
            }
        }
    }
    plain
}

impl ApiClient {
    pub async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        self.get_json("/employee/documents").await
    }

    pub async fn upload_document(
        &self,
        meta: NewDocument,
        file: FileUpload,
    ) -> Result<Document, ApiError> {
        if meta.name.trim().is_empty() {
            return Err(ApiError::validation("Document name is required."));
        }
        if file.bytes.is_empty() {
            return Err(ApiError::validation("The selected file is empty."));
        }
        let url = self.url("/employee/documents").await;
        let response = self
            .send_with_refresh(|| {
                // Multipart bodies are consumed on send, so rebuild per attempt.
                Ok(self
                    .http_client()
                    .post(&url)
                    .multipart(upload_form(Some(&meta), &file)?))
            })
            .await?;
        map_json_response(response).await
    }

    pub async fn replace_document(&self, id: &str, file: FileUpload) -> Result<Document, ApiError> {
        if file.bytes.is_empty() {
            return Err(ApiError::validation("The selected file is empty."));
        }
        let url = self.url(&format!("/employee/documents/{}", id)).await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .put(&url)
                    .multipart(upload_form(None, &file)?))
            })
            .await?;
        map_json_response(response).await
    }

    pub async fn download_document(&self, id: &str) -> Result<DownloadedFile, ApiError> {
        let url = self.url(&format!("/employee/documents/{}/download", id)).await;
        let response = self
            .send_with_refresh(|| Ok(self.http_client().get(&url)))
            .await?;
        if !response.status().is_success() {
            return Err(map_error_response(response).await);
        }
        let headers = response.headers().clone();
        let file_name = headers
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(content_disposition_file_name)
            .unwrap_or_else(|| format!("document-{}", id));
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read file: {}", e)))?;
        Ok(DownloadedFile {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        })
    }
}
