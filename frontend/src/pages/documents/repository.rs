use crate::api::{ApiClient, ApiError, Document, DownloadedFile, FileUpload, NewDocument};
use std::rc::Rc;

#[derive(Clone)]
pub struct DocumentsRepository {
    client: Rc<ApiClient>,
}

impl DocumentsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self) -> Result<Vec<Document>, ApiError> {
        let mut documents = self.client.list_documents().await?;
        documents.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(documents)
    }

    pub async fn upload(&self, meta: NewDocument, file: FileUpload) -> Result<Document, ApiError> {
        log::debug!("uploading {} ({} bytes)", file.file_name, file.bytes.len());
        self.client.upload_document(meta, file).await
    }

    pub async fn replace(&self, id: &str, file: FileUpload) -> Result<Document, ApiError> {
        self.client.replace_document(id, file).await
    }

    pub async fn download(&self, id: &str) -> Result<DownloadedFile, ApiError> {
        self.client.download_document(id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::ACCESS_TOKEN_KEY;
    use crate::utils::storage::MemoryStore;
    use serde_json::json;

    fn repo(server: &MockServer) -> DocumentsRepository {
        DocumentsRepository::new(
            ApiClient::new_with_base_url(server.url("/api")).with_storage(Rc::new(
                MemoryStore::with_entries([(ACCESS_TOKEN_KEY, "token")]),
            )),
        )
    }

    #[tokio::test]
    async fn lists_newest_upload_first() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/employee/documents");
            then.status(200).json_body(json!([
                { "id": "d1", "name": "Old", "documentType": "OTHER", "uploadedAt": "2024-01-01T10:00:00" },
                { "id": "d2", "name": "New", "documentType": "CONTRACT", "uploadedAt": "2024-05-01T10:00:00" }
            ]));
        });

        let documents = repo(&server).list().await.unwrap();
        let ids: Vec<_> = documents.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["d2", "d1"]);
    }

    #[tokio::test]
    async fn empty_file_is_rejected_before_sending() {
        let server = MockServer::start_async().await;
        let file = FileUpload {
            file_name: "empty.pdf".into(),
            content_type: "application/pdf".into(),
            bytes: Vec::new(),
        };

        let err = repo(&server).replace("d1", file).await.unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(server.total_requests(), 0);
    }

    #[tokio::test]
    async fn download_surfaces_server_errors() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/employee/documents/d9/download");
            then.status(404).json_body(json!({ "error": "Document not found", "code": "NOT_FOUND" }));
        });

        let err = repo(&server).download("d9").await.unwrap_err();
        assert_eq!(err.error, "Document not found");
    }
}
