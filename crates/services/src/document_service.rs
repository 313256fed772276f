use std::sync::Arc;

use crate::backend::BackendApi;
use crate::error::DocumentError;

/// PDF upload and text extraction. One request/response each; no
/// polling, chunking, or progress reporting.
#[derive(Clone)]
pub struct DocumentService {
    backend: Arc<dyn BackendApi>,
}

impl DocumentService {
    #[must_use]
    pub fn new(backend: Arc<dyn BackendApi>) -> Self {
        Self { backend }
    }

    /// Upload a PDF under the given filename.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Upload` when the backend call fails.
    pub async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<(), DocumentError> {
        self.backend
            .upload(filename, bytes)
            .await
            .map_err(DocumentError::Upload)
    }

    /// Fetch the extracted text of a previously uploaded PDF.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Extract` when the backend call fails.
    pub async fn extract(&self, filename: &str) -> Result<String, DocumentError> {
        self.backend
            .extract(filename)
            .await
            .map_err(DocumentError::Extract)
    }

    /// Upload then immediately extract, mirroring the upload flow where
    /// extraction starts as soon as the upload succeeds.
    ///
    /// # Errors
    ///
    /// Returns the upload or extract error of whichever step failed.
    pub async fn upload_and_extract(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, DocumentError> {
        self.upload(filename, bytes).await?;
        self.extract(filename).await
    }
}
