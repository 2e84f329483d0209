//! Diagram loading over HTTP
//!
//! Mirrors the host application flow: fetch the document text, import it,
//! and let `import.done` announce the outcome either way.

use crate::editor::{Editor, ImportReport};
use crate::error::ImportError;
use crate::events::ImportDoneEvent;

/// Loads diagram documents into an editor
#[derive(Debug, Clone, Default)]
pub struct DiagramLoader {
    http: reqwest::Client,
}

impl DiagramLoader {
    /// Loader with a default HTTP client
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader with a preconfigured HTTP client
    #[must_use]
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Fetch a document over HTTP and import it into the editor
    ///
    /// Non-success statuses are fetch failures. The `import.done` event
    /// fires with the error rendering before a failure is returned.
    ///
    /// # Errors
    /// [`ImportError::Fetch`] when the request fails, plus the
    /// [`Editor::import_str`] failure modes.
    pub async fn load_url(&self, editor: &Editor, url: &str) -> Result<ImportReport, ImportError> {
        tracing::info!(url, "loading diagram");
        let text = match self.fetch(url).await {
            Ok(text) => text,
            Err(err) => {
                editor.events().emit_import_done(ImportDoneEvent {
                    warnings: Vec::new(),
                    error: Some(err.to_string()),
                });
                return Err(ImportError::Fetch(err));
            }
        };
        editor.import_str(&text)
    }

    async fn fetch(&self, url: &str) -> Result<String, reqwest::Error> {
        self.http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}
