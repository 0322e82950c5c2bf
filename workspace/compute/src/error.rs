use model::DocumentError;
use thiserror::Error;
use tracing::error;

/// Recoverable outcomes of a render other than a forecast view.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The region control holds the placeholder entry; nothing was fetched
    #[error("地域を選択してください。")]
    NoSelection,

    /// The provider answered with a non-success status
    #[error("エラー: データの取得に失敗しました。HTTPステータス: {status}")]
    HttpFailure { status: u16 },

    /// The document parsed but an expected structural path is absent
    #[error("エラー: {0}")]
    MissingData(String),

    /// Transport failure, malformed JSON or unexpected document shape
    #[error("❌ データの処理中にエラーが発生しました: {0}")]
    ProcessingError(String),
}

impl RenderError {
    /// Stable machine readable code, used by the HTTP API.
    pub fn code(&self) -> &'static str {
        match self {
            RenderError::NoSelection => "NO_SELECTION",
            RenderError::HttpFailure { .. } => "UPSTREAM_HTTP_ERROR",
            RenderError::MissingData(_) => "MISSING_DATA",
            RenderError::ProcessingError(_) => "PROCESSING_ERROR",
        }
    }

    /// Builds a processing error and writes its single diagnostic entry.
    pub fn processing(detail: impl Into<String>) -> Self {
        let err = RenderError::ProcessingError(detail.into());
        error!(?err, "データ処理エラー");
        err
    }
}

impl From<DocumentError> for RenderError {
    fn from(error: DocumentError) -> Self {
        if error.is_missing_data() {
            RenderError::MissingData(error.to_string())
        } else {
            RenderError::processing(error.to_string())
        }
    }
}

/// Outcome of one render invocation.
pub type RenderResult = std::result::Result<common::ForecastView, RenderError>;
