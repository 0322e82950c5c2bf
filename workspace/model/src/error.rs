use thiserror::Error;

/// Error types raised while ingesting a provider document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The body is not JSON, or not shaped as an array of datasets
    #[error("{0}")]
    Malformed(#[from] serde_json::Error),

    /// No dataset exists at the index selected by the forecast horizon
    #[error("選択された予報期間のデータセットが見つかりませんでした。")]
    MissingDataset { index: usize },

    /// The selected dataset carries no first time-series block
    #[error("timeSeries[0]の予報データが見つかりません。")]
    MissingTimeSeries { index: usize },
}

impl DocumentError {
    /// True when the document parsed but an expected structural path is absent.
    pub fn is_missing_data(&self) -> bool {
        matches!(
            self,
            DocumentError::MissingDataset { .. } | DocumentError::MissingTimeSeries { .. }
        )
    }
}

/// Type alias for Result with DocumentError
pub type Result<T> = std::result::Result<T, DocumentError>;
