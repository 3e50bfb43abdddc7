use crate::DocId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("document {0} is already indexed")]
    DuplicateDocument(DocId),
    /// Stop words change how every document is filtered, so they are frozen by the first ingest.
    #[error("stop words must be set before ingestion ({documents} documents already indexed)")]
    StopWordsAfterIngest { documents: u32 },
    #[error("no document id left after {}", DocId::MAX)]
    DocIdsExhausted,
}
