use thiserror::Error;

/// The comment graph for a side cannot be projected into root-to-leaf paths.
///
/// Handling policy: the caller retries the page once against the combined
/// fallback container before escalating to [`PageError`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("no path from root to leaf comment `{id}`")]
    NoPathToLeaf { id: String },
    #[error("comment graph contains a cycle through `{id}`")]
    CycleDetected { id: String },
    #[error("threaded reply `{id}` appears before any argument node")]
    DetachedReply { id: String },
}

/// Required markup for one comment could not be located.
///
/// Timestamp/polarity never raise this; they degrade to sentinels inside the
/// extractor. Author and body are mandatory, so this aborts the owning page.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("comment element `{id}` not found")]
    CommentNotFound { id: String },
    #[error("no author link inside comment `{id}`")]
    AuthorNotFound { id: String },
    #[error("body element for comment `{id}` not found")]
    BodyNotFound { id: String },
}

/// The page cannot be reconstructed at all. Always caught at the per-page
/// boundary and turned into a diagnostic entry; never aborts the run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("no debate title heading found (private or removed post?)")]
    MissingTitle,
    #[error("no thread author link found")]
    MissingAuthor,
    #[error("unreconstructable comment structure: {0}")]
    Structure(#[from] StructureError),
    #[error("comment extraction failed: {0}")]
    Extraction(#[from] ExtractionError),
}
