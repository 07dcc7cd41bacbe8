use crate::ending::EndingId;

/// Alias for `Result<T, MaskError>`.
pub type MaskResult<T> = Result<T, MaskError>;

/// Errors surfaced by the state engine.
///
/// None of these are fatal to a playthrough: storage errors degrade to
/// memory-only state and a refused commit leaves the run untouched.
#[derive(Debug, thiserror::Error)]
pub enum MaskError {
    /// Reading or writing the save file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The save could not be serialized or parsed.
    #[error("save data error: {0}")]
    Json(#[from] serde_json::Error),

    /// The save parsed as JSON but is not an object.
    #[error("save data is not a JSON object")]
    NotAnObject,

    /// The storage backend refused the write.
    #[error("write rejected by storage backend")]
    WriteRejected,

    /// The current run already committed an ending.
    #[error("ending already committed for this run: {ending}")]
    AlreadyCommitted {
        /// The ending that was committed first.
        ending: EndingId,
    },

    /// A path name did not match any known path.
    #[error("unknown path: \"{0}\"")]
    UnknownPath(String),

    /// An ending name did not match any known ending.
    #[error("unknown ending: \"{0}\"")]
    UnknownEnding(String),

    /// A final-choice name did not match wear, destroy, or give.
    #[error("unknown final choice: \"{0}\"")]
    UnknownChoice(String),
}
