use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures a generator run can hit. All of them abort the run; a one-shot
/// generator has no partial-success state to report.
#[derive(Debug, Error)]
pub enum Error {
    #[error("component has no registered position: {0}")]
    UnknownComponent(String),

    #[error("category tag has no registered style: {0}")]
    UnknownCategory(String),

    #[error("malformed dataset: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("render failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
