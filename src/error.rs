use thiserror::Error;

/// Errors raised by matrix algebra, network construction and training.
///
/// Every variant reflects a structural or configuration defect. Nothing here is
/// transient, so callers should fix the input rather than retry.
#[derive(Debug, Error)]
pub enum Error {
    /// Operand shapes disagree, either inside a matrix operation or at a layer boundary.
    #[error("dimension mismatch in {op}: {left:?} vs {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A zero pivot was found while solving a linear system.
    #[error("matrix is singular")]
    SingularMatrix,

    #[error("invalid shape: {0}")]
    InvalidShape(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("training batch is empty")]
    EmptyBatch,

    #[error("dataset is empty")]
    EmptyDataset,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn mismatch(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Error {
        Error::DimensionMismatch { op, left, right }
    }
}
