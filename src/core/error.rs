// src/core/error.rs

use thiserror::Error;

/// Errors raised anywhere between argument parsing and result reporting.
///
/// Nothing is retried; every variant travels up to `main` and ends the run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid size specification: {0}")]
    InvalidSize(String),

    #[error("unsupported element type {dtype} for {operation}")]
    UnsupportedDType { dtype: String, operation: String },

    #[error("no symbol named '{0}'")]
    UnknownName(String),

    #[error("symbol '{0}' is registered more than once")]
    DuplicateName(String),

    #[error("symbol '{name}' is not a {expected}")]
    WrongSymbolKind { name: String, expected: &'static str },

    #[error("{name} takes {expected} operand(s), got {actual}")]
    Arity { name: String, expected: usize, actual: usize },

    #[error("operand shapes {lhs:?} and {rhs:?} do not match")]
    ShapeMismatch { lhs: Vec<usize>, rhs: Vec<usize> },

    #[error("expected a square matrix, got shape {0:?}")]
    NotSquare(Vec<usize>),

    #[error("zero pivot at row {0}; matrix cannot be factored without pivoting")]
    SingularPivot(usize),

    #[error("{0} has no identity and cannot be reduced")]
    NotReducible(String),

    #[error("timer was not started")]
    TimerNotStarted,

    #[error("unknown engine '{0}'")]
    UnknownEngine(String),

    #[error("unknown benchmark '{0}'")]
    UnknownDriver(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
