//! Error types for the warp engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WarpError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WarpError {
    #[error("unknown default spec name: '{0}'")]
    UnknownDefaultName(String),

    #[error("unknown curve kind: '{0}'")]
    UnknownCurve(String),
}
