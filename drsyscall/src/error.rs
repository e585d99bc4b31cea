// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DrsysError {
    #[error("invalid parameter")]
    InvalidParameter,
    #[error("not found")]
    NotFound,
    /// The caller's buffer is too small; `needed` is the required capacity.
    #[error("buffer too small, {needed} entries needed")]
    InvalidSize { needed: usize },
    #[error("feature not available on this platform")]
    FeatureNotAvailable,
    #[error("invalid call sequence")]
    InvalidCall,
    #[error("details unknown")]
    DetailsUnknown,
    #[error("{0}")]
    Error(String),
}

pub type Result<T> = std::result::Result<T, DrsysError>;

/// Outcome of a successful initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitStatus {
    Success,
    /// The running kernel matched no number set; results for unknown calls
    /// carry a higher false-positive risk.
    WarningUnsupportedKernel,
}
