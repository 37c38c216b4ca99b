// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use thiserror::Error;
use tourism_dash::CoreError;
use tourism_dash_domain::{Dimension, DomainError};

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// Every variant is scoped to a single interaction; none of them end a
/// session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A selected value is not one of the available options.
    #[error("'{value}' is not an available {} option", .dimension.label())]
    UnknownSelection {
        /// The dimension the value was selected for.
        dimension: Dimension,
        /// The rejected value.
        value: String,
    },
    /// The charts could not be produced for this interaction.
    #[error("Failed to render dashboard: {message}")]
    Rendering {
        /// A description of the failure.
        message: String,
    },
    /// The loaded table has no rows, so there is nothing to select.
    #[error("No tourism data is loaded")]
    NoData,
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidYear(_) => Self::InvalidInput {
                field: String::from("year"),
                message: err.to_string(),
            },
            DomainError::UnknownDimension(_) => Self::InvalidInput {
                field: String::from("dimension"),
                message: err.to_string(),
            },
            DomainError::InvalidMonth(_) | DomainError::InvalidDate { .. } => Self::Rendering {
                message: err.to_string(),
            },
            DomainError::InvalidRevenue(_) | DomainError::EmptyField { .. } => {
                Self::InvalidInput {
                    field: String::from("value"),
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DomainViolation(domain) => Self::from(domain),
            CoreError::UnknownSelection { dimension, value } => {
                Self::UnknownSelection { dimension, value }
            }
            CoreError::TotalOutOfRange { .. } => Self::Rendering {
                message: err.to_string(),
            },
        }
    }
}

/// Result alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
