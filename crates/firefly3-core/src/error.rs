use thiserror::Error;

use crate::catalog::ValidationError;
use crate::convert::ConvertError;

/// Failures surfaced by the resource controller.
///
/// Remote and conversion errors pass through transparently so callers
/// see the underlying taxonomy (`NotFound`, status + body, unresolved
/// field) without unwrapping layers.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Api(#[from] firefly3_api::Error),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An operation needed the persisted identifier but none is known.
    #[error("{kind} has no identifier in state; it was never created or imported")]
    MissingIdentifier { kind: &'static str },

    /// Create was invoked for an entity that already exists remotely.
    #[error("{kind} already has identifier `{id}`; it cannot be created again")]
    IdentifierAlreadySet { kind: &'static str, id: String },
}
