use alloc::string::String;

/// Errors returned by engine construction and the engine API.
///
/// Per-item render failures are not reported here: they are recovered inside the reconciler
/// (see [`RenderError`]).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("item extent must be positive, got {0}")]
    InvalidItemExtent(u32),

    #[error("container node is not attached to the surface")]
    ContainerDetached,

    #[error("a table needs at least one column")]
    NoColumns,

    #[error("column `{column}` must have a positive width")]
    InvalidColumnWidth { column: String },

    #[error("unknown column `{0}`")]
    UnknownColumn(String),

    #[error("{0} is disabled for this instance")]
    FeatureDisabled(&'static str),

    #[error("instance destroyed")]
    Destroyed,
}

/// Failure of a caller-supplied render (or update) function for a single item.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RenderError {
    message: String,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
