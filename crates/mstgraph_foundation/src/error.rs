//! Error types for the mstgraph system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Load-time data inconsistencies are deliberately absent here: they are
//! recorded as warnings on the snapshot and never abort a load.

use std::fmt;

use thiserror::Error;

use crate::kind::{EntityKind, EntityRef};

/// The main error type for mstgraph operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a DataVals decode error.
    #[must_use]
    pub fn decode(
        raw: impl Into<String>,
        token: impl Into<String>,
        failure: DecodeFailure,
    ) -> Self {
        Self::new(ErrorKind::DataValsDecode {
            raw: raw.into(),
            token: token.into(),
            failure,
        })
    }

    /// Creates an entity not found error.
    #[must_use]
    pub fn entity_not_found(entity: EntityRef) -> Self {
        Self::new(ErrorKind::EntityNotFound(entity))
    }

    /// Creates an unsupported reverse depth error.
    #[must_use]
    pub fn unsupported_depth(kind: EntityKind, depth: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedDepth {
            kind,
            depth: depth.into(),
        })
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Returns which class of failure this is.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

/// Broad failure classes, so callers never conflate bad input data
/// with bad requests.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A DataVals string could not be decoded.
    Decode,
    /// The request named something that does not exist or is unsupported.
    Caller,
    /// A dataset could not be read or deserialized.
    Load,
    /// A bug.
    Internal,
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A DataVals string was malformed.
    #[error("cannot decode datavals {raw:?}: {failure} at {token:?}")]
    DataValsDecode {
        /// The complete string that was being decoded.
        raw: String,
        /// The offending token.
        token: String,
        /// What was wrong with the token.
        failure: DecodeFailure,
    },

    /// The requested entity does not exist in the snapshot.
    #[error("entity not found: {0}")]
    EntityNotFound(EntityRef),

    /// The requested reverse depth makes no sense for the root kind.
    #[error("reverse depth {depth} is not supported for {kind}")]
    UnsupportedDepth {
        /// The root kind.
        kind: EntityKind,
        /// The requested depth.
        depth: String,
    },

    /// An entity kind name could not be parsed.
    #[error("unknown entity kind: {0}")]
    UnknownKind(String),

    /// A request argument was malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading a dataset failed.
    #[error("io error: {0}")]
    Io(String),

    /// Deserializing a dataset failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ErrorKind {
    /// Returns which class of failure this is.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DataValsDecode { .. } => ErrorCategory::Decode,
            Self::EntityNotFound(_)
            | Self::UnsupportedDepth { .. }
            | Self::UnknownKind(_)
            | Self::InvalidArgument(_) => ErrorCategory::Caller,
            Self::Io(_) | Self::Serialization(_) => ErrorCategory::Load,
            Self::Internal(_) => ErrorCategory::Internal,
        }
    }
}

/// Reasons a DataVals token is rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeFailure {
    /// An entry between separators was empty.
    #[error("empty entry")]
    EmptyEntry,
    /// A field name appeared without a `:value`.
    #[error("field has no value")]
    MissingValue,
    /// A value was not an integer.
    #[error("not an integer")]
    InvalidInteger,
    /// A keyed entry named a field outside the vocabulary.
    #[error("unknown field")]
    UnknownField,
    /// A scalar field was given a list.
    #[error("expected a single integer")]
    ExpectedScalar,
    /// The same field was given twice.
    #[error("duplicate field")]
    DuplicateField,
    /// Brackets did not pair up.
    #[error("unbalanced brackets")]
    UnbalancedBrackets,
    /// Nested values appeared inside nested values.
    #[error("nested values may only appear at the top level")]
    NestingTooDeep,
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Dataset file or region the error relates to.
    pub source: Option<String>,
    /// Chain of entities being expanded when the error occurred.
    pub path: Vec<EntityRef>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Appends an entity to the expansion path.
    #[must_use]
    pub fn with_entity(mut self, entity: EntityRef) -> Self {
        self.path.push(entity);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if !self.path.is_empty() {
            writeln!(f)?;
            for entity in &self.path {
                writeln!(f, "  while expanding {entity}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias using the mstgraph Error.
pub type Result<T> = std::result::Result<T, Error>;
