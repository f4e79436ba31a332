use core::fmt;

use thiserror::Error;

use crate::access::PathStep;
use crate::convert::ConvertError;
use crate::info::ReflectKind;

// -----------------------------------------------------------------------------
// AccessError

/// The kind of [`AccessError`], along with some kind-specific information.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessErrorKind {
    /// The record has no field of that name.
    MissingField { type_path: &'static str },
    /// The sequence is shorter than the index.
    IndexOutOfRange { len: usize },
    /// The step does not apply to the kind of value reached.
    IncompatibleKinds {
        expected: ReflectKind,
        actual: ReflectKind,
    },
}

/// An error originating from one [`PathStep`] of a path.
///
/// Use the `Display` impl of this type to get information on the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessError {
    kind: AccessErrorKind,
    step: PathStep<'static>,
    depth: usize,
}

impl AccessError {
    #[inline]
    pub(crate) fn new(kind: AccessErrorKind, step: PathStep<'static>, depth: usize) -> Self {
        Self { kind, step, depth }
    }

    #[inline]
    pub fn kind(&self) -> &AccessErrorKind {
        &self.kind
    }

    /// The step that failed.
    #[inline]
    pub fn step(&self) -> &PathStep<'static> {
        &self.step
    }

    /// The position of the failing step in its path.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { kind, step, depth } = self;

        write!(f, "cannot access `{step}` (step {depth}): ")?;
        match kind {
            AccessErrorKind::MissingField { type_path } => {
                write!(f, "`{type_path}` has no field named `{step}`")
            }
            AccessErrorKind::IndexOutOfRange { len } => {
                write!(f, "index out of range for a sequence of length {len}")
            }
            AccessErrorKind::IncompatibleKinds { expected, actual } => {
                write!(f, "expected a {expected}, found a {actual}")
            }
        }
    }
}

impl core::error::Error for AccessError {}

// -----------------------------------------------------------------------------
// PathAccessError

/// An error returned from a failed path read or write.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PathAccessError {
    /// The path has no steps.
    #[error("the path is empty")]
    EmptyPath,
    /// Walking the path failed.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// The value at the end of the path could not be written.
    #[error("cannot write the value at the end of the path: {0}")]
    Convert(#[from] ConvertError),
    /// The value at the end of the path is not of the requested type.
    #[error("the value at the end of the path is not a `{expected}`")]
    InvalidDowncast { expected: &'static str },
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn messages() {
        let err = AccessError::new(
            AccessErrorKind::IndexOutOfRange { len: 3 },
            PathStep::Index(5),
            1,
        );
        assert_eq!(
            err.to_string(),
            "cannot access `[5]` (step 1): index out of range for a sequence of length 3"
        );

        let err = AccessError::new(
            AccessErrorKind::IncompatibleKinds {
                expected: ReflectKind::Struct,
                actual: ReflectKind::Opaque,
            },
            PathStep::Field("city".into()),
            2,
        );
        assert_eq!(
            PathAccessError::from(err).to_string(),
            "cannot access `city` (step 2): expected a Struct, found a Opaque"
        );
    }

    #[test]
    fn write_errors_keep_the_cause() {
        let err = PathAccessError::from(ConvertError::InvalidBool {
            input: "maybe".into(),
        });
        let message = err.to_string();
        assert!(message.starts_with("cannot write the value at the end of the path: "), "{message}");
        assert!(message.contains("maybe"), "{message}");
    }
}
