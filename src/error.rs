use std::fmt;

/// Errors produced when configuring a fingerprinter or asking it for an
/// output it cannot produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FingerprintError {
    /// A numeric class code outside `1..=8`.
    InvalidClass(i32),
    /// A class name that is not one of `ECFP0`..`FCFP6`.
    UnknownClassName(String),
    /// The folded bit vector must hold at least one bit.
    InvalidFoldedLength(usize),
    /// The named output is not available from this engine.
    Unsupported(&'static str),
    /// A coordinate set whose length differs from the molecule's atom count.
    CoordinateCount { atoms: usize, coordinates: usize },
}

impl fmt::Display for FingerprintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidClass(code) => {
                write!(f, "invalid fingerprint class code {}", code)
            }
            Self::UnknownClassName(name) => {
                write!(f, "unknown fingerprint class '{}'", name)
            }
            Self::InvalidFoldedLength(len) => {
                write!(f, "invalid folded fingerprint length {}", len)
            }
            Self::Unsupported(what) => write!(f, "unsupported operation: {}", what),
            Self::CoordinateCount { atoms, coordinates } => write!(
                f,
                "{} coordinates given for a molecule of {} atoms",
                coordinates, atoms
            ),
        }
    }
}

impl std::error::Error for FingerprintError {}
