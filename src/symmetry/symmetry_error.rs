//! Error type for recoverable failures of the symmetry engine.

use std::fmt;

/// An enumerated type for the recoverable failures of the symmetry engine. None of these is
/// fatal: callers receive one of them in place of a result and may fall back to another
/// notation or input.
#[derive(Clone, PartialEq, Eq)]
pub enum SymmetryError {
    /// A malformed Hall symbol, Hermann–Mauguin symbol or operator string.
    NotationParse(String),

    /// A symbol that has no entry in the space-group catalog.
    LookupMiss(String),

    /// An input larger than the fixed working limits of the engine.
    CapacityExceeded(String),

    /// A geometric configuration for which no meaningful answer exists.
    GeometricDegeneracy(String),
}

impl SymmetryError {
    /// Returns the message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            Self::NotationParse(msg)
            | Self::LookupMiss(msg)
            | Self::CapacityExceeded(msg)
            | Self::GeometricDegeneracy(msg) => msg,
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Self::NotationParse(_) => "NotationParse",
            Self::LookupMiss(_) => "LookupMiss",
            Self::CapacityExceeded(_) => "CapacityExceeded",
            Self::GeometricDegeneracy(_) => "GeometricDegeneracy",
        }
    }
}

impl fmt::Debug for SymmetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetryError")
            .field("Kind", &self.kind_name())
            .field("Message", &self.message())
            .finish()
    }
}

impl fmt::Display for SymmetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SymmetryError ({}) with message: {}",
            self.kind_name(),
            self.message()
        )
    }
}

impl std::error::Error for SymmetryError {}
