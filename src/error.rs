//! Error types

use crate::buffer::BufferVars;
use crate::tag::DisplayTag;
use std::fmt;

/// Error returned from font shaping functions
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ShapingError {
    ComplexScript(ComplexScriptError),
}

impl From<ComplexScriptError> for ShapingError {
    fn from(error: ComplexScriptError) -> Self {
        ShapingError::ComplexScript(error)
    }
}

impl fmt::Display for ShapingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapingError::ComplexScript(err) => write!(f, "indic shaping: {}", err),
        }
    }
}

impl std::error::Error for ShapingError {}

/// Error returned from font shaping complex scripts
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ComplexScriptError {
    /// A per-glyph shaper variable was allocated while still live.
    VarAlreadyAllocated(BufferVars),
    /// A per-glyph shaper variable was used or released without being allocated.
    VarNotAllocated(BufferVars),
    /// The script tag is not handled by this shaper.
    UnsupportedScript(u32),
}

impl fmt::Display for ComplexScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexScriptError::VarAlreadyAllocated(vars) => {
                write!(f, "buffer variable {:?} already allocated", vars)
            }
            ComplexScriptError::VarNotAllocated(vars) => {
                write!(f, "buffer variable {:?} not allocated", vars)
            }
            ComplexScriptError::UnsupportedScript(script) => {
                write!(f, "unsupported script '{}'", DisplayTag(*script))
            }
        }
    }
}

impl std::error::Error for ComplexScriptError {}
