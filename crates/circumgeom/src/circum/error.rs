//! Argument errors raised by the batch entry points.

use std::fmt;

/// What is wrong with an operand's shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeFault {
    /// Operand has the wrong number of axes.
    Rank { expected: usize, got: usize },
    /// Point operand whose coordinate axis is not 2 wide.
    Width { got: usize },
    /// Triangle operand whose vertex axis is not 3 long.
    Vertices { got: usize },
    /// Operand batch length disagrees with `p0`.
    BatchLen { expected: usize, got: usize },
}

/// Error type shared by all batch operations.
///
/// Degenerate (collinear) triangles are never reported here; they produce
/// non-finite outputs instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CircumError {
    InvalidArgument {
        op: &'static str,
        operand: &'static str,
        fault: ShapeFault,
    },
}

impl CircumError {
    pub(crate) fn invalid(op: &'static str, operand: &'static str, fault: ShapeFault) -> Self {
        Self::InvalidArgument { op, operand, fault }
    }

    /// Name of the operation that rejected its arguments.
    pub fn op(&self) -> &'static str {
        match self {
            Self::InvalidArgument { op, .. } => op,
        }
    }
}

impl fmt::Display for CircumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { op, operand, fault } => match *fault {
                ShapeFault::Rank { expected, got } => write!(
                    f,
                    "{op}: {operand} must be a rank-{expected} array, got rank {got}"
                ),
                ShapeFault::Width { got } => write!(
                    f,
                    "{op}: {operand} only supports 2D coordinates, got width {got}"
                ),
                ShapeFault::Vertices { got } => write!(
                    f,
                    "{op}: {operand} must hold 3 vertices per triangle, got {got}"
                ),
                ShapeFault::BatchLen { expected, got } => write!(
                    f,
                    "{op}: {operand} has {got} points but p0 has {expected}"
                ),
            },
        }
    }
}

impl std::error::Error for CircumError {}
