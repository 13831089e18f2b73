//! Errors reported by the gauge.

use thiserror::Error;

use crate::ui::canvas::CanvasError;

use super::size::Size;

/// Failure of a gauge update or draw.
///
/// A failed update leaves the previous progress in place and a failed size
/// check happens before anything is drawn.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GaugeError {
    /// The progress arguments are out of range.
    #[error("invalid progress: {0}")]
    Validation(String),

    /// The canvas is smaller than the gauge's minimum size.
    #[error("canvas of {got} is smaller than the required minimum of {min}")]
    Size { got: Size, min: Size },

    /// The canvas rejected a draw request.
    #[error(transparent)]
    Canvas(#[from] CanvasError),
}
