// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Precondition failures.  None of these are transient; a caller
//! seeing one has been handed a bad configuration and should stop.

use std::result;

/// Everything that can go wrong before (or, for a worker panic,
/// during) a render.
#[derive(Debug, Fail, PartialEq)]
pub enum MandelError {
    /// The pixel grid must be at least 2x2, since the plane mapping
    /// divides by `width - 1` and `height - 1`.
    #[fail(
        display = "Invalid dimension {}x{}: width and height must both be at least 2",
        width, height
    )]
    InvalidDimension {
        /// Requested pixel width.
        width: usize,
        /// Requested pixel height.
        height: usize,
    },

    /// At least one iteration per point is required.
    #[fail(display = "Invalid iteration budget {}: must be at least 1", _0)]
    InvalidIterationBudget(usize),

    /// Scales and rescale factors must be positive, finite numbers.
    #[fail(display = "Invalid scale {}: must be a positive, finite number", _0)]
    InvalidScale(f64),

    /// One of the render threads died; the frame is discarded.
    #[fail(display = "A render worker panicked")]
    WorkerPanicked,
}

/// Result alias used throughout the crate.
pub type Result<T> = result::Result<T, MandelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let e = MandelError::InvalidDimension {
            width: 1,
            height: 480,
        };
        assert_eq!(
            format!("{}", e),
            "Invalid dimension 1x480: width and height must both be at least 2"
        );
        assert_eq!(
            format!("{}", MandelError::InvalidIterationBudget(0)),
            "Invalid iteration budget 0: must be at least 1"
        );
    }
}
