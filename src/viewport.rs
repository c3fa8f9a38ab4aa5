// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the Viewport struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a window onto the complex plane anchored at its left and top
//! coordinates and sized by a scale factor.  At scale S the window is
//! `1.25/S` wide and `1.0/S` tall.

use errors::{MandelError, Result};
use itertools::{iproduct, Product};
use num::Complex;
use std::ops::Range;

/// The reference resolution of the explorer.
pub const DEFAULT_SIZE: (usize, usize) = (640, 480);
/// Left coordinate of a freshly opened viewport.
pub const DEFAULT_LEFT: f64 = -2.0;
/// Top coordinate of a freshly opened viewport.
pub const DEFAULT_TOP: f64 = 1.0;
/// Scale of a freshly opened viewport.
pub const DEFAULT_SCALE: f64 = 0.5;

/// Pans move the window by a quarter of a unit at scale 1.
const PAN_STEP: f64 = 0.25;
const WINDOW_WIDTH: f64 = 1.25;
const WINDOW_HEIGHT: f64 = 1.0;

/// Describes the x, y of a pixel on the integral plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pixel(pub usize, pub usize);

/// Iterator over every pixel of a viewport, x-major then y-major.
pub type Pixels = Product<Range<usize>, Range<usize>>;

/// The rectangular region of the complex plane currently mapped onto
/// the pixel grid.  Width and height never change after construction;
/// the window is moved with the pan operations and resized with
/// `rescale_and_center`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    width: usize,
    height: usize,
    left: f64,
    top: f64,
    scale: f64,
}

fn check_scale(scale: f64) -> Result<f64> {
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(MandelError::InvalidScale(scale))
    }
}

impl Viewport {
    /// Constructor.  The pixel grid must be at least 2x2 and the
    /// scale must be strictly positive.
    pub fn new(width: usize, height: usize, left: f64, top: f64, scale: f64) -> Result<Viewport> {
        if width < 2 || height < 2 {
            return Err(MandelError::InvalidDimension { width, height });
        }
        let scale = check_scale(scale)?;
        Ok(Viewport {
            width,
            height,
            left,
            top,
            scale,
        })
    }

    /// A viewport of the given size over the default window,
    /// `-2.0 - 1.0i` to `0.5 + 1.0i`.
    pub fn with_size(width: usize, height: usize) -> Result<Viewport> {
        Viewport::new(width, height, DEFAULT_LEFT, DEFAULT_TOP, DEFAULT_SCALE)
    }

    /// Pixel width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Pixel height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Real coordinate of the left edge.
    pub fn left(&self) -> f64 {
        self.left
    }

    /// The top coordinate.  Note that `pixel_to_point` subtracts it, so
    /// the first row of pixels sits at imaginary part `-top`.
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Current scale factor; always > 0.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The total number of pixels in the integral grid, and so the
    /// length of a rendered frame's pixel buffer.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Always false; a viewport is at least 2x2.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Width and height of the visible window on the complex plane.
    pub fn plane_extent(&self) -> (f64, f64) {
        (WINDOW_WIDTH / self.scale, WINDOW_HEIGHT / self.scale)
    }

    /// Every pixel of the grid, column by column.
    pub fn pixels(&self) -> Pixels {
        iproduct!(0..self.width, 0..self.height)
    }

    /// Given a pixel on the integral cartesian plane, map it to a point
    /// on the complex cartesian plane.  Pixel (0, 0) lands on
    /// `left - top i` and pixel (W-1, H-1) on the opposite corner of
    /// the window.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            WINDOW_WIDTH / self.scale * (pixel.0 as f64) / ((self.width - 1) as f64) + self.left,
            WINDOW_HEIGHT / self.scale * (pixel.1 as f64) / ((self.height - 1) as f64) - self.top,
        )
    }

    /// Move the window up by a quarter unit at the current scale.
    pub fn pan_up(&mut self) {
        self.top += PAN_STEP / self.scale;
    }

    /// Move the window down by a quarter unit at the current scale.
    pub fn pan_down(&mut self) {
        self.top -= PAN_STEP / self.scale;
    }

    /// Move the window left by a quarter unit at the current scale.
    pub fn pan_left(&mut self) {
        self.left -= PAN_STEP / self.scale;
    }

    /// Move the window right by a quarter unit at the current scale.
    pub fn pan_right(&mut self) {
        self.left += PAN_STEP / self.scale;
    }

    /// Multiply the scale by `factor` while keeping the center of the
    /// window fixed.  Factors above 1 zoom in, below 1 zoom out.
    ///
    /// The recentering offsets are taken from the window extent at the
    /// scale in effect *before* the update; using the new extent makes
    /// repeated zooms walk across the plane.
    ///
    /// Fails, leaving the viewport untouched, if the new scale would
    /// underflow to zero or overflow, or the window would no longer
    /// fit in a finite region of the plane.
    pub fn rescale_and_center(&mut self, factor: f64) -> Result<()> {
        let factor = check_scale(factor)?;
        let scale = check_scale(self.scale * factor)?;
        let (width, height) = self.plane_extent();

        let left = self.left + width / 2.0 * (1.0 - 1.0 / factor);
        let top = self.top + height / 2.0 * (1.0 / factor - 1.0);
        let extent_is_finite =
            (WINDOW_WIDTH / scale).is_finite() && (WINDOW_HEIGHT / scale).is_finite();
        if !(left.is_finite() && top.is_finite() && extent_is_finite) {
            return Err(MandelError::InvalidScale(scale));
        }

        self.left = left;
        self.top = top;
        self.scale = scale;
        Ok(())
    }

    /// A human-readable zoom ratio: `1:N` when zoomed in past 1,
    /// `N:1` otherwise.
    pub fn scale_label(&self) -> String {
        if self.scale > 1.0 {
            format!("1:{:.0}", self.scale)
        } else {
            format!("{:.0}:1", 1.0 / self.scale)
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: DEFAULT_SIZE.0,
            height: DEFAULT_SIZE.1,
            left: DEFAULT_LEFT,
            top: DEFAULT_TOP,
            scale: DEFAULT_SCALE,
        }
    }
}
