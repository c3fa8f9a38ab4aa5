// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator.  Takes a point on the complex plane,
//! iterates `z = z * z + c` starting from `z = c`, and reports how far
//! through its iteration budget the orbit got before leaving the
//! circle of radius 2.  That fraction, the "certainty," is then
//! turned into a gray.

use image::Rgb;
use num::Complex;

use viewport::{Pixel, Viewport};

/// Squared modulus past which an orbit is known to diverge.
const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// Return the certainty, in [0, 1), that the given point lies in the
/// Mandelbrot set.
///
/// The value is the zero-based index of the iteration on which the
/// orbit escaped, divided by the budget.  A point that never escapes
/// reports `(max_iterations - 1) / max_iterations`, not 1.0: the
/// loop counter tops out at its last index.  That shows up as the
/// darkest gray never quite reaching 255 and is kept deliberately.
///
/// A budget of zero evaluates nothing and returns 0.0.
pub fn escape_certainty(point: Complex<f64>, max_iterations: usize) -> f64 {
    if max_iterations == 0 {
        return 0.0;
    }

    let mut z = point;
    let mut reached = max_iterations - 1;
    for i in 0..max_iterations {
        z = z * z + point;
        if z.norm_sqr() > ESCAPE_RADIUS_SQR {
            reached = i;
            break;
        }
    }
    reached as f64 / max_iterations as f64
}

/// Map a certainty onto an even gray.  Certainty is always below 1,
/// so in practice the shade never exceeds 254.
pub fn certainty_to_grayscale(certainty: f64) -> Rgb<u8> {
    let shade = (255.0 * certainty).floor() as u8;
    Rgb([shade, shade, shade])
}

/// The unit of work for a frame: map the pixel onto the plane,
/// evaluate it, and color it.  Holds no state, so any number of
/// threads may call it at once.
pub fn color_for_pixel(pixel: &Pixel, viewport: &Viewport, max_iterations: usize) -> Rgb<u8> {
    let point = viewport.pixel_to_point(pixel);
    certainty_to_grayscale(escape_certainty(point, max_iterations))
}
