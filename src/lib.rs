#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot explorer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which the orbit of `z = z * z + c` stays bounded.  This crate
//! draws it in gray: every pixel of a viewport is mapped onto the
//! plane, iterated until its orbit leaves the circle of radius 2 or
//! the iteration budget runs out, and shaded by how long it held on.
//! Points that never leave are the darkest-but-one gray, and points
//! that leave immediately are black.
//!
//! The viewport pans by quarter steps and zooms around its own
//! center, so an explorer can keep doubling the scale without the
//! picture wandering off.  Drawing a frame blocks until every pixel
//! is done, whether on one thread or many.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

pub mod errors;
pub mod escape;
pub mod render;
pub mod session;
pub mod viewport;

pub use errors::{MandelError, Result};
pub use escape::{certainty_to_grayscale, color_for_pixel, escape_certainty};
pub use render::{render, render_threaded, Frame, RenderRequest};
pub use session::{Action, Outcome, Session};
pub use viewport::{Pixel, Viewport};
