// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns a viewport and an iteration budget into a frame of gray
//! pixels.  Every pixel is independent of every other, so the
//! threaded renderer simply hands whole columns of the frame to
//! whichever worker asks for one next.

extern crate crossbeam;

use image::{Rgb, RgbImage};
use std::iter::Enumerate;
use std::slice::ChunksMut;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use errors::{MandelError, Result};
use escape::color_for_pixel;
use viewport::{Pixel, Viewport};

type ColumnQueue<'a> = Arc<Mutex<Enumerate<ChunksMut<'a, Rgb<u8>>>>>;

/// A viewport snapshot paired with an iteration budget.  Building
/// one is the only way to get a budget past validation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderRequest {
    /// The window being drawn.
    pub viewport: Viewport,
    /// Iterations allowed per point.
    pub max_iterations: usize,
}

impl RenderRequest {
    /// Fails with `InvalidIterationBudget` if `max_iterations` is 0.
    pub fn new(viewport: Viewport, max_iterations: usize) -> Result<Self> {
        if max_iterations < 1 {
            return Err(MandelError::InvalidIterationBudget(max_iterations));
        }
        Ok(RenderRequest {
            viewport,
            max_iterations,
        })
    }

    /// Draw the frame on the calling thread.
    pub fn render(&self) -> Result<Frame> {
        let start = Instant::now();
        let mut frame = Frame::blank(&self.viewport);
        for (column, pixels) in frame.columns_mut().enumerate() {
            self.fill_column(column, pixels);
        }
        debug!(
            "Rendered {}x{} at {} iterations on 1 thread in {:?}",
            self.viewport.width(),
            self.viewport.height(),
            self.max_iterations,
            start.elapsed()
        );
        Ok(frame)
    }

    /// Draw the frame with `threads` workers pulling columns off a
    /// shared queue.  Returns only once every worker has finished.
    /// Zero threads is treated as one.
    pub fn render_threaded(&self, threads: usize) -> Result<Frame> {
        let threads = threads.max(1);
        if threads == 1 {
            return self.render();
        }

        let start = Instant::now();
        let mut frame = Frame::blank(&self.viewport);
        {
            let columns: ColumnQueue = Arc::new(Mutex::new(frame.columns_mut().enumerate()));
            crossbeam::scope(|spawner| {
                for _ in 0..threads {
                    let columns = columns.clone();
                    spawner.spawn(move |_| loop {
                        let column = match columns.lock() {
                            Ok(mut queue) => queue.next(),
                            Err(_) => None,
                        };
                        match column {
                            Some((column, pixels)) => self.fill_column(column, pixels),
                            None => {
                                break;
                            }
                        }
                    });
                }
            })
            .map_err(|_| MandelError::WorkerPanicked)?;
        }
        debug!(
            "Rendered {}x{} at {} iterations on {} threads in {:?}",
            self.viewport.width(),
            self.viewport.height(),
            self.max_iterations,
            threads,
            start.elapsed()
        );
        Ok(frame)
    }

    fn fill_column(&self, column: usize, pixels: &mut [Rgb<u8>]) {
        trace!("Filling column {}", column);
        for (row, pixel) in pixels.iter_mut().enumerate() {
            *pixel = color_for_pixel(&Pixel(column, row), &self.viewport, self.max_iterations);
        }
    }
}

/// A finished grid of pixel colors.  Pixels are stored in the order
/// the viewport enumerates them: column by column, so the color of
/// `Pixel(x, y)` lives at `x * height + y`.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<Rgb<u8>>,
}

impl Frame {
    fn blank(viewport: &Viewport) -> Self {
        Frame {
            width: viewport.width(),
            height: viewport.height(),
            pixels: vec![Rgb([0, 0, 0]); viewport.len()],
        }
    }

    fn columns_mut(&mut self) -> ChunksMut<Rgb<u8>> {
        self.pixels.chunks_mut(self.height)
    }

    /// Pixel width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Pixel height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The color at a pixel, or None outside the frame.
    pub fn get(&self, pixel: &Pixel) -> Option<Rgb<u8>> {
        if pixel.0 >= self.width || pixel.1 >= self.height {
            return None;
        }
        Some(self.pixels[pixel.0 * self.height + pixel.1])
    }

    /// All colors in enumeration order.
    pub fn pixels(&self) -> &[Rgb<u8>] {
        &self.pixels
    }

    /// Copy the frame into an image buffer, ready to be blitted to a
    /// display surface.
    pub fn into_image(self) -> RgbImage {
        let height = self.height;
        let pixels = self.pixels;
        RgbImage::from_fn(self.width as u32, height as u32, |x, y| {
            pixels[x as usize * height + y as usize]
        })
    }
}

/// Validate the budget and draw the whole frame on the calling thread.
pub fn render(viewport: &Viewport, max_iterations: usize) -> Result<Frame> {
    RenderRequest::new(*viewport, max_iterations)?.render()
}

/// Validate the budget and draw the whole frame across `threads`
/// workers.  The result is identical to `render`.
pub fn render_threaded(viewport: &Viewport, max_iterations: usize, threads: usize) -> Result<Frame> {
    RenderRequest::new(*viewport, max_iterations)?.render_threaded(threads)
}
