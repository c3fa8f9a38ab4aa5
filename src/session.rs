// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The state an explorer carries between redraws: where it is looking,
//! how hard it is looking, and how many threads it draws with.  Input
//! arrives as `Action`s; each one either asks for a redraw, is
//! ignored, or ends the session.

use std::fmt;
use std::str::FromStr;

use errors::{MandelError, Result};
use render::{Frame, RenderRequest};
use viewport::Viewport;

/// Budget a fresh session starts with.
pub const DEFAULT_ITERATIONS: usize = 100;
/// Budget change that accompanies each zoom step.
pub const ITERATION_STEP: usize = 50;

const ZOOM_FACTOR: f64 = 2.0;
/// Zooming out is refused once the scale drops below this.
const MIN_ZOOM_OUT_SCALE: f64 = 0.5;

/// Something the user asked for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Double the scale, add iterations.
    ZoomIn,
    /// Halve the scale, drop iterations.
    ZoomOut,
    /// Pan up.
    Up,
    /// Pan down.
    Down,
    /// Pan left.
    Left,
    /// Pan right.
    Right,
    /// Stop exploring.
    Quit,
}

/// Returned when a line of input names no action.
#[derive(Clone, Debug, Fail, PartialEq)]
#[fail(display = "Unrecognized action '{}'", _0)]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "+" | "=" => Ok(Action::ZoomIn),
            "-" => Ok(Action::ZoomOut),
            "up" | "k" => Ok(Action::Up),
            "down" | "j" => Ok(Action::Down),
            "left" | "h" => Ok(Action::Left),
            "right" | "l" => Ok(Action::Right),
            "q" | "esc" | "escape" => Ok(Action::Quit),
            _ => Err(UnknownAction(s.trim().to_string())),
        }
    }
}

/// What the caller should do after applying an action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The view changed; draw it again.
    Redraw,
    /// Nothing changed.
    Ignored,
    /// The user is done.
    Quit,
}

/// A viewport plus the iteration budget and thread count it is drawn
/// with.  The viewport is only ever touched between draws.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Session {
    viewport: Viewport,
    max_iterations: usize,
    threads: usize,
}

impl Session {
    /// Fails if the budget is zero.
    pub fn new(viewport: Viewport, max_iterations: usize, threads: usize) -> Result<Self> {
        if max_iterations < 1 {
            return Err(MandelError::InvalidIterationBudget(max_iterations));
        }
        Ok(Session {
            viewport,
            max_iterations,
            threads: threads.max(1),
        })
    }

    /// The current view.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The current iteration budget.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Update the session for one action.
    pub fn apply(&mut self, action: Action) -> Result<Outcome> {
        match action {
            Action::ZoomIn => {
                self.viewport.rescale_and_center(ZOOM_FACTOR)?;
                self.max_iterations += ITERATION_STEP;
            }
            Action::ZoomOut => {
                if self.viewport.scale() < MIN_ZOOM_OUT_SCALE {
                    debug!("Refusing to zoom out past {}", self.viewport.scale_label());
                    return Ok(Outcome::Ignored);
                }
                self.viewport.rescale_and_center(1.0 / ZOOM_FACTOR)?;
                self.max_iterations = self.max_iterations.saturating_sub(ITERATION_STEP).max(1);
            }
            Action::Up => self.viewport.pan_up(),
            Action::Down => self.viewport.pan_down(),
            Action::Left => self.viewport.pan_left(),
            Action::Right => self.viewport.pan_right(),
            Action::Quit => return Ok(Outcome::Quit),
        }
        debug!("{:?} -> {:?}", action, self);
        Ok(Outcome::Redraw)
    }

    /// Render the current view.
    pub fn draw(&self) -> Result<Frame> {
        RenderRequest::new(self.viewport, self.max_iterations)?.render_threaded(self.threads)
    }

    /// The line announced before each redraw.
    pub fn status(&self) -> String {
        format!("{}", self)
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Redrawing in scale {} (iterations: {})...",
            self.viewport.scale_label(),
            self.max_iterations
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Viewport::with_size(8, 6).unwrap(), DEFAULT_ITERATIONS, 2).unwrap()
    }

    #[test]
    fn actions_parse_from_keys() {
        assert_eq!("+".parse::<Action>(), Ok(Action::ZoomIn));
        assert_eq!("=".parse::<Action>(), Ok(Action::ZoomIn));
        assert_eq!("-".parse::<Action>(), Ok(Action::ZoomOut));
        assert_eq!(" Up\n".parse::<Action>(), Ok(Action::Up));
        assert_eq!("j".parse::<Action>(), Ok(Action::Down));
        assert_eq!("LEFT".parse::<Action>(), Ok(Action::Left));
        assert_eq!("right".parse::<Action>(), Ok(Action::Right));
        assert_eq!("Esc".parse::<Action>(), Ok(Action::Quit));
        assert_eq!("q".parse::<Action>(), Ok(Action::Quit));
        assert_eq!(
            "zoom".parse::<Action>(),
            Err(UnknownAction("zoom".to_string()))
        );
    }

    #[test]
    fn session_rejects_empty_budget() {
        assert_eq!(
            Session::new(Viewport::default(), 0, 1),
            Err(MandelError::InvalidIterationBudget(0))
        );
    }

    #[test]
    fn zoom_in_adds_iterations() {
        let mut s = session();
        assert_eq!(s.apply(Action::ZoomIn), Ok(Outcome::Redraw));
        assert_eq!(s.max_iterations(), 150);
        assert_eq!(s.viewport().scale(), 1.0);
    }

    #[test]
    fn zoom_out_stops_below_half_scale() {
        let mut s = session();
        assert_eq!(s.apply(Action::ZoomOut), Ok(Outcome::Redraw));
        assert_eq!(s.max_iterations(), 50);
        assert_eq!(s.viewport().scale(), 0.25);
        let before = s;
        assert_eq!(s.apply(Action::ZoomOut), Ok(Outcome::Ignored));
        assert_eq!(s, before);
    }

    #[test]
    fn zoom_out_never_empties_the_budget() {
        let mut s = Session::new(Viewport::default(), 10, 1).unwrap();
        s.apply(Action::ZoomOut).unwrap();
        assert_eq!(s.max_iterations(), 1);
    }

    #[test]
    fn pans_redraw_and_quit_quits() {
        let mut s = session();
        assert_eq!(s.apply(Action::Up), Ok(Outcome::Redraw));
        assert_eq!(s.viewport().top(), 1.5);
        assert_eq!(s.apply(Action::Right), Ok(Outcome::Redraw));
        assert_eq!(s.viewport().left(), -1.5);
        assert_eq!(s.apply(Action::Quit), Ok(Outcome::Quit));
    }

    #[test]
    fn status_reports_scale_and_budget() {
        let mut s = session();
        assert_eq!(s.status(), "Redrawing in scale 2:1 (iterations: 100)...");
        s.apply(Action::ZoomIn).unwrap();
        s.apply(Action::ZoomIn).unwrap();
        assert_eq!(s.status(), "Redrawing in scale 1:2 (iterations: 200)...");
    }

    #[test]
    fn draw_produces_a_full_frame() {
        let frame = session().draw().unwrap();
        assert_eq!((frame.width(), frame.height()), (8, 6));
        assert_eq!(frame.pixels().len(), 48);
    }
}
