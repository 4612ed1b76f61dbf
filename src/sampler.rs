//! Uniform sampling of Bezier curves into polylines.
//!
//! Available functions:
//! - `Bezier::samples()` lazy, restartable iterator
//! - `Bezier::sample()` / `Bezier::polyline()` eager
//! - `sample()` / `polyline()` straight from a slice of control points
use alloc::vec::Vec;
use core::iter::FusedIterator;

use log::trace;

use crate::bezier::Bezier;
use crate::error::CurveError;
use crate::point::Point;
use crate::NativeFloat;

/// Number of steps used when the caller does not choose one.
pub const DEFAULT_STEPS: usize = 100;

/// Iterator over `steps + 1` points of a curve, evaluated at the parameters
/// 0, 1/steps, 2/steps, ..., 1. Curves with less than two control points yield nothing.
/// Cloning the iterator restarts from the clone's position; nothing is shared.
#[derive(Clone, Debug)]
pub struct Samples<'a, P>
where
    P: Point,
{
    curve: &'a Bezier<P>,
    steps: usize,
    /// index of the next parameter, in 0..=steps
    next: usize,
    /// index one past the last parameter
    end: usize,
}

impl<'a, P> Samples<'a, P>
where
    P: Point,
{
    fn new(curve: &'a Bezier<P>, steps: usize) -> Self {
        let end = if curve.len() < 2 { 0 } else { steps.saturating_add(1) };
        Samples {
            curve,
            steps,
            next: 0,
            end,
        }
    }

    fn parameter(&self, index: usize) -> NativeFloat {
        // steps == 0 only ever produces index 0
        if index == 0 {
            0.0
        } else {
            index as NativeFloat / self.steps as NativeFloat
        }
    }
}

impl<'a, P> Iterator for Samples<'a, P>
where
    P: Point,
{
    type Item = P;

    fn next(&mut self) -> Option<P> {
        if self.next >= self.end {
            return None;
        }
        let t = self.parameter(self.next);
        self.next += 1;
        Some(self.curve.eval(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<'a, P> DoubleEndedIterator for Samples<'a, P>
where
    P: Point,
{
    fn next_back(&mut self) -> Option<P> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(self.curve.eval(self.parameter(self.end)))
    }
}

impl<'a, P> ExactSizeIterator for Samples<'a, P> where P: Point {}

impl<'a, P> FusedIterator for Samples<'a, P> where P: Point {}

impl<P> Bezier<P>
where
    P: Point,
{
    /// Lazily sample the curve at `steps + 1` uniformly spaced parameters in [0,1].
    /// `steps == 0` yields only the start point.
    pub fn samples(&self, steps: usize) -> Samples<'_, P> {
        trace!(
            "sampling curve of {} control points at {} steps",
            self.len(),
            steps
        );
        Samples::new(self, steps)
    }

    /// Sample the curve into a polyline of `steps + 1` points.
    pub fn sample(&self, steps: usize) -> Vec<P> {
        self.samples(steps).collect()
    }

    /// Sample the curve into a polyline using `DEFAULT_STEPS`.
    pub fn polyline(&self) -> Vec<P> {
        self.sample(DEFAULT_STEPS)
    }
}

/// Build the curve defined by `control_points` and sample it at `steps + 1` parameters.
/// Less than two control points give an empty polyline.
pub fn sample<P: Point>(control_points: &[P], steps: usize) -> Result<Vec<P>, CurveError> {
    Ok(Bezier::new(control_points)?.sample(steps))
}

/// Like `sample()` with `DEFAULT_STEPS`.
pub fn polyline<P: Point>(control_points: &[P]) -> Result<Vec<P>, CurveError> {
    sample(control_points, DEFAULT_STEPS)
}
