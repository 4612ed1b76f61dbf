//! Evaluation and sampling of Bézier curves of arbitrary degree.
//!
//! A curve is defined by an ordered list of control points, its degree is
//! `control_points.len() - 1`. Points on the curve are computed directly from
//! the Bernstein basis
//!
//! ```text
//! ∀ t ∈ [0..1],  B(t) = Σ C(n, i) * (1 - t)^(n - i) * t^i * P[i]
//! ```
//!
//! and a curve can be sampled at `steps + 1` uniformly spaced parameters to get
//! a polyline that any 2D drawing API can stroke.
//!
//! ```rust
//! use bernstein::{Bezier, Point2};
//!
//! let curve = Bezier::new(&[
//!     Point2::new(50.0, 300.0),
//!     Point2::new(150.0, 50.0),
//!     Point2::new(250.0, 350.0),
//!     Point2::new(350.0, 150.0),
//! ])
//! .unwrap();
//!
//! let polyline = curve.polyline();
//! assert_eq!(polyline.len(), 101);
//! assert_eq!(polyline[0], Point2::new(50.0, 300.0));
//! ```
#![no_std]

extern crate alloc;

pub mod bezier;
pub mod binomial;
pub mod error;
pub mod point;
pub mod point2;
pub mod sampler;

pub use bezier::Bezier;
pub use binomial::checked_binomial;
pub use error::CurveError;
pub use point::Point;
pub use point2::Point2;
pub use sampler::{Samples, DEFAULT_STEPS};

#[cfg(not(feature = "f32"))]
pub type NativeFloat = f64;
#[cfg(feature = "f32")]
pub type NativeFloat = f32;

#[cfg(not(feature = "f32"))]
pub const EPSILON: NativeFloat = 1e-9;
#[cfg(feature = "f32")]
pub const EPSILON: NativeFloat = 1e-3;
