use log::debug;
use num_traits::Float;
use tinyvec::TinyVec;

use crate::binomial::checked_binomial;
use crate::error::CurveError;
use crate::point::Point;
use crate::NativeFloat;

/// Number of control points stored inline before spilling to the heap.
const INLINE_POINTS: usize = 8;

/// General implementation of a Bezier curve of arbitrary degree (= number of control points - 1).
/// The curve is solely defined by its 'control_points', the binomial coefficients of
/// its Bernstein basis are computed once on construction.
/// Points on the curve can be evaluated with an interpolation parameter 't' in interval [0,1]
/// using eval(), or sampled uniformly with samples() and sample().
#[derive(Clone, Debug, PartialEq)]
pub struct Bezier<P>
where
    P: Point,
{
    /// Control points which define the curve and hence its degree
    control_points: TinyVec<[P; INLINE_POINTS]>,
    /// C(degree, i) for every control point i
    coefficients: TinyVec<[NativeFloat; INLINE_POINTS]>,
}

impl<P> Bezier<P>
where
    P: Point,
{
    /// Create a new Bezier curve from the `control_points`. The degree is defined as
    /// degree = control_points.len() - 1.
    /// Any number of points is accepted; curves with less than two control points
    /// sample to an empty polyline.
    /// Fails if the binomial coefficients of the degree overflow a `u64`, which first
    /// happens at degree 68.
    pub fn new(control_points: &[P]) -> Result<Bezier<P>, CurveError> {
        let degree = control_points.len().saturating_sub(1);
        let coefficients = (0..control_points.len())
            .map(|i| checked_binomial(degree as i64, i as i64).map(|c| c as NativeFloat))
            .collect::<Option<TinyVec<[NativeFloat; INLINE_POINTS]>>>()
            .ok_or_else(|| {
                debug!("rejecting curve of degree {}: binomial coefficient overflow", degree);
                CurveError::DegreeTooLarge { degree }
            })?;

        Ok(Bezier {
            control_points: control_points.iter().copied().collect(),
            coefficients,
        })
    }

    pub fn control_points(&self) -> &[P] {
        &self.control_points
    }

    /// Returns the degree of the curve or None if it has no control points.
    pub fn degree(&self) -> Option<usize> {
        self.control_points.len().checked_sub(1)
    }

    pub fn len(&self) -> usize {
        self.control_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.control_points.is_empty()
    }

    /// Evaluate a point on the curve at point 't' which should be in the interval [0,1].
    /// This sums the control points weighted by the Bernstein basis polynomials
    /// C(n, i) * (1 - t)^(n - i) * t^i. The curve passes exactly through the first control
    /// point at t = 0 and the last one at t = 1.
    /// A curve without control points evaluates to the origin (the empty sum).
    pub fn eval(&self, t: NativeFloat) -> P {
        let n = match self.degree() {
            Some(n) => n,
            None => return P::default(),
        };
        let s = 1.0 - t;
        let mut point = P::default();
        for (i, (ctrl, coefficient)) in self
            .control_points
            .iter()
            .zip(self.coefficients.iter())
            .enumerate()
        {
            // powf(0, 0) == 1, so the endpoints survive t = 0 and t = 1
            let weight = *coefficient
                * Float::powf(s, (n - i) as NativeFloat)
                * Float::powf(t, i as NativeFloat);
            point = point + *ctrl * weight;
        }
        point
    }

    /// Iterates over the edges of the control polygon, i.e. the pairs of
    /// consecutive control points.
    pub fn control_polygon(&self) -> impl Iterator<Item = (P, P)> + '_ {
        self.control_points.windows(2).map(|edge| (edge[0], edge[1]))
    }

    /// Return the bounding box of the control points as an array of (min, max) tuples
    /// for the x and y axis. By the convex hull property it also bounds the curve.
    /// Returns None for curves without control points.
    pub fn bounding_box(&self) -> Option<[(NativeFloat, NativeFloat); 2]> {
        let (first, rest) = self.control_points.split_first()?;
        let mut bounds = [(first.x(), first.x()), (first.y(), first.y())];
        for ctrl in rest {
            for (dim, value) in [ctrl.x(), ctrl.y()].into_iter().enumerate() {
                bounds[dim].0 = Float::min(bounds[dim].0, value);
                bounds[dim].1 = Float::max(bounds[dim].1, value);
            }
        }
        Some(bounds)
    }

    /// Approximates the arc length of the curve by flattening it with `nsteps` straight line segments.
    /// Accuracy gain falls off with more steps, at ~32 segments the error is already in the decimal places
    pub fn arclen(&self, nsteps: usize) -> NativeFloat {
        let mut samples = self.samples(nsteps);
        let mut previous = match samples.next() {
            Some(p) => p,
            None => return 0.0,
        };
        let mut arclen = 0.0;
        for p in samples {
            arclen = arclen + p.distance(previous);
            previous = p;
        }
        arclen
    }
}

#[cfg(test)]
mod tests {
    use core::ops::{Add, Mul, Sub};

    use super::*;
    use crate::point2::Point2;
    use crate::EPSILON;

    fn close(a: NativeFloat, b: NativeFloat) -> bool {
        Float::abs(a - b) < EPSILON * 1000.0
    }

    fn cubic() -> [Point2<NativeFloat>; 4] {
        [
            Point2::new(50.0, 300.0),
            Point2::new(150.0, 50.0),
            Point2::new(250.0, 350.0),
            Point2::new(350.0, 150.0),
        ]
    }

    #[test]
    fn eval_endpoints() {
        let points = [
            Point2::new(0.0, 1.77),
            Point2::new(1.1, -1.0),
            Point2::new(4.3, 3.0),
            Point2::new(3.2, -4.0),
            Point2::new(7.3, 2.7),
            Point2::new(8.9, 1.7),
        ];
        let curve = Bezier::new(&points).unwrap();

        assert_eq!(curve.eval(0.0), points[0]);
        assert_eq!(curve.eval(1.0), points[points.len() - 1]);
    }

    #[test]
    fn eval_cubic_midpoint() {
        let curve = Bezier::new(&cubic()).unwrap();
        // 1/8 * P0 + 3/8 * P1 + 3/8 * P2 + 1/8 * P3
        let mid = curve.eval(0.5);
        assert!(close(mid.x(), 200.0));
        assert!(close(mid.y(), 206.25));
    }

    #[test]
    fn equivalence_quadratic_closed_form() {
        let points = [
            Point2::new(0.0, 1.77),
            Point2::new(1.1, -1.0),
            Point2::new(3.2, -4.0),
        ];
        let curve = Bezier::new(&points).unwrap();

        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as NativeFloat / nsteps as NativeFloat;
            let s = 1.0 - t;
            let expected = points[0] * (s * s) + points[1] * (2.0 * s * t) + points[2] * (t * t);
            let err = curve.eval(t) - expected;
            assert!(close(err.x(), 0.0) && close(err.y(), 0.0));
        }
    }

    #[test]
    fn linear_interpolation() {
        let curve = Bezier::new(&[Point2::new(0.0, 0.0), Point2::new(10.0, -4.0)]).unwrap();
        let p = curve.eval(0.25);
        assert!(close(p.x(), 2.5));
        assert!(close(p.y(), -1.0));
    }

    #[test]
    fn convex_hull() {
        let points = [
            Point2::new(-3.0, 12.0),
            Point2::new(8.5, -7.25),
            Point2::new(2.0, 40.0),
            Point2::new(19.0, 3.0),
            Point2::new(-11.0, -2.0),
            Point2::new(5.0, 5.0),
            Point2::new(0.5, 33.0),
            Point2::new(14.0, -9.0),
            Point2::new(7.0, 1.0),
            Point2::new(-6.0, 21.0),
        ];
        let curve = Bezier::new(&points).unwrap();
        let [(xmin, xmax), (ymin, ymax)] = curve.bounding_box().unwrap();
        assert_eq!((xmin, xmax), (-11.0, 19.0));
        assert_eq!((ymin, ymax), (-9.0, 40.0));

        let nsteps: usize = 500;
        for t in 0..=nsteps {
            let p = curve.eval(t as NativeFloat / nsteps as NativeFloat);
            assert!(p.x() >= xmin - EPSILON && p.x() <= xmax + EPSILON);
            assert!(p.y() >= ymin - EPSILON && p.y() <= ymax + EPSILON);
        }
    }

    #[test]
    fn degenerate_curves() {
        let empty: Bezier<Point2<NativeFloat>> = Bezier::new(&[]).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.degree(), None);
        assert_eq!(empty.eval(0.3), Point2::new(0.0, 0.0));
        assert_eq!(empty.bounding_box(), None);

        let single = Bezier::new(&[Point2::new(4.0, -2.0)]).unwrap();
        assert_eq!(single.degree(), Some(0));
        for t in [0.0, 0.5, 1.0] {
            assert_eq!(single.eval(t), Point2::new(4.0, -2.0));
        }
    }

    #[test]
    fn degree_too_large() {
        let points = [Point2::new(1.0, 1.0); 69];
        assert_eq!(
            Bezier::new(&points),
            Err(CurveError::DegreeTooLarge { degree: 68 })
        );

        // the largest representable degree still passes through its endpoints
        let mut points = [Point2::new(1.0, 1.0); 68];
        points[0] = Point2::new(0.0, 0.0);
        points[67] = Point2::new(2.0, 3.0);
        let curve = Bezier::new(&points).unwrap();
        assert_eq!(curve.degree(), Some(67));
        assert_eq!(curve.eval(0.0), Point2::new(0.0, 0.0));
        assert_eq!(curve.eval(1.0), Point2::new(2.0, 3.0));
    }

    #[test]
    fn control_polygon() {
        let curve = Bezier::new(&cubic()).unwrap();
        let mut edges = curve.control_polygon();
        assert_eq!(edges.next(), Some((cubic()[0], cubic()[1])));
        assert_eq!(edges.next(), Some((cubic()[1], cubic()[2])));
        assert_eq!(edges.next(), Some((cubic()[2], cubic()[3])));
        assert_eq!(edges.next(), None);
    }

    #[test]
    fn arclen_of_line() {
        let curve = Bezier::new(&[
            Point2::new(0.0, 0.0),
            Point2::new(1.5, 2.0),
            Point2::new(3.0, 4.0),
        ])
        .unwrap();
        assert!(close(curve.arclen(64), 5.0));
        // the polyline never exceeds the control polygon
        let polygon: NativeFloat = Bezier::new(&cubic())
            .unwrap()
            .control_polygon()
            .map(|(a, b)| a.distance(b))
            .sum();
        assert!(Bezier::new(&cubic()).unwrap().arclen(128) <= polygon);
    }

    /// Stand-in for a point type from another library
    #[derive(Debug, Copy, Clone, Default, PartialEq)]
    struct Vec2([NativeFloat; 2]);

    impl Add for Vec2 {
        type Output = Self;
        fn add(self, rhs: Self) -> Self {
            Vec2([self.0[0] + rhs.0[0], self.0[1] + rhs.0[1]])
        }
    }

    impl Sub for Vec2 {
        type Output = Self;
        fn sub(self, rhs: Self) -> Self {
            Vec2([self.0[0] - rhs.0[0], self.0[1] - rhs.0[1]])
        }
    }

    impl Mul<NativeFloat> for Vec2 {
        type Output = Self;
        fn mul(self, rhs: NativeFloat) -> Self {
            Vec2([self.0[0] * rhs, self.0[1] * rhs])
        }
    }

    impl Point for Vec2 {
        fn x(&self) -> NativeFloat {
            self.0[0]
        }
        fn y(&self) -> NativeFloat {
            self.0[1]
        }
    }

    #[test]
    fn custom_point_type() {
        let own = Bezier::new(&[Vec2([50.0, 300.0]), Vec2([150.0, 50.0]), Vec2([250.0, 350.0])]).unwrap();
        let bundled = Bezier::new(&cubic()[..3]).unwrap();
        for t in [0.0, 0.2, 0.5, 0.9, 1.0] {
            let a = own.eval(t);
            let b = bundled.eval(t);
            assert!(close(a.x(), b.x()) && close(a.y(), b.y()));
        }
    }
}
