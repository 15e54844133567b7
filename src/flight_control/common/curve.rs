use itertools::Itertools;
use nalgebra::Vector3;

/// Centripetal Catmull-Rom spline through a list of control points.
///
/// The curve passes through every control point and is C¹-continuous. Points
/// can be sampled either by the raw spline parameter (`point`) or by
/// normalized arc length (`point_at`), the latter giving even spacing along
/// the path.
#[derive(Debug, Clone, PartialEq)]
pub struct CatmullRomCurve {
    points: Vec<Vector3<f64>>,
    /// Cumulative arc length at `divisions + 1` evenly spaced parameters.
    arc_lengths: Vec<f64>,
}

/// Cubic coefficients of one segment, evaluated as `c0 + c1 t + c2 t² + c3 t³`.
struct CubicPoly {
    c0: Vector3<f64>,
    c1: Vector3<f64>,
    c2: Vector3<f64>,
    c3: Vector3<f64>,
}

impl CubicPoly {
    fn hermite(x0: Vector3<f64>, x1: Vector3<f64>, t0: Vector3<f64>, t1: Vector3<f64>) -> Self {
        Self {
            c0: x0,
            c1: t0,
            c2: -3.0 * x0 + 3.0 * x1 - 2.0 * t0 - t1,
            c3: 2.0 * x0 - 2.0 * x1 + t0 + t1,
        }
    }

    /// Non-uniform Catmull-Rom segment between `x1` and `x2`.
    #[allow(clippy::many_single_char_names)]
    fn non_uniform(
        [x0, x1, x2, x3]: [Vector3<f64>; 4],
        dt0: f64,
        dt1: f64,
        dt2: f64,
    ) -> Self {
        let t1 = ((x1 - x0) / dt0 - (x2 - x0) / (dt0 + dt1) + (x2 - x1) / dt1) * dt1;
        let t2 = ((x2 - x1) / dt1 - (x3 - x1) / (dt1 + dt2) + (x3 - x2) / dt2) * dt1;
        Self::hermite(x1, x2, t1, t2)
    }

    fn eval(&self, t: f64) -> Vector3<f64> {
        let t2 = t * t;
        self.c0 + self.c1 * t + self.c2 * t2 + self.c3 * (t2 * t)
    }
}

impl CatmullRomCurve {
    const MIN_KNOT_SPACING: f64 = 1e-4;

    /// Builds the curve and its arc-length table. A single point yields a
    /// constant curve.
    pub fn new(points: Vec<Vector3<f64>>, divisions: usize) -> Self {
        let mut curve = Self { points, arc_lengths: Vec::new() };
        curve.arc_lengths = curve.compute_arc_lengths(divisions.max(1));
        curve
    }

    pub fn points(&self) -> &[Vector3<f64>] { &self.points }

    /// Total length of the curve.
    pub fn length(&self) -> f64 { self.arc_lengths.last().copied().unwrap_or(0.0) }

    /// Point at spline parameter `t ∈ [0, 1]`.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn point(&self, t: f64) -> Vector3<f64> {
        let n = self.points.len();
        match n {
            0 => return Vector3::zeros(),
            1 => return self.points[0],
            _ => {}
        }
        if t <= 0.0 {
            return self.points[0];
        }
        if t >= 1.0 {
            return self.points[n - 1];
        }
        let p = (n - 1) as f64 * t;
        let mut seg = p.floor() as usize;
        let mut weight = p - seg as f64;
        if seg >= n - 1 {
            seg = n - 2;
            weight = 1.0;
        }

        let x0 = if seg > 0 { self.points[seg - 1] } else { 2.0 * self.points[0] - self.points[1] };
        let x1 = self.points[seg];
        let x2 = self.points[seg + 1];
        let x3 = if seg + 2 < n {
            self.points[seg + 2]
        } else {
            2.0 * self.points[n - 1] - self.points[n - 2]
        };

        // centripetal knot spacing
        let mut dt0 = (x1 - x0).norm_squared().powf(0.25);
        let mut dt1 = (x2 - x1).norm_squared().powf(0.25);
        let mut dt2 = (x3 - x2).norm_squared().powf(0.25);
        if dt1 < Self::MIN_KNOT_SPACING {
            dt1 = 1.0;
        }
        if dt0 < Self::MIN_KNOT_SPACING {
            dt0 = dt1;
        }
        if dt2 < Self::MIN_KNOT_SPACING {
            dt2 = dt1;
        }
        CubicPoly::non_uniform([x0, x1, x2, x3], dt0, dt1, dt2).eval(weight)
    }

    /// Point at normalized arc length `u ∈ [0, 1]`.
    ///
    /// `point_at(0)` is the first and `point_at(1)` the last control point.
    pub fn point_at(&self, u: f64) -> Vector3<f64> { self.point(self.u_to_t(u)) }

    /// `count + 1` points evenly spaced along the curve, endpoints included.
    #[allow(clippy::cast_precision_loss)]
    pub fn spaced_points(&self, count: usize) -> Vec<Vector3<f64>> {
        let count = count.max(1);
        (0..=count).map(|i| self.point_at(i as f64 / count as f64)).collect()
    }

    /// Maps normalized arc length to the spline parameter.
    #[allow(clippy::cast_precision_loss)]
    fn u_to_t(&self, u: f64) -> f64 {
        let u = u.clamp(0.0, 1.0);
        let total = self.length();
        let last = self.arc_lengths.len().saturating_sub(1);
        if last == 0 || total <= f64::EPSILON {
            return u;
        }
        let target = u * total;
        // index of the last sample not beyond the target length
        let i = self.arc_lengths.partition_point(|&l| l <= target).saturating_sub(1);
        if i >= last {
            return 1.0;
        }
        let before = self.arc_lengths[i];
        let after = self.arc_lengths[i + 1];
        let fraction = if after > before { (target - before) / (after - before) } else { 0.0 };
        (i as f64 + fraction) / last as f64
    }

    #[allow(clippy::cast_precision_loss)]
    fn compute_arc_lengths(&self, divisions: usize) -> Vec<f64> {
        let samples = (0..=divisions).map(|i| self.point(i as f64 / divisions as f64));
        std::iter::once(0.0)
            .chain(samples.tuple_windows().scan(0.0, |acc, (a, b)| {
                *acc += (b - a).norm();
                Some(*acc)
            }))
            .collect()
    }
}
