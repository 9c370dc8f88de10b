use serde::Serialize;

/// Gaussian kernel bandwidth used for peak-hour distributions.
pub const KDE_BANDWIDTH: f64 = 1.0;

/// Number of evaluation points per curve.
pub const KDE_POINTS: usize = 500;

const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// A sampled density curve.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KdeCurve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl KdeCurve {
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Gaussian kernel density estimate of `values`, evaluated at `points`
/// evenly spaced positions from the smallest to the largest value.
///
/// When every value is equal the grid is widened by three bandwidths on
/// each side so the curve still has a shape. Empty input gives an empty
/// curve.
pub fn gaussian_kde(values: &[f64], bandwidth: f64, points: usize) -> KdeCurve {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || points == 0 || bandwidth <= 0.0 {
        return KdeCurve::default();
    }

    let mut lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 3.0 * bandwidth;
        hi += 3.0 * bandwidth;
    }

    let n = finite.len() as f64;
    let step = if points > 1 { (hi - lo) / (points - 1) as f64 } else { 0.0 };
    let mut curve = KdeCurve {
        x: Vec::with_capacity(points),
        y: Vec::with_capacity(points),
    };
    for i in 0..points {
        let x = lo + step * i as f64;
        let density = finite
            .iter()
            .map(|&xi| {
                let u = (x - xi) / bandwidth;
                (-0.5 * u * u).exp()
            })
            .sum::<f64>()
            * INV_SQRT_2PI
            / (n * bandwidth);
        curve.x.push(x);
        curve.y.push(density);
    }
    curve
}
