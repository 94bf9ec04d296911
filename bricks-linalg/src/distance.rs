use strum_macros::{Display, EnumIter, EnumString};

use crate::error;
use crate::shape::check_dim;

/// Euclidean (L2) distance.
///
/// `d(p, q) = sqrt((q1 - p1)^2 + (q2 - p2)^2 + ...)`
///
/// <https://en.wikipedia.org/wiki/Euclidean_distance>
pub fn euclidean(v: &[f64], u: &[f64]) -> error::Result<f64> {
    check_dim(v, u)?;
    let sum: f64 = v.iter().zip(u).map(|(a, b)| (a - b).powi(2)).sum();
    Ok(sum.sqrt())
}

/// Taxicab (L1) distance.
///
/// `d(p, q) = sum(|p_i - q_i|)`
///
/// <https://en.wikipedia.org/wiki/Taxicab_geometry>
pub fn l1(v: &[f64], u: &[f64]) -> error::Result<f64> {
    check_dim(v, u)?;
    Ok(v.iter().zip(u).map(|(a, b)| (a - b).abs()).sum())
}

/// Canberra distance.
///
/// `d(p, q) = sum(|p_i - q_i| / (|p_i| + |q_i|))`
///
/// A coordinate that is zero in both vectors contributes `0 / 0`, which
/// makes the whole distance NaN.
///
/// <https://en.wikipedia.org/wiki/Canberra_distance>
pub fn canberra(v: &[f64], u: &[f64]) -> error::Result<f64> {
    check_dim(v, u)?;
    Ok(v.iter()
        .zip(u)
        .map(|(a, b)| (a - b).abs() / (a.abs() + b.abs()))
        .sum())
}

/// Chebyshev (L-infinity) distance.
///
/// `d(p, q) = max(|p_i - q_i|)`, the limit of the Lp distance as p goes to
/// infinity. Empty vectors are at distance 0. A NaN coordinate difference
/// makes the whole distance NaN.
///
/// <https://en.wikipedia.org/wiki/Chebyshev_distance>
pub fn chebyshev(v: &[f64], u: &[f64]) -> error::Result<f64> {
    check_dim(v, u)?;
    Ok(v.iter()
        .zip(u)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, |max, d| {
            if max.is_nan() || d.is_nan() {
                f64::NAN
            } else {
                max.max(d)
            }
        }))
}

/// The available distance measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Metric {
    Euclidean,
    L1,
    Canberra,
    Chebyshev,
}

impl Metric {
    pub fn distance(&self, v: &[f64], u: &[f64]) -> error::Result<f64> {
        match self {
            Metric::Euclidean => euclidean(v, u),
            Metric::L1 => l1(v, u),
            Metric::Canberra => canberra(v, u),
            Metric::Chebyshev => chebyshev(v, u),
        }
    }
}
