//! Adaptive quadrature for the clothoid position integrals.
//!
//! The spiral displacement integrands `cos(c0 + gamma*t^2/(2*A^2))` and
//! `sin(...)` have no closed form, so they are integrated numerically with
//! adaptive Simpson refinement until the local error estimate is below
//! tolerance. Failure to converge within the depth bound is fatal for the
//! whole path, there is no retry.

use crate::error::{Error, Result};

/// Relative tolerance, good enough for plotting and serialization precision.
pub const REL_TOL: f64 = 1e-6;

/// Interval halving bound; 2^-40 of the original interval is far below any
/// feature size of the integrands used here.
pub const MAX_DEPTH: u32 = 40;

fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

fn refine<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
    eps: f64,
    depth: u32,
) -> Result<f64> {
    let m = 0.5 * (a + b);
    let lm = 0.5 * (a + m);
    let rm = 0.5 * (m + b);
    let flm = f(lm);
    let frm = f(rm);

    let left = simpson(a, m, fa, flm, fm);
    let right = simpson(m, b, fm, frm, fb);
    let delta = left + right - whole;

    // standard Richardson error estimate for Simpson halving
    if delta.abs() <= 15.0 * eps {
        return Ok(left + right + delta / 15.0);
    }
    if depth == 0 {
        return Err(Error::Integration { from: a, to: b });
    }

    let half_eps = 0.5 * eps;
    let l = refine(f, a, m, fa, flm, fm, left, half_eps, depth - 1)?;
    let r = refine(f, m, b, fm, frm, fb, right, half_eps, depth - 1)?;
    Ok(l + r)
}

/// Integrate `f` over `[0, upper]` with explicit tolerance and depth bound.
pub fn integrate_with<F: Fn(f64) -> f64>(
    f: &F,
    upper: f64,
    rel_tol: f64,
    max_depth: u32,
) -> Result<f64> {
    if upper == 0.0 {
        return Ok(0.0);
    }

    let a = 0.0;
    let b = upper;
    let m = 0.5 * (a + b);
    let fa = f(a);
    let fm = f(m);
    let fb = f(b);
    let whole = simpson(a, b, fa, fm, fb);

    // relative scaling with an absolute floor so near-zero integrals
    // (cancelling oscillations) still terminate
    let eps = rel_tol * whole.abs().max(1.0);
    refine(f, a, b, fa, fm, fb, whole, eps, max_depth)
}

/// Integrate `f` over `[0, upper]` at the default tolerance.
pub fn integrate<F: Fn(f64) -> f64>(f: &F, upper: f64) -> Result<f64> {
    integrate_with(f, upper, REL_TOL, MAX_DEPTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_interval() {
        let v = integrate(&|t: f64| t.cos(), 0.0).unwrap();
        assert_eq!(v, 0.0);
    }

    #[test]
    fn cosine_matches_sine() {
        for s in [0.1, 1.0, 5.0, 31.4] {
            let v = integrate(&|t: f64| t.cos(), s).unwrap();
            assert!(
                (v - s.sin()).abs() < 1e-6,
                "integral over [0, {s}] was {v}, expected {}",
                s.sin()
            );
        }
    }

    #[test]
    fn shifted_cosine_closed_form() {
        // the arc limit of the spiral integrand: cos(c0 + b*t)
        let c0 = 0.3;
        let b = 0.05;
        let s = 20.0;
        let v = integrate(&|t: f64| (c0 + b * t).cos(), s).unwrap();
        let expected = ((c0 + b * s).sin() - c0.sin()) / b;
        assert!((v - expected).abs() < 1e-6);
    }

    #[test]
    fn cubic_is_exact() {
        // Simpson is exact for cubics, no refinement needed
        let v = integrate(&|t: f64| t * t * t, 2.0).unwrap();
        assert!((v - 4.0).abs() < 1e-12);
    }

    #[test]
    fn depth_exhaustion_is_an_error() {
        // heavily oscillatory integrand with a depth bound too small to
        // resolve it
        let res = integrate_with(&|t: f64| (1.0e6 * t * t).sin(), 10.0, 1e-9, 3);
        assert!(matches!(res, Err(Error::Integration { .. })));
    }

    #[test]
    fn clothoid_integrand_converges() {
        // gamma = 1, A^2 = l/|endC| for the demo spiral (5, 0, 0.1)
        let a2: f64 = 5.0 / 0.1;
        let dx = integrate(&|t: f64| (t * t / (2.0 * a2)).cos(), 5.0).unwrap();
        let dy = integrate(&|t: f64| (t * t / (2.0 * a2)).sin(), 5.0).unwrap();
        // displacement cannot exceed the arc-length
        assert!(dx > 0.0 && dx < 5.0 + 1e-9);
        assert!(dy > 0.0 && dy < 5.0);
        assert!((dx * dx + dy * dy).sqrt() <= 5.0 + 1e-9);
    }
}
