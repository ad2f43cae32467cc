// ─────────────────────────────────────────────────────────────────────
// SCPN Ellint — Complete Elliptic Integrals
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Complete elliptic integrals K(m) and E(m).
//!
//! Parameter convention matches scipy: m = k^2, 0 <= m <= 1.
//! Out-of-domain input (m < 0, m > 1, NaN) yields NaN rather than an error;
//! use [`try_ellipk`] / [`try_ellipe`] when a typed error is wanted.

use crate::segment::{e_near_one, k_near_one, select, E_SEGMENTS, K_SEGMENTS};
use ellint_types::constants::{E_AT_ONE, KE_AT_ZERO};
use ellint_types::error::{EllintError, EllintResult};

#[inline]
fn in_domain(m: f64) -> bool {
    !m.is_nan() && (0.0..=1.0).contains(&m)
}

/// Complete elliptic integral of the first kind K(m).
///
/// K(m) = ∫₀^{π/2} dθ / √(1 - m sin²θ)
///
/// Returns π/2 at m = 0, +Infinity at m = 1 and NaN outside [0, 1].
/// Matches `scipy.special.ellipk(m)` to within a few ulp.
#[doc(alias = "complete_first_kind")]
pub fn ellipk(m: f64) -> f64 {
    if !in_domain(m) {
        return f64::NAN;
    }
    if m == 0.0 {
        return KE_AT_ZERO;
    }

    let mc = 1.0 - m;
    match select(&K_SEGMENTS, mc) {
        Some(segment) => segment.eval(mc),
        None if mc > 0.0 => k_near_one(mc),
        None => f64::INFINITY,
    }
}

/// Complete elliptic integral of the second kind E(m).
///
/// E(m) = ∫₀^{π/2} √(1 - m sin²θ) dθ
///
/// Returns π/2 at m = 0, exactly 1 at m = 1 and NaN outside [0, 1].
/// Matches `scipy.special.ellipe(m)` to within a few ulp.
#[doc(alias = "complete_second_kind")]
pub fn ellipe(m: f64) -> f64 {
    if !in_domain(m) {
        return f64::NAN;
    }
    if m == 0.0 {
        return KE_AT_ZERO;
    }

    let mc = 1.0 - m;
    match select(&E_SEGMENTS, mc) {
        Some(segment) => segment.eval(mc),
        None if mc > 0.0 => e_near_one(mc),
        None => E_AT_ONE,
    }
}

/// `(K(m), E(m))`.
#[inline]
pub fn ellipke(m: f64) -> (f64, f64) {
    (ellipk(m), ellipe(m))
}

/// [`ellipk`] with out-of-domain input reported as [`EllintError::Domain`].
pub fn try_ellipk(m: f64) -> EllintResult<f64> {
    if !in_domain(m) {
        log::debug!("ellipk: rejecting m = {m}");
        return Err(EllintError::Domain { m });
    }
    Ok(ellipk(m))
}

/// [`ellipe`] with out-of-domain input reported as [`EllintError::Domain`].
pub fn try_ellipe(m: f64) -> EllintResult<f64> {
    if !in_domain(m) {
        log::debug!("ellipe: rejecting m = {m}");
        return Err(EllintError::Domain { m });
    }
    Ok(ellipe(m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{E_SINGULAR_BOUND, K_SINGULAR_BOUND};
    use std::f64::consts::FRAC_PI_2;

    // Reference values from scipy.special
    #[test]
    fn test_ellipk_at_zero() {
        assert_eq!(ellipk(0.0), FRAC_PI_2, "K(0) = pi/2");
        assert_eq!(ellipk(-0.0), FRAC_PI_2);
    }

    #[test]
    fn test_ellipk_reference_values() {
        let cases: &[(f64, f64)] = &[
            (0.1, 1.6124413487202192),
            (0.2, 1.659623598610528),
            (0.3, 1.713889448178791),
            (0.4, 1.7775193714912534),
            (0.5, 1.8540746773013719),
            (0.6, 1.9495677498060258),
            (0.7, 2.075363135292469),
            (0.8, 2.257205326820854),
            (0.9, 2.5780921133481733),
            (0.95, 2.9083372484445515),
            (0.99, 3.6956373629898747),
            (0.999, 4.841132560550296),
        ];
        for &(m, expected) in cases {
            let got = ellipk(m);
            let err = ((got - expected) / expected).abs();
            assert!(
                err <= 4.0 * f64::EPSILON,
                "K({m}) = {got}, expected {expected}, rel error = {err}"
            );
        }
    }

    #[test]
    fn test_ellipe_at_zero() {
        assert_eq!(ellipe(0.0), FRAC_PI_2, "E(0) = pi/2");
    }

    #[test]
    fn test_ellipe_reference_values() {
        let cases: &[(f64, f64)] = &[
            (0.1, 1.5307576368977633),
            (0.2, 1.489035058095853),
            (0.3, 1.4453630644126654),
            (0.4, 1.3993921388974322),
            (0.5, 1.3506438810476755),
            (0.6, 1.2984280350469133),
            (0.7, 1.2416705679458229),
            (0.8, 1.1784899243278386),
            (0.9, 1.1047747327040733),
            (0.95, 1.0604737277662784),
            (0.99, 1.015993545025224),
            (0.999, 1.0021707908344453),
        ];
        for &(m, expected) in cases {
            let got = ellipe(m);
            let err = ((got - expected) / expected).abs();
            assert!(
                err <= 4.0 * f64::EPSILON,
                "E({m}) = {got}, expected {expected}, rel error = {err}"
            );
        }
    }

    #[test]
    fn test_values_at_one() {
        assert_eq!(ellipk(1.0), f64::INFINITY);
        assert_eq!(ellipe(1.0), 1.0);
    }

    #[test]
    fn test_out_of_domain_is_nan() {
        let bad = [
            -1e-300,
            -1.0,
            1.0 + f64::EPSILON,
            2.0,
            f64::NAN,
            f64::INFINITY,
            f64::NEG_INFINITY,
        ];
        for m in bad {
            assert!(ellipk(m).is_nan(), "K({m}) should be NaN");
            assert!(ellipe(m).is_nan(), "E({m}) should be NaN");
        }
    }

    #[test]
    fn test_singular_branch_matches_log_asymptote() {
        let m = 1.0 - 1e-12;
        let mc = 1.0 - m;
        let k = ellipk(m);
        let asymptote = ellint_types::constants::LN_4 - 0.5 * mc.ln();
        assert!(k.is_finite());
        assert!(((k - asymptote) / k).abs() < 1e-10, "K = {k}, asymptote = {asymptote}");
        assert!((k - 15.201815980070121).abs() < 1e-13, "K = {k}");
    }

    #[test]
    fn test_branch_edges_are_continuous() {
        let cases: [(f64, fn(f64) -> f64); 2] =
            [(K_SINGULAR_BOUND, ellipk), (E_SINGULAR_BOUND, ellipe)];
        for (bound, f) in cases {
            let above = f(1.0 - bound * (1.0 + 1e-10));
            let below = f(1.0 - bound * (1.0 - 1e-10));
            assert!(((above - below) / below).abs() < 1e-9, "{above} vs {below}");
        }
    }

    #[test]
    fn test_ellipke_pair() {
        let (k, e) = ellipke(0.5);
        assert_eq!(k, ellipk(0.5));
        assert_eq!(e, ellipe(0.5));
    }

    #[test]
    fn test_try_variants() {
        assert_eq!(try_ellipk(0.5).unwrap(), ellipk(0.5));
        assert_eq!(try_ellipe(1.0).unwrap(), 1.0);
        assert_eq!(try_ellipk(1.0).unwrap(), f64::INFINITY);

        let err = try_ellipk(1.5).unwrap_err();
        assert!(matches!(err, EllintError::Domain { m } if m == 1.5));
        assert!(err.to_string().contains("1.5"), "{err}");
        assert!(matches!(try_ellipe(f64::NAN), Err(EllintError::Domain { .. })));
        assert!(matches!(try_ellipe(-0.25), Err(EllintError::Domain { .. })));
    }
}
