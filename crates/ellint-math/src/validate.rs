// ─────────────────────────────────────────────────────────────────────
// SCPN Ellint — Reference Validation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Compare the evaluators against a [`ReferenceTable`].

use crate::complete::{ellipe, ellipk};
use ellint_types::error::EllintResult;
use ellint_types::reference::ReferenceTable;

/// Worst-case relative errors over a reference table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationReport {
    pub points: usize,
    pub max_rel_err_k: f64,
    /// Parameter at which `max_rel_err_k` occurs.
    pub worst_m_k: f64,
    pub max_rel_err_e: f64,
    pub worst_m_e: f64,
}

impl ValidationReport {
    pub fn within(&self, tol: f64) -> bool {
        self.max_rel_err_k <= tol && self.max_rel_err_e <= tol
    }
}

/// |got - expected| / |expected|. A matching infinity is exact; a NaN or a
/// mismatched infinity is an infinite error.
fn relative_error(got: f64, expected: f64) -> f64 {
    if expected.is_infinite() || got.is_infinite() {
        return if got == expected { 0.0 } else { f64::INFINITY };
    }
    let err = ((got - expected) / expected).abs();
    if err.is_nan() {
        f64::INFINITY
    } else {
        err
    }
}

/// Evaluate K and E at every point of `table` and report the worst errors.
pub fn validate_against(table: &ReferenceTable) -> EllintResult<ValidationReport> {
    table.validate()?;

    let mut report = ValidationReport {
        points: table.points.len(),
        max_rel_err_k: 0.0,
        worst_m_k: table.points[0].m,
        max_rel_err_e: 0.0,
        worst_m_e: table.points[0].m,
    };

    for point in &table.points {
        let err_k = relative_error(ellipk(point.m), point.k_value());
        let err_e = relative_error(ellipe(point.m), point.e);
        if err_k.is_infinite() || err_e.is_infinite() {
            log::warn!(
                "reference '{}': m = {} disagrees (K err {err_k}, E err {err_e})",
                table.source,
                point.m
            );
        }
        if err_k > report.max_rel_err_k {
            report.max_rel_err_k = err_k;
            report.worst_m_k = point.m;
        }
        if err_e > report.max_rel_err_e {
            report.max_rel_err_e = err_e;
            report.worst_m_e = point.m;
        }
    }

    log::info!(
        "reference '{}': {} points, max rel err K = {:.3e} (m = {}), E = {:.3e} (m = {})",
        table.source,
        report.points,
        report.max_rel_err_k,
        report.worst_m_k,
        report.max_rel_err_e,
        report.worst_m_e
    );
    Ok(report)
}
