// ─────────────────────────────────────────────────────────────────────
// SCPN Ellint — Array Evaluation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Element-wise K(m) and E(m) over ndarray containers.

use crate::complete::{ellipe, ellipk};
use ndarray::{Array, ArrayBase, Data, Dimension};

/// K(m) for every element; out-of-domain elements map to NaN.
pub fn ellipk_array<S, D>(m: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    m.mapv(ellipk)
}

/// E(m) for every element; out-of-domain elements map to NaN.
pub fn ellipe_array<S, D>(m: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    m.mapv(ellipe)
}
