// ─────────────────────────────────────────────────────────────────────
// SCPN Ellint — Ellint Math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Complete elliptic integrals for SCPN numeric code.
//!
//! [`ellipk`] and [`ellipe`] evaluate K(m) and E(m) on 0 <= m <= 1 to
//! double precision by piecewise minimax rational approximation in the
//! complementary parameter, with logarithmic closed forms near m = 1.

pub mod array;
pub mod complete;
pub mod segment;
pub mod validate;

pub use array::{ellipe_array, ellipk_array};
pub use complete::{ellipe, ellipk, ellipke, try_ellipe, try_ellipk};
