// ─────────────────────────────────────────────────────────────────────
// SCPN Ellint — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// K(0) = E(0) = π/2.
pub const KE_AT_ZERO: f64 = std::f64::consts::FRAC_PI_2;

/// E(1) = 1 exactly.
pub const E_AT_ONE: f64 = 1.0;

/// ln 4, the constant term of K(m) ~ ln 4 - ½ ln(1 - m) as m → 1.
pub const LN_4: f64 = 1.386_294_361_119_890_6;

/// 1/16: the singular branches evaluate ln(mc/16) as ln(mc * 0.0625).
pub const ONE_SIXTEENTH: f64 = 0.0625;
