// ─────────────────────────────────────────────────────────────────────
// SCPN Ellint — Reference Tables
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reference values of K(m) and E(m) from a trusted implementation.
//!
//! Tables are plain JSON:
//!
//! ```json
//! { "source": "scipy.special", "points": [ { "m": 0.5, "k": 1.85, "e": 1.35 } ] }
//! ```
//!
//! `k` is `null` at m = 1, where K diverges.

use crate::error::{EllintError, EllintResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub m: f64,
    /// K(m); `None` encodes +Infinity.
    #[serde(default)]
    pub k: Option<f64>,
    pub e: f64,
}

impl ReferencePoint {
    /// K(m) with the `null` encoding expanded to +Infinity.
    pub fn k_value(&self) -> f64 {
        self.k.unwrap_or(f64::INFINITY)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceTable {
    pub source: String,
    pub points: Vec<ReferencePoint>,
}

impl ReferenceTable {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> EllintResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> EllintResult<Self> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Reject empty tables and points outside [0, 1].
    pub fn validate(&self) -> EllintResult<()> {
        if self.points.is_empty() {
            return Err(EllintError::Reference(format!(
                "table '{}' has no points",
                self.source
            )));
        }
        for (i, p) in self.points.iter().enumerate() {
            if p.m.is_nan() || !(0.0..=1.0).contains(&p.m) {
                return Err(EllintError::Reference(format!(
                    "point {i}: m = {} outside [0, 1]",
                    p.m
                )));
            }
            if !p.e.is_finite() {
                return Err(EllintError::Reference(format!(
                    "point {i}: E({}) must be finite, got {}",
                    p.m, p.e
                )));
            }
            if p.k.is_none() && p.m != 1.0 {
                return Err(EllintError::Reference(format!(
                    "point {i}: K may only be omitted at m = 1, got m = {}",
                    p.m
                )));
            }
        }
        Ok(())
    }
}
