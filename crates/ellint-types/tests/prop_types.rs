// ─────────────────────────────────────────────────────────────────────
// SCPN Ellint — Property-Based Tests (proptest) for ellint-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for ellint-types using proptest.
//!
//! Covers: reference-table validation over the domain boundary.

use ellint_types::error::EllintError;
use ellint_types::reference::{ReferencePoint, ReferenceTable};
use proptest::prelude::*;

fn single(m: f64) -> ReferenceTable {
    ReferenceTable {
        source: "prop".to_string(),
        points: vec![ReferencePoint {
            m,
            k: Some(2.0),
            e: 1.2,
        }],
    }
}

proptest! {
    /// Every parameter in [0, 1] is accepted.
    #[test]
    fn in_domain_points_accepted(m in 0.0f64..=1.0) {
        prop_assert!(single(m).validate().is_ok());
    }

    /// Parameters outside [0, 1] are rejected with a Reference error.
    #[test]
    fn out_of_domain_points_rejected(d in 1e-12f64..1e3, below in any::<bool>()) {
        let m = if below { -d } else { 1.0 + d };
        let result = single(m).validate();
        prop_assert!(matches!(result, Err(EllintError::Reference(_))));
    }

    /// The offending index is named in the error message.
    #[test]
    fn error_names_point_index(n in 1usize..20) {
        let mut table = single(0.5);
        let valid = table.points[0];
        for _ in 0..n {
            table.points.push(valid);
        }
        table.points[n].m = f64::NAN;
        let msg = table.validate().unwrap_err().to_string();
        let expected = format!("point {n}");
        prop_assert!(msg.contains(&expected), "{}", msg);
    }
}
