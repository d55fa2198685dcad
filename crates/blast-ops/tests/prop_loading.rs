// ─────────────────────────────────────────────────────────────────────
// Blast Ops Core — Property-Based Tests (proptest) for truck loading
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for the whole-bucket truck-loading loop.

use blast_ops::equipment::truck_trip_mass;
use proptest::prelude::*;

proptest! {
    /// The trip mass never exceeds the payload, and one more pass would.
    #[test]
    fn trip_mass_is_largest_whole_pass_fill(
        bucket in 5.0f64..60.0,
        density in 1.5f64..4.0,
        swell in 1.1f64..1.8,
        fill in 0.4f64..1.0,
        payload in 50.0f64..400.0,
    ) {
        let trip = truck_trip_mass(bucket, density, swell, fill, payload)
            .expect("positive inputs");
        let pass = bucket * density / swell * fill;

        prop_assert!(trip <= payload + 1e-9);
        prop_assert!(trip + pass > payload);

        // Whole passes only: the trip is an integer multiple of the pass.
        let passes = (trip / pass).round();
        prop_assert!(
            (trip - passes * pass).abs() < 1e-6,
            "Trip {} is not a whole multiple of pass {}", trip, pass
        );
    }

    /// Non-positive inputs are rejected before the loop runs.
    #[test]
    fn nonpositive_inputs_rejected(
        bucket in 5.0f64..60.0,
        density in 1.5f64..4.0,
    ) {
        prop_assert!(truck_trip_mass(bucket, density, 0.0, 0.8, 320.0).is_err());
        prop_assert!(truck_trip_mass(bucket, density, 1.4, -0.5, 320.0).is_err());
        prop_assert!(truck_trip_mass(-bucket, density, 1.4, 0.8, 320.0).is_err());
        prop_assert!(truck_trip_mass(bucket, density, 1.4, 0.8, 0.0).is_err());
    }
}
