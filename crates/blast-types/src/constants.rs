// ─────────────────────────────────────────────────────────────────────
// Blast Ops Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Catch-bench setback from the panel crest (m). The first drillhole row
/// is laid out this far inside the panel width.
pub const EDGE_SETBACK_M: f64 = 3.0;

/// Reference fragment size for the oversize figure (mm). Fragments larger
/// than this are counted as oversize requiring secondary breakage.
pub const OVERSIZE_REF_SIZE_MM: f64 = 1000.0;

/// Rosin-Rammler median constant: `-ln(0.5)` rounded as used by the
/// Kuz-Ram literature. Relates X50 to the characteristic size `x_c`.
pub const ROSIN_RAMMLER_MEDIAN: f64 = 0.693;

/// ANFO-referenced weight strength anchor in Cunningham's X50 law.
pub const CUNNINGHAM_REF_RWS: f64 = 115.0;

/// Seconds per hour.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Minutes per hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// EUR per kEUR cost-report unit.
pub const EUR_PER_KEUR: f64 = 1000.0;
