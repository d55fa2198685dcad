// ─────────────────────────────────────────────────────────────────────
// Blast Ops Core — Blast Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical models of the blast: drillhole charge construction, panel-level
//! aggregation, and Kuz-Ram fragmentation prediction.

pub mod charge;
pub mod fragmentation;
pub mod panel;
