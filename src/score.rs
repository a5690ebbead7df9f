// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessibility health score.
//!
//! `100 - (10*critical + 5*serious + 3*moderate + 1*minor)`, clamped to
//! `[0, 100]`. The deduction is not normalized by violation count.

const CRITICAL_WEIGHT: u64 = 10;
const SERIOUS_WEIGHT: u64 = 5;
const MODERATE_WEIGHT: u64 = 3;
const MINOR_WEIGHT: u64 = 1;

const MAX_SCORE: u64 = 100;

/// Reduce four severity counts to a score in `[0, 100]`
pub fn calculate_score(critical: usize, serious: usize, moderate: usize, minor: usize) -> u8 {
    let deduction = [
        (critical, CRITICAL_WEIGHT),
        (serious, SERIOUS_WEIGHT),
        (moderate, MODERATE_WEIGHT),
        (minor, MINOR_WEIGHT),
    ]
    .iter()
    .fold(0u64, |acc, &(count, weight)| {
        acc.saturating_add((count as u64).saturating_mul(weight))
    });

    // Never exceeds 100, so the cast is lossless
    MAX_SCORE.saturating_sub(deduction) as u8
}
