//! Scoring ledger rules.
//!
//! A single batched clear of N rows awards the table value for N. There are
//! no level multipliers, combos or drop bonuses in this ruleset.

use crate::types::LINE_SCORES;

/// Points awarded for clearing `lines` rows simultaneously.
///
/// Counts outside the table (0, or more than 4) award nothing.
pub fn line_clear_points(lines: usize) -> u32 {
    if lines == 0 {
        return 0;
    }
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}
