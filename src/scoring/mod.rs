//! Weighted scoring: [`SignalSet`](crate::analysis::SignalSet) + [`WeightTable`] → score, status, issues.

pub mod issues;
pub mod scorer;
pub mod types;
pub mod weights;

#[cfg(test)]
mod tests;

pub use issues::{Issue, UnknownIssue, suggestion_for};
pub use scorer::Scorer;
pub use types::{ScoreResult, ScoreStatus, SignalBreakdown};
pub use weights::{CHECKLIST, ChecklistEntry, InvalidWeight, WeightTable};
