//! License policy: verdicts and the trial-panel decision.

pub mod check;
pub mod trial;
