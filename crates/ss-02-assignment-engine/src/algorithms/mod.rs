//! Algorithms module for the Assignment Engine
//!
//! Contains:
//! - the per-giver draw loop with its rejection budget
//! - a single full attempt over every giver

pub mod attempt;
pub mod draw;

pub use attempt::{run_attempt, AttemptOutcome};
pub use draw::{draw_for_giver, rejection_budget, GiverOutcome, REJECTION_SLACK};
