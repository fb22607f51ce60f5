//! Enemy AI.
//!
//! Policies are trait-based so a smarter enemy can replace `RandomPolicy`
//! without touching the turn controller.

mod policy;

pub use policy::{EnemyDecision, EnemyPolicy, RandomPolicy};
