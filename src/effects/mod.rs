//! Card effects and their resolution rules.
//!
//! - `CardEffect`: The closed effect set (attack, boost, mirror)
//! - `Element`: Fire / ice affinity for resistance checks
//! - `EffectResolver`: Pure play-acceptance and hit-resolution rules
//!
//! Nothing here mutates match state; the turn controller applies results.

mod effect;
mod resolver;

pub use effect::{CardEffect, Element};
pub use resolver::{EffectResolver, HitOutcome, PlayRejection};
