//! Special-card effects.
//!
//! - `Effect`: what a played card does, derived from its active face
//! - `EffectResolver`: applies an effect to the live table
//!
//! Effects resolve exactly once per played card and never chain into
//! further effects.

mod effect;
mod resolver;

pub use effect::Effect;
pub(crate) use resolver::{EffectResolver, ResolveResult};
