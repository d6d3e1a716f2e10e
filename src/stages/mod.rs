//! Stage catalog and progression engine.
//!
//! Stages cycle endlessly: five regular monsters then a boss, with monster
//! health scaled up on every complete pass through the catalog.

mod data;
mod progression;

#[allow(unused_imports)]
pub use data::*;
#[allow(unused_imports)]
pub use progression::{scaled_max_hp, MonsterView, StageProgression};
