//=========================================================================
// Aetheric Runtime: Library Root
//
// A small real-time game runtime: a fixed-cadence execution loop driving
// a keyed set of scenes, with frame-timeline animation and rigid-body
// integration as building blocks.
//
// Typical usage:
// ```no_run
// use aetheric_runtime::prelude::*;
//
// let mut game = GameBuilder::new()
//     .with_scene(MyScene::Title, TitleScene::default())
//     .with_initial_scene(MyScene::Title)
//     .build()?;
// game.start()?;
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds every runtime subsystem. Most applications only need the
// `Game` facade and the prelude.
//
pub mod core;
pub mod logging;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `engine` defines the game handle and its builder.
//
mod engine;

//--- Public Exports ------------------------------------------------------

pub use crate::core::{GameConfig, Result, RuntimeError};
pub use engine::{Game, GameBuilder};
