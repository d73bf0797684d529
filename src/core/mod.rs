//=========================================================================
// Core Systems
//=========================================================================
//
// Runtime building blocks, usable on their own or through `Game`.
//
//   scene          : scene contract, registry, in-tick requests
//   lifecycle      : start/pause/resume/end and per-tick routing
//   execution_loop : background cadence driver
//   animation      : frame timelines
//   physics        : vectors, rigid bodies, integration
//   render         : prepare/draw hand-off to the embedder's renderer
//
//=========================================================================

//=== Module Declarations =================================================

pub mod animation;
pub mod config;
pub mod error;
pub(crate) mod execution_loop;
pub mod lifecycle;
pub mod physics;
pub mod render;
pub mod scene;

//=== Public API ==========================================================

pub use config::GameConfig;
pub use error::{Result, RuntimeError};
pub use execution_loop::LoopHandle;
