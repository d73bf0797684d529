//=========================================================================
// Scene System
//=========================================================================
//
// Scene trait, scene registry and deferred scene requests.
//
// Architecture:
//   SceneRegistry
//     ├─ scenes: HashMap<S, Box<dyn Scene<S>>>
//     └─ current: Option<S>
//
// Flow:
//   GameLifecycle::update() → SceneRegistry::current_mut() → Scene::on_update()
//                           → SceneContext (queued requests)
//                           → GameLifecycle::apply_requests()
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Module Declarations =================================================

mod context;
mod registry;
mod request_queue;

//=== Public API ==========================================================

pub use context::SceneContext;
pub use registry::{SceneKey, SceneRegistry};
pub use request_queue::{RequestQueue, SceneRequest};

//=== Scene Trait =========================================================

/// A named mode of the game with its own lifecycle hooks.
///
/// Scenes are handed to [`crate::GameBuilder`] and registered when the game
/// starts. Only the current scene receives updates and draws.
///
/// # Minimal Implementation
///
/// Only `on_update()` is required. The other hooks default to no-ops:
///
/// ```rust
/// # use aetheric_runtime::prelude::*;
/// # use std::time::Duration;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum GameScene { Main }
/// # impl SceneKey for GameScene {}
/// struct MainScene;
///
/// impl Scene<GameScene> for MainScene {
///     fn on_update(
///         &mut self,
///         _elapsed: Duration,
///         _context: &mut SceneContext<GameScene>,
///     ) -> anyhow::Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait Scene<S: SceneKey>: Send {
    /// Called each time the scene is activated.
    ///
    /// A returned error is logged and ignored; activation still completes.
    fn on_start(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Called once per tick while the scene is current and the game runs.
    ///
    /// `elapsed` is the wall time since the previous tick. Scenes queue
    /// switch/pause/end requests on `context`; they are applied after draw.
    fn on_update(&mut self, elapsed: Duration, context: &mut SceneContext<S>)
        -> anyhow::Result<()>;

    /// Called once per tick right after `on_update`.
    fn on_draw(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Called when another scene replaces this one, or when the game ends.
    fn on_stop(&mut self) {}
}
