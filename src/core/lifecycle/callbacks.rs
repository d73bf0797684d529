//=========================================================================
// Game Callbacks
//=========================================================================
//
// Hooks the embedding application implements to observe game-level
// transitions. Every hook runs on whichever thread triggered the
// transition, while that thread holds the game lock.
//
//=========================================================================

/// Game-level lifecycle hooks. All default to no-ops.
pub trait GameCallbacks: Send {
    /// Called once by `start()`, after scene registration and before the
    /// initial scene is activated.
    fn on_start(&mut self) {}

    /// Called when the game transitions from running to paused.
    fn on_paused(&mut self) {}

    /// Called when a paused game resumes, before the paused flag clears.
    fn on_resume(&mut self) {}

    /// Called once when the game ends.
    fn on_over(&mut self) {}
}

/// Callbacks that ignore every transition.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCallbacks;

impl GameCallbacks for NoopCallbacks {}
