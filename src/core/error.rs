//=========================================================================
// Runtime Errors
//=========================================================================
//
// Error taxonomy shared by the scene registry, the game lifecycle and the
// execution loop.
//
// Propagation:
//   - configuration errors (duplicate/unknown/missing scene) are fatal to
//     start(), activate_scene() and registry lookups
//   - scene start-hook failures are logged and ignored by activation
//   - per-tick update/draw failures end the loop and surface on join()
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== RuntimeError ========================================================

/// Errors produced by the runtime core.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A required input was empty or out of its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A scene with the same key is already registered.
    #[error("scene {0} is already registered")]
    DuplicateScene(String),

    /// The key does not name a registered scene.
    #[error("scene {0} is not registered")]
    UnknownScene(String),

    /// `start()` was called with an empty scene set.
    #[error("no scenes defined")]
    NoScenes,

    /// `start()` was called without an initial scene.
    #[error("no initial scene defined")]
    NoInitialScene,

    /// `update()`/`draw()` was called before any scene became current.
    #[error("no active scene")]
    NoActiveScene,

    /// `start()` was called on a game that has already been started.
    #[error("game has already been started")]
    AlreadyStarted,

    /// The OS refused to spawn the loop thread.
    #[error("failed to spawn execution loop: {0}")]
    LoopSpawn(#[source] std::io::Error),

    /// The loop thread panicked.
    #[error("execution loop panicked")]
    LoopPanicked,

    /// A scene hook failed.
    #[error(transparent)]
    Scene(#[from] anyhow::Error),
}

/// Convenience alias for runtime results.
pub type Result<T> = std::result::Result<T, RuntimeError>;

//=========================================================================
// Unit Tests
//=========================================================================
