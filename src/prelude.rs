//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_runtime::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Game handle
pub use crate::engine::{Game, GameBuilder};
pub use crate::core::{GameConfig, RuntimeError};

// Lifecycle
pub use crate::core::lifecycle::GameCallbacks;

// Scene system
pub use crate::core::scene::{Scene, SceneContext, SceneKey};

// Animation
pub use crate::core::animation::AnimationTimeline;

// Physics
pub use crate::core::physics::{RigidBody, Vec2, Velocity};

// Rendering
pub use crate::core::render::{AnimatedSprite, Drawable, FrameRenderer};
