//=========================================================================
// Physics
//=========================================================================
//
// Continuous motion for scene-owned entities.
//
// Components:
// - `vector`: Vec2 value type
// - `velocity`: polar/Cartesian velocity
// - `rigid_body`: per-entity kinematic state
// - `integrator`: integrate() / apply_force() over a RigidBody
//
//=========================================================================

//=== Module Declarations =================================================

mod integrator;
mod rigid_body;
mod vector;
mod velocity;

//=== Public API ==========================================================

pub use integrator::{apply_force, integrate, GRAVITY};
pub use rigid_body::RigidBody;
pub use vector::Vec2;
pub use velocity::Velocity;
