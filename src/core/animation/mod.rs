//=========================================================================
// Animation
//=========================================================================
//
// Discrete, time-driven frame selection for scene entities.
//
//=========================================================================

mod timeline;

pub use timeline::AnimationTimeline;
