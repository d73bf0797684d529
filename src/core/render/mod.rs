//=========================================================================
// Rendering Hand-off
//=========================================================================
//
// Contracts between scene entities and whatever actually puts pixels on
// screen. The runtime never draws itself; it only orders the calls.
//
// Per tick, for each drawable entity:
//   prepare()  → may update cached draw state, never draws
//   draw()     → emits to the renderer, never mutates
//
//=========================================================================

//=== Module Declarations =================================================

mod animated_sprite;

//=== Public API ==========================================================

pub use animated_sprite::AnimatedSprite;

use crate::core::physics::Vec2;

//=== Drawable ============================================================

/// An entity that can be asked to prepare and then draw itself.
pub trait Drawable {
    /// Called right before [`Drawable::draw`] in the same tick.
    fn prepare(&mut self) {}

    /// Emits the entity to its renderer.
    fn draw(&self);
}

//=== FrameRenderer =======================================================

/// Receives one image per drawn entity.
///
/// Implemented by the embedder's rendering layer; `I` is its image handle.
pub trait FrameRenderer<I> {
    /// Draws `image` centered on `position`.
    fn render_frame(&self, image: I, position: Vec2);
}

impl<I, R: FrameRenderer<I> + ?Sized> FrameRenderer<I> for &R {
    fn render_frame(&self, image: I, position: Vec2) {
        (**self).render_frame(image, position);
    }
}
