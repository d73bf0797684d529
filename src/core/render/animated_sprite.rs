//=========================================================================
// Animated Sprite
//=========================================================================
//
// A positioned entity whose look comes from an AnimationTimeline.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::{Drawable, FrameRenderer};
use crate::core::animation::AnimationTimeline;
use crate::core::physics::Vec2;

//=== AnimatedSprite ======================================================

/// Timeline-driven sprite.
///
/// `prepare()` samples the timeline's current image; `draw()` hands the
/// sampled image to the renderer. A sprite with no current frame draws
/// nothing.
pub struct AnimatedSprite<I, R> {
    /// Center of the sprite.
    pub position: Vec2,
    timeline: AnimationTimeline<I>,
    renderer: R,
    prepared: Option<I>,
}

impl<I: Copy, R: FrameRenderer<I>> AnimatedSprite<I, R> {
    pub fn new(timeline: AnimationTimeline<I>, renderer: R) -> Self {
        Self {
            position: Vec2::ZERO,
            timeline,
            renderer,
            prepared: None,
        }
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Advances the animation by one tick.
    pub fn update(&mut self, elapsed: Duration) {
        self.timeline.advance(elapsed);
    }

    /// Starts (or resumes) the animation.
    pub fn animate(&mut self) {
        self.timeline.start();
    }

    /// Pauses the animation on its current frame.
    pub fn stop_animation(&mut self) {
        self.timeline.pause();
    }

    pub fn set_animation_speed(&mut self, rate: f32) {
        self.timeline.set_speed(rate);
    }

    pub fn timeline(&self) -> &AnimationTimeline<I> {
        &self.timeline
    }

    pub fn timeline_mut(&mut self) -> &mut AnimationTimeline<I> {
        &mut self.timeline
    }
}

impl<I: Copy, R: FrameRenderer<I>> Drawable for AnimatedSprite<I, R> {
    fn prepare(&mut self) {
        self.prepared = self.timeline.current_frame_image();
    }

    fn draw(&self) {
        if let Some(image) = self.prepared {
            self.renderer.render_frame(image, self.position);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingRenderer {
        calls: RefCell<Vec<(u32, Vec2)>>,
    }

    impl FrameRenderer<u32> for RecordingRenderer {
        fn render_frame(&self, image: u32, position: Vec2) {
            self.calls.borrow_mut().push((image, position));
        }
    }

    fn walk_cycle() -> AnimationTimeline<u32> {
        let mut timeline = AnimationTimeline::new();
        timeline.append(1, Duration::from_millis(100));
        timeline.append(2, Duration::from_millis(100));
        timeline
    }

    #[test]
    fn draw_emits_prepared_frame() {
        let renderer = RecordingRenderer::default();
        let mut sprite = AnimatedSprite::new(walk_cycle(), &renderer).at(Vec2::new(4.0, 8.0));

        sprite.update(Duration::from_millis(150));
        sprite.prepare();
        sprite.draw();

        assert_eq!(*renderer.calls.borrow(), vec![(2, Vec2::new(4.0, 8.0))]);
    }

    #[test]
    fn draw_without_prepare_emits_nothing() {
        let renderer = RecordingRenderer::default();
        let sprite = AnimatedSprite::new(walk_cycle(), &renderer);

        sprite.draw();
        assert!(renderer.calls.borrow().is_empty());
    }

    #[test]
    fn draw_uses_image_sampled_at_prepare() {
        let renderer = RecordingRenderer::default();
        let mut sprite = AnimatedSprite::new(walk_cycle(), &renderer);

        sprite.prepare();
        sprite.update(Duration::from_millis(150));
        sprite.draw();

        assert_eq!(renderer.calls.borrow()[0].0, 1);
    }

    #[test]
    fn empty_timeline_draws_nothing() {
        let renderer = RecordingRenderer::default();
        let mut sprite = AnimatedSprite::new(AnimationTimeline::new(), &renderer);

        sprite.prepare();
        sprite.draw();
        assert!(renderer.calls.borrow().is_empty());
    }

    #[test]
    fn stop_animation_freezes_frame() {
        let renderer = RecordingRenderer::default();
        let mut sprite = AnimatedSprite::new(walk_cycle(), &renderer);

        sprite.stop_animation();
        sprite.update(Duration::from_millis(150));
        assert_eq!(sprite.timeline().current_frame(), 0);

        sprite.animate();
        sprite.set_animation_speed(2.0);
        sprite.update(Duration::from_millis(75));
        assert_eq!(sprite.timeline().current_frame(), 1);
    }
}
