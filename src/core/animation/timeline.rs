//=========================================================================
// Animation Timeline
//=========================================================================
//
// Converts elapsed time into a discrete display frame.
//
// Frames store cumulative end times in milliseconds:
//
//   frame   0        1          2
//   end     |--100--|---250----|--300--|
//
// The cursor (`elapsed_ms`) moves by `elapsed * speed` per advance. The
// sub-millisecond part of each step is carried into the next one, so many
// short steps add up to the same cursor as one long step.
//
// The current frame is the first one whose end time is >= the cursor,
// found by a forward-only scan from the previous current frame.
//
// Known quirk: the scan never moves backward, so a negative speed can
// leave `current_frame` ahead of the cursor until the next wrap/restart.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::trace;

//=== Frame ===============================================================

#[derive(Debug, Clone, Copy, PartialEq)]
struct Frame<I> {
    image: I,
    end_ms: i64,
}

//=== AnimationTimeline ===================================================

/// Frame-based animation clock.
///
/// `I` is an opaque image handle (texture id, atlas index, ...).
///
/// A new timeline is playing and repeating, at speed 1.0.
///
/// ```rust
/// # use aetheric_runtime::core::animation::AnimationTimeline;
/// # use std::time::Duration;
/// let mut walk = AnimationTimeline::new();
/// walk.append(1u32, Duration::from_millis(100));
/// walk.append(2u32, Duration::from_millis(150));
///
/// walk.advance(Duration::from_millis(110));
/// assert_eq!(walk.current_frame_image(), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct AnimationTimeline<I> {
    frames: Vec<Frame<I>>,
    total_ms: i64,
    elapsed_ms: i64,
    carry_us: i64,
    current: usize,
    speed: f32,
    playing: bool,
    repeating: bool,
    has_looped: bool,
    pause_target: Option<usize>,
}

impl<I: Copy> AnimationTimeline<I> {
    //--- Construction -----------------------------------------------------

    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            total_ms: 0,
            elapsed_ms: 0,
            carry_us: 0,
            current: 0,
            speed: 1.0,
            playing: true,
            repeating: true,
            has_looped: false,
            pause_target: None,
        }
    }

    /// Appends a frame displayed for `duration` after the previous one.
    ///
    /// Frames must be appended before playback starts.
    pub fn append(&mut self, image: I, duration: Duration) {
        self.total_ms = self.total_ms.saturating_add(millis(duration));
        self.frames.push(Frame {
            image,
            end_ms: self.total_ms,
        });
    }

    //--- Frame Access -----------------------------------------------------

    /// Jumps to frame `index`. Out-of-range indices are ignored.
    ///
    /// The cursor is not moved.
    pub fn set_current_frame(&mut self, index: usize) {
        if index < self.frames.len() {
            self.current = index;
        }
    }

    /// Returns the image of frame `index`, or `None` if out of range.
    pub fn frame_image(&self, index: usize) -> Option<I> {
        self.frames.get(index).map(|frame| frame.image)
    }

    /// Returns the image of the current frame, or `None` if there is none.
    pub fn current_frame_image(&self) -> Option<I> {
        self.frame_image(self.current)
    }

    pub fn current_frame(&self) -> usize {
        self.current
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    //--- Properties -------------------------------------------------------

    /// Sets the playback rate. 2.0 plays twice as fast, 0.0 freezes,
    /// negatives run the cursor backward.
    pub fn set_speed(&mut self, rate: f32) {
        self.speed = rate;
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_repeating(&mut self, repeating: bool) {
        self.repeating = repeating;
    }

    pub fn is_repeating(&self) -> bool {
        self.repeating
    }

    /// True once the cursor has reached the end, whether it wrapped or
    /// clamped. Only `restart()` clears it.
    pub fn has_looped(&self) -> bool {
        self.has_looped
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Cursor position in milliseconds.
    pub fn elapsed_ms(&self) -> i64 {
        self.elapsed_ms
    }

    /// Sum of all frame durations in milliseconds.
    pub fn total_duration_ms(&self) -> i64 {
        self.total_ms
    }

    /// Frame at which playback will stop, if any.
    pub fn pause_target(&self) -> Option<usize> {
        self.pause_target
    }

    //--- Playback Control -------------------------------------------------

    /// Resumes playback from the current position.
    pub fn start(&mut self) {
        self.playing = true;
    }

    /// Stops playback, keeping the current position.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Rewinds to the first frame and plays.
    pub fn restart(&mut self) {
        self.elapsed_ms = 0;
        self.carry_us = 0;
        self.current = 0;
        self.has_looped = false;
        self.playing = true;
    }

    /// Stops playback once `frame` becomes current.
    ///
    /// An out-of-range `frame` targets frame 0.
    pub fn pause_at_frame(&mut self, frame: usize) {
        self.pause_target = Some(if frame < self.frames.len() { frame } else { 0 });
    }

    //--- Advance ----------------------------------------------------------

    /// Moves the cursor by `elapsed * speed` and updates the current frame.
    ///
    /// Does nothing while paused or with fewer than two frames.
    pub fn advance(&mut self, elapsed: Duration) {
        if !self.playing || self.frames.len() < 2 {
            return;
        }

        let scaled_us = (micros(elapsed) as f64 * f64::from(self.speed)) as i64;
        let step_us = self.carry_us.saturating_add(scaled_us);
        self.carry_us = step_us % 1000;
        self.elapsed_ms = self.elapsed_ms.saturating_add(step_us / 1000);

        if self.elapsed_ms >= self.total_ms {
            if self.repeating {
                // A zero-length timeline has nowhere to wrap to.
                self.elapsed_ms = if self.total_ms > 0 {
                    self.elapsed_ms % self.total_ms
                } else {
                    0
                };
                self.current = 0;
            } else {
                self.elapsed_ms = self.total_ms;
            }
            self.has_looped = true;
        }

        let last = self.frames.len() - 1;
        while self.current < last && self.frames[self.current].end_ms < self.elapsed_ms {
            self.current += 1;
        }

        if self.pause_target == Some(self.current) {
            trace!("Animation reached pause frame {}", self.current);
            self.playing = false;
            self.pause_target = None;
        }
    }
}

impl<I: Copy> Default for AnimationTimeline<I> {
    fn default() -> Self {
        Self::new()
    }
}

fn millis(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}

fn micros(duration: Duration) -> i64 {
    i64::try_from(duration.as_micros()).unwrap_or(i64::MAX)
}

//=========================================================================
// Unit Tests
//=========================================================================
