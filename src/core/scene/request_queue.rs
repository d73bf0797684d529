//=========================================================================
// Request Queue
//=========================================================================
//
// Queue for scene-issued requests.
//
// Scenes queue requests here during updates. The lifecycle applies the
// queue at the tick boundary, after draw, while still holding the game
// lock.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::SceneKey;

//=== SceneRequest ========================================================

/// A state change a scene asks for from inside its own update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRequest<S: SceneKey> {
    /// Makes the given scene current and runs its start hook.
    Activate(S),

    /// Pauses the game.
    Pause,

    /// Ends the game.
    End,
}

//=== RequestQueue ========================================================

/// FIFO queue of pending [`SceneRequest`]s.
#[derive(Debug)]
pub struct RequestQueue<S: SceneKey> {
    queue: Vec<SceneRequest<S>>,
}

impl<S: SceneKey> RequestQueue<S> {
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a request to be applied at the next tick boundary.
    pub fn push(&mut self, request: SceneRequest<S>) {
        self.queue.push(request);
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Takes all requests, leaving the queue empty.
    pub fn take(&mut self) -> Vec<SceneRequest<S>> {
        std::mem::take(&mut self.queue)
    }
}

impl<S: SceneKey> Default for RequestQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
