//=========================================================================
// Game Lifecycle
//=========================================================================
//
// Single authority for start/pause/resume/end and for routing each tick
// to the current scene.
//
// State:
//   over   : terminal, false → true once, never resets
//   paused : toggle, ignored once over
//
// A GameLifecycle lives behind the game's mutex. The execution loop calls
// tick() while holding it; control calls from other threads take the same
// lock, so they land between ticks.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, info, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::error::{Result, RuntimeError};
use crate::core::scene::{Scene, SceneContext, SceneKey, SceneRegistry, SceneRequest};

//=== Module Declarations =================================================

mod callbacks;

//=== Public API ==========================================================

pub use callbacks::{GameCallbacks, NoopCallbacks};

/// A scene waiting to be registered by `start()`.
pub type PendingScene<S> = (S, Box<dyn Scene<S>>);

//=== GameLifecycle =======================================================

/// Game state machine and per-tick router.
pub struct GameLifecycle<S: SceneKey> {
    registry: SceneRegistry<S>,
    callbacks: Box<dyn GameCallbacks>,
    context: SceneContext<S>,
    started: bool,
    over: bool,
    paused: bool,
}

impl<S: SceneKey> GameLifecycle<S> {
    //--- Construction -----------------------------------------------------

    /// Creates a lifecycle with an empty registry.
    pub fn new(callbacks: Box<dyn GameCallbacks>) -> Self {
        Self {
            registry: SceneRegistry::new(),
            callbacks,
            context: SceneContext::new(),
            started: false,
            over: false,
            paused: false,
        }
    }

    //--- Start ------------------------------------------------------------

    /// Registers `scenes`, fires `on_start` and activates `initial`.
    ///
    /// Does not spawn the execution loop; [`crate::Game::start`] does that
    /// once this returns.
    ///
    /// # Errors
    ///
    /// - [`RuntimeError::AlreadyStarted`] on a second call
    /// - [`RuntimeError::NoScenes`] if `scenes` is empty
    /// - [`RuntimeError::NoInitialScene`] if `initial` is `None`
    /// - [`RuntimeError::DuplicateScene`] if two scenes share a key
    /// - [`RuntimeError::UnknownScene`] if `initial` is not among `scenes`
    ///
    /// A failed start changes nothing and may be retried.
    pub fn start(&mut self, scenes: Vec<PendingScene<S>>, initial: Option<S>) -> Result<()> {
        if self.started {
            return Err(RuntimeError::AlreadyStarted);
        }
        if scenes.is_empty() {
            return Err(RuntimeError::NoScenes);
        }
        let Some(initial) = initial else {
            return Err(RuntimeError::NoInitialScene);
        };

        let mut registry = SceneRegistry::new();
        for (key, scene) in scenes {
            registry.register(key, scene)?;
        }
        registry.get(initial)?;

        self.registry = registry;
        self.started = true;
        info!("Registered {} scene(s)", self.registry.len());

        self.callbacks.on_start();

        self.over = false;
        self.paused = false;

        self.activate_scene(initial)
    }

    /// Returns true once `start()` has been accepted.
    pub fn is_started(&self) -> bool {
        self.started
    }

    //--- Scene Activation -------------------------------------------------

    /// Makes `key` current and runs its start hook.
    ///
    /// If another scene was current, its stop hook runs first. A failing
    /// start hook is logged and ignored: the scene stays current.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::UnknownScene`] if `key` is not registered.
    pub fn activate_scene(&mut self, key: S) -> Result<()> {
        self.registry.get(key)?;

        if let Some(previous) = self.registry.current_key().filter(|&k| k != key) {
            debug!("Stopping scene {:?}", previous);
            self.registry.get_mut(previous)?.on_stop();
        }

        self.registry.set_current(key)?;
        debug!("Activated scene {:?}", key);

        if let Err(e) = self.registry.get_mut(key)?.on_start() {
            warn!("Scene {:?} failed to start, continuing: {:#}", key, e);
        }

        Ok(())
    }

    //--- Per-Tick Routing -------------------------------------------------

    /// Forwards `elapsed` to the current scene's update hook.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::NoActiveScene`] if no scene is current, or the
    /// scene's own failure.
    pub fn update(&mut self, elapsed: Duration) -> Result<()> {
        let scene = self
            .registry
            .current_mut()
            .ok_or(RuntimeError::NoActiveScene)?;
        scene.on_update(elapsed, &mut self.context)?;
        Ok(())
    }

    /// Forwards to the current scene's draw hook.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::update`].
    pub fn draw(&mut self) -> Result<()> {
        let scene = self
            .registry
            .current_mut()
            .ok_or(RuntimeError::NoActiveScene)?;
        scene.on_draw()?;
        Ok(())
    }

    /// Applies requests the scene queued during this tick, in order.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::UnknownScene`] if a request names an unregistered
    /// scene. Requests after the failing one are dropped.
    pub fn apply_requests(&mut self) -> Result<()> {
        if self.context.requests.is_empty() {
            return Ok(());
        }

        for request in self.context.requests.take() {
            debug!("Applying scene request {:?}", request);
            match request {
                SceneRequest::Activate(key) => self.activate_scene(key)?,
                SceneRequest::Pause => self.pause(),
                SceneRequest::End => self.end(),
            }
        }
        Ok(())
    }

    /// Runs one tick: update, draw, then queued requests.
    pub fn tick(&mut self, elapsed: Duration) -> Result<()> {
        trace!("Tick ({:?} elapsed)", elapsed);
        self.update(elapsed)?;
        self.draw()?;
        self.apply_requests()
    }

    //--- State Transitions ------------------------------------------------

    /// Pauses the game. No-op if over or already paused.
    pub fn pause(&mut self) {
        if self.over || self.paused {
            return;
        }

        self.paused = true;
        info!("Game paused");
        self.callbacks.on_paused();
    }

    /// Resumes a paused game. No-op if over or not paused.
    ///
    /// `on_resume` fires while the game still reports paused.
    pub fn resume(&mut self) {
        if self.over || !self.paused {
            return;
        }

        self.callbacks.on_resume();
        self.paused = false;
        info!("Game resumed");
    }

    /// Ends the game. No-op if already over; irreversible.
    ///
    /// The current scene's stop hook runs before `on_over`.
    pub fn end(&mut self) {
        if self.over {
            return;
        }

        self.over = true;
        self.paused = false;
        info!("Game over");

        if let Some(scene) = self.registry.current_mut() {
            scene.on_stop();
        }
        self.callbacks.on_over();
    }

    //--- Queries ----------------------------------------------------------

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Returns true unless the game is paused.
    ///
    /// This ignores `over`: an ended game reports running. Use
    /// [`Self::can_update`] to decide whether a tick should run.
    pub fn is_running(&self) -> bool {
        !self.paused
    }

    /// Returns true if the game is neither paused nor over.
    pub fn can_update(&self) -> bool {
        !self.paused && !self.over
    }

    /// Returns the key of the current scene, if any.
    pub fn current_scene(&self) -> Option<S> {
        self.registry.current_key()
    }

    /// Read access to the scene registry.
    pub fn registry(&self) -> &SceneRegistry<S> {
        &self.registry
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
