//=========================================================================
// Aetheric Runtime
//
// Embedder-facing entry point: builder, game handle and loop ownership.
//
// Architecture:
// ```text
//     GameBuilder  ──build()──>  Game  ──start()──>  [Execution Loop]
//         │                        │
//         ├─ with_fps()            ├─ pause() / resume() / end()
//         ├─ with_scene()          ├─ activate_scene()
//         ├─ with_initial_scene()  ├─ with_lifecycle()
//         └─ with_callbacks()      └─ join()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::{Arc, Mutex};

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::execution_loop::{lock, ExecutionLoop, LoopHandle, SharedLifecycle};
use crate::core::lifecycle::{GameCallbacks, GameLifecycle, NoopCallbacks, PendingScene};
use crate::core::scene::{Scene, SceneKey};

//=== GameBuilder =========================================================

/// Builder for configuring and constructing a [`Game`].
///
/// # Default Values
///
/// - **FPS**: 60
/// - **Callbacks**: [`NoopCallbacks`]
///
/// # Examples
///
/// ```no_run
/// use aetheric_runtime::prelude::*;
/// use std::time::Duration;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameScene { Title }
/// impl SceneKey for GameScene {}
///
/// struct Title;
/// impl Scene<GameScene> for Title {
///     fn on_update(
///         &mut self,
///         _elapsed: Duration,
///         _context: &mut SceneContext<GameScene>,
///     ) -> anyhow::Result<()> {
///         Ok(())
///     }
/// }
///
/// let mut game = GameBuilder::new()
///     .with_fps(30)
///     .with_scene(GameScene::Title, Title)
///     .with_initial_scene(GameScene::Title)
///     .build()?;
///
/// game.start()?;
/// game.end();
/// game.join()?;
/// # Ok::<(), aetheric_runtime::core::RuntimeError>(())
/// ```
pub struct GameBuilder<S: SceneKey> {
    config: GameConfig,
    scenes: Vec<PendingScene<S>>,
    initial: Option<S>,
    callbacks: Box<dyn GameCallbacks>,
}

impl<S: SceneKey> GameBuilder<S> {
    /// Creates a new builder with default settings and no scenes.
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            scenes: Vec::new(),
            initial: None,
            callbacks: Box::new(NoopCallbacks),
        }
    }

    /// Sets the target frames per second. Checked by [`Self::build`].
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.config.fps = fps;
        self
    }

    /// Names the execution loop thread.
    pub fn with_loop_thread_name(mut self, name: impl Into<String>) -> Self {
        self.config.loop_thread_name = name.into();
        self
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds a scene. Scenes are registered when the game starts, so a
    /// duplicate key is reported by [`Game::start`].
    pub fn with_scene<T>(mut self, key: S, scene: T) -> Self
    where
        T: Scene<S> + 'static,
    {
        self.scenes.push((key, Box::new(scene)));
        self
    }

    /// Designates the scene activated by [`Game::start`].
    pub fn with_initial_scene(mut self, key: S) -> Self {
        self.initial = Some(key);
        self
    }

    /// Installs the game-level lifecycle hooks.
    pub fn with_callbacks<C>(mut self, callbacks: C) -> Self
    where
        C: GameCallbacks + 'static,
    {
        self.callbacks = Box::new(callbacks);
        self
    }

    /// Builds the game. Nothing runs until [`Game::start`].
    ///
    /// # Errors
    ///
    /// [`crate::core::RuntimeError::InvalidArgument`] if the configuration
    /// is invalid.
    pub fn build(self) -> Result<Game<S>> {
        self.config.validate()?;
        info!(
            "Building game (FPS: {}, scenes: {})",
            self.config.fps,
            self.scenes.len()
        );

        let (wake_tx, wake_rx) = bounded(1);

        Ok(Game {
            lifecycle: Arc::new(Mutex::new(GameLifecycle::new(self.callbacks))),
            config: self.config,
            pending: self.scenes,
            initial: self.initial,
            wake_tx,
            wake_rx,
            loop_handle: None,
        })
    }
}

impl<S: SceneKey> Default for GameBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Game ================================================================

/// A game instance: lifecycle behind one lock, plus its execution loop.
///
/// Every control method takes the game lock, so it is observed between
/// ticks, never in the middle of one. Dropping a started game ends it and
/// joins the loop.
pub struct Game<S: SceneKey> {
    lifecycle: SharedLifecycle<S>,
    config: GameConfig,
    pending: Vec<PendingScene<S>>,
    initial: Option<S>,
    wake_tx: Sender<()>,
    wake_rx: Receiver<()>,
    loop_handle: Option<LoopHandle>,
}

impl<S: SceneKey> Game<S> {
    //--- Execution --------------------------------------------------------

    /// Registers the scenes, activates the initial scene and spawns the
    /// execution loop.
    ///
    /// The builder's scenes are handed over on the first call, so a start
    /// that fails cannot be retried on the same `Game`.
    ///
    /// # Errors
    ///
    /// See [`GameLifecycle::start`]; additionally
    /// [`crate::core::RuntimeError::LoopSpawn`] if the thread cannot be
    /// created.
    pub fn start(&mut self) -> Result<()> {
        let scenes = std::mem::take(&mut self.pending);
        lock(&self.lifecycle).start(scenes, self.initial)?;

        let handle = ExecutionLoop::new(
            Arc::clone(&self.lifecycle),
            self.config.tick_interval(),
            self.wake_rx.clone(),
        )
        .spawn(&self.config.loop_thread_name)?;

        self.loop_handle = Some(handle);
        info!("Game started");
        Ok(())
    }

    /// Waits for the execution loop to exit.
    ///
    /// Returns immediately if the loop was never started or was already
    /// joined.
    ///
    /// # Errors
    ///
    /// The failure that stopped the loop, if any.
    pub fn join(&mut self) -> Result<()> {
        match self.loop_handle.take() {
            Some(handle) => handle.join(),
            None => Ok(()),
        }
    }

    /// Returns true if a loop was started and has since exited.
    pub fn loop_finished(&self) -> bool {
        self.loop_handle
            .as_ref()
            .is_some_and(LoopHandle::is_finished)
    }

    //--- Control ----------------------------------------------------------

    /// Pauses the game. See [`GameLifecycle::pause`].
    pub fn pause(&self) {
        lock(&self.lifecycle).pause();
    }

    /// Resumes the game. See [`GameLifecycle::resume`].
    pub fn resume(&self) {
        lock(&self.lifecycle).resume();
    }

    /// Ends the game and wakes the loop so it exits promptly.
    pub fn end(&self) {
        lock(&self.lifecycle).end();
        let _ = self.wake_tx.try_send(());
    }

    /// Switches to another registered scene.
    ///
    /// # Errors
    ///
    /// [`crate::core::RuntimeError::UnknownScene`] if `key` is not
    /// registered.
    pub fn activate_scene(&self, key: S) -> Result<()> {
        lock(&self.lifecycle).activate_scene(key)
    }

    /// Runs `f` with exclusive access to the lifecycle, under the same lock
    /// the loop holds during a tick.
    pub fn with_lifecycle<R>(&self, f: impl FnOnce(&mut GameLifecycle<S>) -> R) -> R {
        f(&mut *lock(&self.lifecycle))
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_over(&self) -> bool {
        lock(&self.lifecycle).is_over()
    }

    /// Returns true unless paused; ignores `over`. See
    /// [`GameLifecycle::is_running`].
    pub fn is_running(&self) -> bool {
        lock(&self.lifecycle).is_running()
    }

    /// Returns true if the game is neither paused nor over.
    pub fn can_update(&self) -> bool {
        lock(&self.lifecycle).can_update()
    }

    pub fn current_scene(&self) -> Option<S> {
        lock(&self.lifecycle).current_scene()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl<S: SceneKey> Drop for Game<S> {
    fn drop(&mut self) {
        if self.loop_handle.is_none() {
            return;
        }

        self.end();
        if let Err(e) = self.join() {
            error!("Execution loop ended with error: {}", e);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::RuntimeError;
    use crate::core::scene::SceneContext;
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
    use std::thread;
    use std::time::{Duration, Instant};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestScene {
        Title,
        Play,
    }

    impl SceneKey for TestScene {}

    struct Counter {
        ticks: Arc<AtomicU32>,
        end_after: Option<u32>,
    }

    impl Scene<TestScene> for Counter {
        fn on_update(
            &mut self,
            _elapsed: Duration,
            context: &mut SceneContext<TestScene>,
        ) -> anyhow::Result<()> {
            let n = self.ticks.fetch_add(1, Ordering::SeqCst) + 1;
            if self.end_after == Some(n) {
                context.end_game();
            }
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct OverFlag(Arc<AtomicBool>);

    impl GameCallbacks for OverFlag {
        fn on_over(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    fn counter(ticks: &Arc<AtomicU32>) -> Counter {
        Counter {
            ticks: ticks.clone(),
            end_after: None,
        }
    }

    fn wait_until(cond: impl Fn() -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if cond() {
                return true;
            }
            thread::sleep(Duration::from_millis(2));
        }
        cond()
    }

    //=====================================================================
    // GameBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = GameBuilder::<TestScene>::new();
        assert_eq!(builder.config, GameConfig::default());
        assert!(builder.scenes.is_empty());
        assert!(builder.initial.is_none());
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let ticks = Arc::new(AtomicU32::new(0));
        let game = GameBuilder::new()
            .with_fps(120)
            .with_loop_thread_name("render")
            .with_scene(TestScene::Title, counter(&ticks))
            .with_initial_scene(TestScene::Title)
            .build()
            .unwrap();

        assert_eq!(game.config().fps, 120);
        assert_eq!(game.config().loop_thread_name, "render");
        assert_eq!(game.config().tick_interval(), Duration::from_millis(8));
        assert!(game.current_scene().is_none());
    }

    #[test]
    fn builder_rejects_zero_fps() {
        let result = GameBuilder::<TestScene>::new().with_fps(0).build();
        assert!(matches!(result, Err(RuntimeError::InvalidArgument(_))));
    }

    //=====================================================================
    // Start Tests
    //=====================================================================

    #[test]
    fn start_without_scenes_fails() {
        let mut game = GameBuilder::<TestScene>::new()
            .with_initial_scene(TestScene::Title)
            .build()
            .unwrap();

        assert!(matches!(game.start(), Err(RuntimeError::NoScenes)));
        assert!(game.join().is_ok());
    }

    #[test]
    fn start_without_initial_scene_fails() {
        let ticks = Arc::new(AtomicU32::new(0));
        let mut game = GameBuilder::new()
            .with_scene(TestScene::Title, counter(&ticks))
            .build()
            .unwrap();

        assert!(matches!(game.start(), Err(RuntimeError::NoInitialScene)));
    }

    #[test]
    fn start_with_duplicate_scene_fails() {
        let ticks = Arc::new(AtomicU32::new(0));
        let mut game = GameBuilder::new()
            .with_scene(TestScene::Title, counter(&ticks))
            .with_scene(TestScene::Title, counter(&ticks))
            .with_initial_scene(TestScene::Title)
            .build()
            .unwrap();

        assert!(matches!(game.start(), Err(RuntimeError::DuplicateScene(_))));
    }

    #[test]
    fn start_twice_is_rejected() {
        let ticks = Arc::new(AtomicU32::new(0));
        let mut game = GameBuilder::new()
            .with_fps(200)
            .with_scene(TestScene::Title, counter(&ticks))
            .with_initial_scene(TestScene::Title)
            .build()
            .unwrap();

        game.start().unwrap();
        assert!(matches!(game.start(), Err(RuntimeError::AlreadyStarted)));

        game.end();
        game.join().unwrap();
    }

    //=====================================================================
    // Runtime Tests
    //=====================================================================

    #[test]
    fn pause_stops_ticks_until_resume() {
        let ticks = Arc::new(AtomicU32::new(0));
        let mut game = GameBuilder::new()
            .with_fps(200)
            .with_scene(TestScene::Title, counter(&ticks))
            .with_initial_scene(TestScene::Title)
            .build()
            .unwrap();

        game.start().unwrap();
        assert_eq!(game.current_scene(), Some(TestScene::Title));
        assert!(wait_until(|| ticks.load(Ordering::SeqCst) >= 2));

        game.pause();
        let frozen = ticks.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(ticks.load(Ordering::SeqCst), frozen);
        assert!(!game.can_update());

        game.resume();
        assert!(wait_until(|| ticks.load(Ordering::SeqCst) > frozen));

        game.end();
        game.join().unwrap();
        assert!(game.is_over());
        assert!(game.loop_handle.is_none());
    }

    #[test]
    fn scene_can_end_the_game() {
        let ticks = Arc::new(AtomicU32::new(0));
        let over = OverFlag::default();
        let mut game = GameBuilder::new()
            .with_fps(200)
            .with_scene(
                TestScene::Title,
                Counter {
                    ticks: ticks.clone(),
                    end_after: Some(3),
                },
            )
            .with_initial_scene(TestScene::Title)
            .with_callbacks(over.clone())
            .build()
            .unwrap();

        game.start().unwrap();
        assert!(wait_until(|| game.loop_finished()));
        game.join().unwrap();

        assert!(game.is_over());
        assert!(over.0.load(Ordering::SeqCst));
        assert_eq!(ticks.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn activate_scene_switches_between_ticks() {
        let title = Arc::new(AtomicU32::new(0));
        let play = Arc::new(AtomicU32::new(0));
        let mut game = GameBuilder::new()
            .with_fps(200)
            .with_scene(TestScene::Title, counter(&title))
            .with_scene(TestScene::Play, counter(&play))
            .with_initial_scene(TestScene::Title)
            .build()
            .unwrap();

        game.start().unwrap();
        game.activate_scene(TestScene::Play).unwrap();
        let title_ticks = title.load(Ordering::SeqCst);

        assert!(wait_until(|| play.load(Ordering::SeqCst) >= 2));
        assert_eq!(title.load(Ordering::SeqCst), title_ticks);
        assert_eq!(game.current_scene(), Some(TestScene::Play));

        game.end();
        game.join().unwrap();
    }

    #[test]
    fn with_lifecycle_sees_consistent_state() {
        let ticks = Arc::new(AtomicU32::new(0));
        let mut game = GameBuilder::new()
            .with_fps(200)
            .with_scene(TestScene::Title, counter(&ticks))
            .with_initial_scene(TestScene::Title)
            .build()
            .unwrap();
        game.start().unwrap();

        let (running, registered) =
            game.with_lifecycle(|lc| (lc.can_update(), lc.registry().len()));
        assert!(running);
        assert_eq!(registered, 1);

        game.end();
        game.join().unwrap();
    }

    #[test]
    fn dropping_a_started_game_ends_it() {
        let ticks = Arc::new(AtomicU32::new(0));
        let over = OverFlag::default();
        let mut game = GameBuilder::new()
            .with_fps(200)
            .with_scene(TestScene::Title, counter(&ticks))
            .with_initial_scene(TestScene::Title)
            .with_callbacks(over.clone())
            .build()
            .unwrap();

        game.start().unwrap();
        drop(game);

        assert!(over.0.load(Ordering::SeqCst));
    }
}
