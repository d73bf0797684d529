//=========================================================================
// Scene Registry
//=========================================================================
//
// Stores scenes by key and tracks which one is current.
//
// Scenes are registered once and live for the whole game. Switching only
// moves the `current` pointer; start/stop hooks are the lifecycle's job.
//
// Invariant: `current`, if set, is always a registered key.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;

//=== Internal Dependencies ===============================================

use super::Scene;
use crate::core::error::{Result, RuntimeError};

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers.
///
/// Scene keys uniquely identify scenes in the registry. Typically
/// implemented by game-specific enums.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== SceneRegistry =======================================================

/// Keyed scene storage with a single current scene.
pub struct SceneRegistry<S: SceneKey> {
    scenes: HashMap<S, Box<dyn Scene<S>>>,
    current: Option<S>,
}

impl<S: SceneKey> SceneRegistry<S> {
    //--- Construction -----------------------------------------------------

    /// Creates an empty registry with no current scene.
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            current: None,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene under `key`.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::DuplicateScene`] if `key` is already registered. The
    /// existing scene is kept.
    pub fn register(&mut self, key: S, scene: Box<dyn Scene<S>>) -> Result<()> {
        if self.scenes.contains_key(&key) {
            return Err(RuntimeError::DuplicateScene(format!("{:?}", key)));
        }

        debug!("Registered scene {:?}", key);
        self.scenes.insert(key, scene);
        Ok(())
    }

    //--- Current Scene ----------------------------------------------------

    /// Makes `key` the current scene. Invokes no scene hook.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::UnknownScene`] if `key` is not registered.
    pub fn set_current(&mut self, key: S) -> Result<()> {
        if !self.scenes.contains_key(&key) {
            return Err(unknown(key));
        }

        self.current = Some(key);
        Ok(())
    }

    /// Returns the key of the current scene, if any.
    pub fn current_key(&self) -> Option<S> {
        self.current
    }

    /// Returns the current scene, if any.
    pub fn current(&self) -> Option<&dyn Scene<S>> {
        let key = self.current?;
        self.scenes.get(&key).map(|scene| scene.as_ref())
    }

    /// Returns the current scene mutably, if any.
    pub fn current_mut(&mut self) -> Option<&mut (dyn Scene<S> + 'static)> {
        let key = self.current?;
        self.scenes.get_mut(&key).map(|scene| scene.as_mut())
    }

    //--- Lookup -----------------------------------------------------------

    /// Returns the scene registered under `key`.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::UnknownScene`] if `key` is not registered.
    pub fn get(&self, key: S) -> Result<&dyn Scene<S>> {
        self.scenes
            .get(&key)
            .map(|scene| scene.as_ref())
            .ok_or_else(|| unknown(key))
    }

    /// Returns the scene registered under `key` mutably.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::UnknownScene`] if `key` is not registered.
    pub fn get_mut(&mut self, key: S) -> Result<&mut (dyn Scene<S> + 'static)> {
        self.scenes
            .get_mut(&key)
            .map(|scene| scene.as_mut())
            .ok_or_else(|| unknown(key))
    }

    /// Returns true if `key` is registered.
    pub fn contains(&self, key: S) -> bool {
        self.scenes.contains_key(&key)
    }

    /// Lists the registered keys. Order is unspecified.
    pub fn list(&self) -> Vec<S> {
        self.scenes.keys().copied().collect()
    }

    /// Returns the number of registered scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Returns true if no scene is registered.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

impl<S: SceneKey> Default for SceneRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

fn unknown<S: SceneKey>(key: S) -> RuntimeError {
    RuntimeError::UnknownScene(format!("{:?}", key))
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::SceneContext;
    use std::time::Duration;

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestScene {
        A,
        B,
        C,
    }

    impl SceneKey for TestScene {}

    /// Scene that counts its own updates.
    struct Counter {
        updates: u32,
    }

    impl Scene<TestScene> for Counter {
        fn on_update(
            &mut self,
            _elapsed: Duration,
            _context: &mut SceneContext<TestScene>,
        ) -> anyhow::Result<()> {
            self.updates += 1;
            Ok(())
        }
    }

    fn counter() -> Box<dyn Scene<TestScene>> {
        Box::new(Counter { updates: 0 })
    }

    //=====================================================================
    // Registration
    //=====================================================================

    #[test]
    fn new_registry_is_empty() {
        let registry = SceneRegistry::<TestScene>::new();
        assert!(registry.is_empty());
        assert!(registry.current().is_none());
        assert!(registry.current_key().is_none());
    }

    #[test]
    fn register_inserts_scene() {
        let mut registry = SceneRegistry::new();
        registry.register(TestScene::A, counter()).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.contains(TestScene::A));
        assert!(registry.get(TestScene::A).is_ok());
    }

    #[test]
    fn register_twice_fails_with_duplicate() {
        let mut registry = SceneRegistry::new();
        registry.register(TestScene::A, counter()).unwrap();

        let err = registry.register(TestScene::A, counter()).unwrap_err();
        assert!(matches!(err, RuntimeError::DuplicateScene(ref k) if k == "A"));
        assert_eq!(registry.len(), 1);
    }

    //=====================================================================
    // Current Scene
    //=====================================================================

    #[test]
    fn set_current_unknown_fails() {
        let mut registry = SceneRegistry::new();
        registry.register(TestScene::A, counter()).unwrap();

        let err = registry.set_current(TestScene::B).unwrap_err();
        assert!(matches!(err, RuntimeError::UnknownScene(_)));
        assert!(registry.current_key().is_none());
    }

    #[test]
    fn set_current_then_current_returns_that_scene() {
        let mut registry = SceneRegistry::new();
        registry.register(TestScene::A, counter()).unwrap();
        registry.register(TestScene::B, counter()).unwrap();

        registry.set_current(TestScene::B).unwrap();
        assert_eq!(registry.current_key(), Some(TestScene::B));

        let mut context = SceneContext::new();
        registry
            .current_mut()
            .unwrap()
            .on_update(Duration::from_millis(16), &mut context)
            .unwrap();

        registry.set_current(TestScene::A).unwrap();
        assert_eq!(registry.current_key(), Some(TestScene::A));
        assert!(registry.current().is_some());
    }

    #[test]
    fn failed_set_current_keeps_previous() {
        let mut registry = SceneRegistry::new();
        registry.register(TestScene::A, counter()).unwrap();
        registry.set_current(TestScene::A).unwrap();

        assert!(registry.set_current(TestScene::C).is_err());
        assert_eq!(registry.current_key(), Some(TestScene::A));
    }

    //=====================================================================
    // Lookup
    //=====================================================================

    #[test]
    fn get_unknown_fails() {
        let mut registry = SceneRegistry::<TestScene>::new();
        assert!(matches!(
            registry.get(TestScene::C),
            Err(RuntimeError::UnknownScene(_))
        ));
        assert!(matches!(
            registry.get_mut(TestScene::C),
            Err(RuntimeError::UnknownScene(_))
        ));
    }

    #[test]
    fn list_contains_every_key() {
        let mut registry = SceneRegistry::new();
        registry.register(TestScene::A, counter()).unwrap();
        registry.register(TestScene::C, counter()).unwrap();

        let mut keys = registry.list();
        keys.sort_by_key(|k| format!("{:?}", k));
        assert_eq!(keys, vec![TestScene::A, TestScene::C]);
    }
}
