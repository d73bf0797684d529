//=========================================================================
// Game Configuration
//=========================================================================
//
// Construction-time settings, fixed for the lifetime of a game.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::error::{Result, RuntimeError};

//=== GameConfig ==========================================================

/// Settings consumed by [`crate::GameBuilder::build`].
///
/// # Default Values
///
/// - **FPS**: 60
/// - **Loop thread name**: `"aetheric-loop"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Target ticks per second. Must be positive.
    pub fps: u32,

    /// Name given to the execution loop thread.
    pub loop_thread_name: String,
}

impl GameConfig {
    /// Target time between tick starts: `1000 / fps` whole milliseconds.
    ///
    /// Above 1000 fps this is zero and the loop never sleeps.
    pub fn tick_interval(&self) -> Duration {
        let millis = 1000u32.checked_div(self.fps).unwrap_or(0);
        Duration::from_millis(u64::from(millis))
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::InvalidArgument`] if `fps` is zero or the thread name
    /// is empty.
    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(RuntimeError::InvalidArgument(
                "fps must be positive".to_string(),
            ));
        }
        if self.loop_thread_name.trim().is_empty() {
            return Err(RuntimeError::InvalidArgument(
                "loop thread name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            loop_thread_name: "aetheric-loop".to_string(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.fps, 60);
        assert_eq!(config.loop_thread_name, "aetheric-loop");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn interval_uses_integer_milliseconds() {
        let mut config = GameConfig::default();
        assert_eq!(config.tick_interval(), Duration::from_millis(16));

        config.fps = 30;
        assert_eq!(config.tick_interval(), Duration::from_millis(33));

        config.fps = 2000;
        assert_eq!(config.tick_interval(), Duration::ZERO);
    }

    #[test]
    fn zero_fps_is_invalid() {
        let config = GameConfig {
            fps: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RuntimeError::InvalidArgument(_))
        ));
        assert_eq!(config.tick_interval(), Duration::ZERO);
    }

    #[test]
    fn blank_thread_name_is_invalid() {
        let config = GameConfig {
            loop_thread_name: "  ".to_string(),
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RuntimeError::InvalidArgument(_))
        ));
    }
}
