// Game configuration - world dimensions and jump physics tuning

/// Fixed world/physics configuration shared by the whole game
///
/// All values are in screen pixels and pixels-per-tick; the update rate is
/// owned by the external game loop, so nothing here is expressed in seconds.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Playfield width in pixels
    pub screen_width: i32,
    /// Playfield height in pixels
    pub screen_height: i32,
    /// Gap between the running surface and the bottom of the playfield
    pub bottom_pad: i32,
    /// Downward acceleration applied each tick while airborne
    pub gravity: f64,
    /// Launch impulse for a jump (negative = upward)
    pub initial_jump_velocity: f64,
}

/// The standard runner configuration
pub const STANDARD_CONFIG: GameConfig = GameConfig {
    screen_width: 600,
    screen_height: 150,
    bottom_pad: 10,
    gravity: 0.6,
    initial_jump_velocity: -10.0,
};

impl Default for GameConfig {
    fn default() -> Self {
        STANDARD_CONFIG
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("screen dimensions must be positive, got {width}x{height}")]
    InvalidScreen { width: i32, height: i32 },

    #[error("gravity must be positive (downward), got {0}")]
    InvalidGravity(f64),

    #[error("initial jump velocity must be negative (upward), got {0}")]
    InvalidJumpVelocity(f64),

    #[error("bottom padding {pad} does not fit in screen height {height}")]
    InvalidBottomPad { pad: i32, height: i32 },
}

impl GameConfig {
    /// Get the standard configuration
    pub fn standard() -> Self {
        STANDARD_CONFIG
    }

    /// Check that the configuration describes a playable world
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(ConfigError::InvalidScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if self.gravity <= 0.0 {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        if self.initial_jump_velocity >= 0.0 {
            return Err(ConfigError::InvalidJumpVelocity(self.initial_jump_velocity));
        }
        if self.bottom_pad < 0 || self.bottom_pad >= self.screen_height {
            return Err(ConfigError::InvalidBottomPad {
                pad: self.bottom_pad,
                height: self.screen_height,
            });
        }
        Ok(())
    }

    /// Y coordinate of the running surface for an entity of the given height
    pub fn ground_y(&self, entity_height: i32) -> i32 {
        self.screen_height - entity_height - self.bottom_pad
    }
}
