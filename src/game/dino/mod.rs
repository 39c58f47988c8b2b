// The dino entity core
//
// This module contains everything that makes the player character tick:
// - Behavioral state machine with guarded transitions
// - Per-state animation frame table and frame cycling
// - Vertical jump physics with a hard ground floor
// - Per-tick collision-box derivation

pub mod animation;
pub mod dino;
pub mod state;

// Re-export commonly used types
pub use animation::{FrameCycler, FrameSet};
pub use dino::{Dino, SpriteFrame, DINO_HEIGHT, DINO_WIDTH, DINO_WIDTH_DUCK};
pub use state::{DinoState, DinoStateMachine};
