// The player-controlled dino entity
//
// Owns the state machine, jump physics, frame cycling and collision-box
// derivation. An external game loop calls `update`/`update_with` once per
// frame; the renderer reads `sprite_frame` and the collision subsystem
// reads `collision_box`.

use glam::IVec2;

use crate::core::config::GameConfig;
use crate::core::geometry::Rect;

use super::animation::FrameCycler;
use super::state::{DinoState, DinoStateMachine};

/// Standing sprite width in pixels
pub const DINO_WIDTH: i32 = 44;
/// Ducking sprite width in pixels
pub const DINO_WIDTH_DUCK: i32 = 59;
/// Sprite height in pixels
pub const DINO_HEIGHT: i32 = 47;

/// Fixed x position during normal play
const START_X: i32 = 100;

/// Rise-speed cap applied on early jump release
///
/// A fixed tuning value, deliberately independent of the configured launch
/// impulse.
const JUMP_RELEASE_VELOCITY: f64 = -6.0;

/// Source and destination regions for blitting the current sprite frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteFrame {
    /// Region of the shared sprite sheet to copy from
    pub source: Rect,
    /// Screen region to draw into
    pub dest: Rect,
}

/// The dino: a sprite-driven entity with five behavioral states
#[derive(Debug)]
pub struct Dino {
    state_machine: DinoStateMachine,
    frames: FrameCycler,
    pos: IVec2,
    velocity_y: f64,
    sprite_offset: IVec2,
    collision_box: Rect,

    // Captured from GameConfig at construction
    ground_y: i32,
    gravity: f64,
    initial_jump_velocity: f64,
}

impl Dino {
    /// Create a dino waiting at the start screen, standing on the ground
    pub fn new(config: &GameConfig) -> Self {
        let ground_y = config.ground_y(DINO_HEIGHT);
        let state_machine = DinoStateMachine::new();
        let frames = FrameCycler::new(state_machine.state());
        let pos = IVec2::new(START_X, ground_y);
        let mut dino = Self {
            state_machine,
            frames,
            pos,
            velocity_y: 0.0,
            sprite_offset: IVec2::ZERO,
            collision_box: Rect::new(pos.x, pos.y, DINO_WIDTH, DINO_HEIGHT),
            ground_y,
            gravity: config.gravity,
            initial_jump_velocity: config.initial_jump_velocity,
        };
        dino.collision_box = dino.derive_collision_box();
        dino
    }

    /// Advance one tick: physics while airborne, then the frame advance,
    /// then the collision-box recomputation
    pub fn update(&mut self) {
        if self.state().is_jumping() {
            self.step_jump();
        }
        // Runs after the physics step, so a jump that completed this tick
        // already has the Running sequence active for the frame drawn now.
        self.sprite_offset = self.frames.advance();
        self.collision_box = self.derive_collision_box();
    }

    /// Apply the requested transition if its guard holds, then advance one
    /// tick
    pub fn update_with(&mut self, requested: DinoState) {
        match requested {
            DinoState::Jumping => self.start_jump(),
            DinoState::Ducking => self.start_duck(),
            DinoState::Running => self.end_duck(),
            DinoState::Crashed => self.crash(),
            // There is no transition back to the start screen; an external
            // restart constructs a fresh dino instead.
            DinoState::Waiting => {}
        }
        self.update();
    }

    /// Launch a jump; ignored unless standing upright on the ground
    pub fn start_jump(&mut self) {
        if self.state_machine.start_jump() {
            self.velocity_y = self.initial_jump_velocity;
            self.frames.restart(DinoState::Jumping);
        }
    }

    /// Early jump release: cap the remaining rise speed
    ///
    /// Shortens the jump when the player lets go of the button early.
    /// Ignored once the dino is rising slower than the cap or is falling.
    pub fn end_jump(&mut self) {
        if self.velocity_y < JUMP_RELEASE_VELOCITY {
            self.velocity_y = JUMP_RELEASE_VELOCITY;
        }
    }

    /// Drop into a duck; ignored unless currently running
    pub fn start_duck(&mut self) {
        if self.state_machine.start_duck() {
            self.frames.restart(DinoState::Ducking);
        }
    }

    /// Stand back up; ignored unless currently ducking
    pub fn end_duck(&mut self) {
        if self.state_machine.end_duck() {
            self.frames.restart(DinoState::Running);
        }
    }

    /// Put the dino back on the ground, running
    ///
    /// Used for a game restart, and internally when a jump completes.
    pub fn reset(&mut self) {
        self.pos.y = self.ground_y;
        self.velocity_y = 0.0;
        self.state_machine.set_running();
        self.frames.restart(DinoState::Running);
    }

    fn crash(&mut self) {
        if self.state_machine.crash() {
            // A mid-air crash must not keep a stale fall speed around.
            self.velocity_y = 0.0;
            self.frames.restart(DinoState::Crashed);
        }
    }

    /// One tick of jump physics
    ///
    /// Falling past the ground line completes the jump: the position snaps
    /// to the ground and the state is forced back to Running as a side
    /// effect. The compare-and-snap happens every tick, so the dino never
    /// tunnels below the ground regardless of fall speed.
    fn step_jump(&mut self) {
        self.pos.y += self.velocity_y.round() as i32;
        self.velocity_y += self.gravity;

        if self.pos.y > self.ground_y {
            self.reset();
        }
    }

    /// Pure derivation of the collision box from position and state
    fn derive_collision_box(&self) -> Rect {
        let width = if self.state().is_ducking() {
            DINO_WIDTH_DUCK
        } else {
            DINO_WIDTH
        };
        Rect::new(self.pos.x, self.pos.y, width, DINO_HEIGHT)
    }

    /// Current behavioral state
    pub fn state(&self) -> DinoState {
        self.state_machine.state()
    }

    /// State held immediately before the crash, if one happened
    pub fn pre_crash_state(&self) -> Option<DinoState> {
        self.state_machine.pre_crash_state()
    }

    /// Current screen position (top-left of the sprite)
    pub fn position(&self) -> IVec2 {
        self.pos
    }

    /// Vertical velocity in pixels per tick; negative = upward
    pub fn vertical_velocity(&self) -> f64 {
        self.velocity_y
    }

    /// Y coordinate of the running surface
    pub fn ground_y(&self) -> i32 {
        self.ground_y
    }

    /// Current offset into the dino's row of the sprite sheet
    pub fn sprite_offset(&self) -> IVec2 {
        self.sprite_offset
    }

    /// Advisory frame rate of the active animation, for loop pacing
    pub fn frame_rate(&self) -> u32 {
        self.frames.fps()
    }

    /// Collision box for the external collision-detection subsystem
    pub fn collision_box(&self) -> Rect {
        self.collision_box
    }

    /// Compute the sheet source region and screen destination for the
    /// current frame
    ///
    /// `sheet_origin` is where the dino's frame row starts inside the
    /// shared sprite sheet. The crashed-while-ducking sprite sits one
    /// pixel to the right.
    pub fn sprite_frame(&self, sheet_origin: IVec2) -> SpriteFrame {
        let source_width = if self.state().is_ducking() {
            DINO_WIDTH_DUCK
        } else {
            DINO_WIDTH
        };
        let src = sheet_origin + self.sprite_offset;

        let ducked_crash = self.state().is_crashed()
            && self.state_machine.pre_crash_state() == Some(DinoState::Ducking);
        let dest_x = self.pos.x + i32::from(ducked_crash);

        SpriteFrame {
            source: Rect::new(src.x, src.y, source_width, DINO_HEIGHT),
            dest: Rect::new(dest_x, self.pos.y, DINO_WIDTH, DINO_HEIGHT),
        }
    }
}
