// Dino state machine

use log::debug;

/// Represents the behavioral state of the dino
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DinoState {
    /// Standing at the start screen, before the first jump
    Waiting,
    /// Running along the ground
    Running,
    /// Airborne, following the jump arc
    Jumping,
    /// Running with a lowered, wider profile
    Ducking,
    /// Hit an obstacle; gameplay is over
    Crashed,
}

impl Default for DinoState {
    fn default() -> Self {
        Self::Waiting
    }
}

impl DinoState {
    /// Check if the dino is airborne
    pub fn is_jumping(&self) -> bool {
        matches!(self, Self::Jumping)
    }

    /// Check if the dino is ducking
    pub fn is_ducking(&self) -> bool {
        matches!(self, Self::Ducking)
    }

    /// Check if the dino has crashed
    pub fn is_crashed(&self) -> bool {
        matches!(self, Self::Crashed)
    }
}

/// Guarded state transitions for the dino
///
/// Every transition either passes its guard and returns `true`, or is
/// silently ignored and returns `false`. Callers use the return value to
/// know whether the animation sequence must restart.
#[derive(Debug, Default)]
pub struct DinoStateMachine {
    current: DinoState,
    pre_crash: Option<DinoState>,
}

impl DinoStateMachine {
    pub fn new() -> Self {
        Self {
            current: DinoState::Waiting,
            pre_crash: None,
        }
    }

    /// Get the current state
    pub fn state(&self) -> DinoState {
        self.current
    }

    /// Get the state held immediately before the crash, if one happened
    pub fn pre_crash_state(&self) -> Option<DinoState> {
        self.pre_crash
    }

    /// Begin a jump; legal only from an upright grounded stance
    pub fn start_jump(&mut self) -> bool {
        if !matches!(self.current, DinoState::Waiting | DinoState::Running) {
            return false;
        }
        self.set(DinoState::Jumping)
    }

    /// Begin ducking; legal only while running
    pub fn start_duck(&mut self) -> bool {
        if self.current != DinoState::Running {
            return false;
        }
        self.set(DinoState::Ducking)
    }

    /// Stand back up; legal only while ducking
    pub fn end_duck(&mut self) -> bool {
        if self.current != DinoState::Ducking {
            return false;
        }
        self.set(DinoState::Running)
    }

    /// Crash into an obstacle; legal from every state
    ///
    /// Records the outgoing state so rendering can bias the crashed sprite
    /// when the dino was ducking at the moment of impact.
    pub fn crash(&mut self) -> bool {
        self.pre_crash = Some(self.current);
        self.set(DinoState::Crashed)
    }

    /// Land or restart: force the state back to running
    pub fn set_running(&mut self) -> bool {
        self.set(DinoState::Running)
    }

    fn set(&mut self, new_state: DinoState) -> bool {
        debug!("dino state {:?} -> {:?}", self.current, new_state);
        self.current = new_state;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let sm = DinoStateMachine::new();
        assert_eq!(sm.state(), DinoState::Waiting);
        assert_eq!(sm.pre_crash_state(), None);
    }

    #[test]
    fn test_jump_from_waiting() {
        let mut sm = DinoStateMachine::new();
        assert!(sm.start_jump());
        assert_eq!(sm.state(), DinoState::Jumping);
    }

    #[test]
    fn test_jump_while_jumping_is_ignored() {
        let mut sm = DinoStateMachine::new();
        sm.start_jump();
        assert!(!sm.start_jump());
        assert_eq!(sm.state(), DinoState::Jumping);
    }

    #[test]
    fn test_duck_requires_running() {
        let mut sm = DinoStateMachine::new();
        assert!(!sm.start_duck(), "cannot duck while waiting");
        sm.set_running();
        assert!(sm.start_duck());
        assert_eq!(sm.state(), DinoState::Ducking);
    }

    #[test]
    fn test_jump_while_ducking_is_ignored() {
        let mut sm = DinoStateMachine::new();
        sm.set_running();
        sm.start_duck();
        assert!(!sm.start_jump());
        assert_eq!(sm.state(), DinoState::Ducking);
    }

    #[test]
    fn test_jump_after_crash_is_ignored() {
        let mut sm = DinoStateMachine::new();
        sm.crash();
        assert!(!sm.start_jump());
        assert_eq!(sm.state(), DinoState::Crashed);
    }

    #[test]
    fn test_end_duck_requires_ducking() {
        let mut sm = DinoStateMachine::new();
        sm.set_running();
        assert!(!sm.end_duck());
        sm.start_duck();
        assert!(sm.end_duck());
        assert_eq!(sm.state(), DinoState::Running);
    }

    #[test]
    fn test_crash_records_previous_state() {
        let mut sm = DinoStateMachine::new();
        sm.set_running();
        sm.start_duck();
        sm.crash();
        assert_eq!(sm.state(), DinoState::Crashed);
        assert_eq!(sm.pre_crash_state(), Some(DinoState::Ducking));
    }

    #[test]
    fn test_crash_from_jump() {
        let mut sm = DinoStateMachine::new();
        sm.start_jump();
        sm.crash();
        assert_eq!(sm.pre_crash_state(), Some(DinoState::Jumping));
    }

    #[test]
    fn test_state_helpers() {
        assert!(DinoState::Jumping.is_jumping());
        assert!(DinoState::Ducking.is_ducking());
        assert!(DinoState::Crashed.is_crashed());
        assert!(!DinoState::Running.is_jumping());
    }
}
