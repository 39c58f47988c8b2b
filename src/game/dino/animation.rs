// Dino sprite animation: per-state frame table and frame cycling

use glam::IVec2;

use super::state::DinoState;

/// Immutable animation data for one dino state
///
/// `frames` holds x-offsets into the dino's row of the shared sprite sheet
/// (the row's y-offset is 0). `fps` is the rate the external game loop
/// should pace updates at while this state is active; it is advisory and
/// never enforced here.
#[derive(Debug, PartialEq, Eq)]
pub struct FrameSet {
    frames: &'static [i32],
    fps: u32,
}

const WAITING: FrameSet = FrameSet {
    frames: &[44, 0],
    fps: 3,
};
const RUNNING: FrameSet = FrameSet {
    frames: &[88, 132],
    fps: 12,
};
const JUMPING: FrameSet = FrameSet {
    frames: &[0],
    fps: 60,
};
const DUCKING: FrameSet = FrameSet {
    frames: &[262, 321],
    fps: 8,
};
const CRASHED: FrameSet = FrameSet {
    frames: &[220],
    fps: 60,
};

impl FrameSet {
    /// Look up the frame set for a state
    ///
    /// A plain match keyed on the variant tag; every state has a non-empty
    /// sequence by construction.
    pub const fn for_state(state: DinoState) -> &'static FrameSet {
        match state {
            DinoState::Waiting => &WAITING,
            DinoState::Running => &RUNNING,
            DinoState::Jumping => &JUMPING,
            DinoState::Ducking => &DUCKING,
            DinoState::Crashed => &CRASHED,
        }
    }

    /// Number of frames in the sequence
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Sprite-sheet offset of the frame at `index`
    pub fn offset(&self, index: usize) -> IVec2 {
        IVec2::new(self.frames[index], 0)
    }

    /// Advisory frame rate for the external game loop
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// Cycles through the active state's frame sequence, one step per tick
#[derive(Debug)]
pub struct FrameCycler {
    set: &'static FrameSet,
    index: usize,
}

impl FrameCycler {
    /// Start cycling the given state's sequence from its first frame
    pub fn new(state: DinoState) -> Self {
        Self {
            set: FrameSet::for_state(state),
            index: 0,
        }
    }

    /// Swap in a new state's sequence and rewind to frame 0
    pub fn restart(&mut self, state: DinoState) {
        self.set = FrameSet::for_state(state);
        self.index = 0;
    }

    /// Current frame index into the active sequence
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advisory frame rate of the active sequence
    pub fn fps(&self) -> u32 {
        self.set.fps()
    }

    /// Emit the current frame's sheet offset, then step to the next frame
    ///
    /// The index wraps back to 0 after the last frame, so it is always a
    /// valid index into the active sequence.
    pub fn advance(&mut self) -> IVec2 {
        let offset = self.set.offset(self.index);
        self.index = (self.index + 1) % self.set.frame_count();
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_state_has_frames() {
        for state in [
            DinoState::Waiting,
            DinoState::Running,
            DinoState::Jumping,
            DinoState::Ducking,
            DinoState::Crashed,
        ] {
            assert!(
                FrameSet::for_state(state).frame_count() > 0,
                "{state:?} must have at least one frame"
            );
            assert!(FrameSet::for_state(state).fps() > 0);
        }
    }

    #[test]
    fn test_running_frames() {
        let set = FrameSet::for_state(DinoState::Running);
        assert_eq!(set.frame_count(), 2);
        assert_eq!(set.offset(0), IVec2::new(88, 0));
        assert_eq!(set.offset(1), IVec2::new(132, 0));
        assert_eq!(set.fps(), 12);
    }

    #[test]
    fn test_cycler_wraps() {
        let mut cycler = FrameCycler::new(DinoState::Running);
        assert_eq!(cycler.advance(), IVec2::new(88, 0));
        assert_eq!(cycler.advance(), IVec2::new(132, 0));
        assert_eq!(cycler.advance(), IVec2::new(88, 0));
        assert_eq!(cycler.index(), 1);
    }

    #[test]
    fn test_single_frame_sequence_stays_put() {
        let mut cycler = FrameCycler::new(DinoState::Jumping);
        for _ in 0..5 {
            assert_eq!(cycler.advance(), IVec2::new(0, 0));
            assert_eq!(cycler.index(), 0);
        }
    }

    #[test]
    fn test_index_stays_in_range() {
        let mut cycler = FrameCycler::new(DinoState::Ducking);
        let len = FrameSet::for_state(DinoState::Ducking).frame_count();
        for _ in 0..100 {
            assert!(cycler.index() < len);
            cycler.advance();
        }
    }

    #[test]
    fn test_restart_rewinds() {
        let mut cycler = FrameCycler::new(DinoState::Waiting);
        cycler.advance();
        assert_eq!(cycler.index(), 1);
        cycler.restart(DinoState::Ducking);
        assert_eq!(cycler.index(), 0);
        assert_eq!(cycler.advance(), IVec2::new(262, 0));
        assert_eq!(cycler.fps(), 8);
    }
}
