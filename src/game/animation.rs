use rand::Rng;
use crate::game_data::canvas::Canvas;
use crate::game_data::particle::particle_field::{FrameStats, ParticleField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

/// The frame chain driving a [`ParticleField`].
///
/// The host calls [`tick`](Self::tick) from its animation-frame callback and
/// only asks for another frame when a frame was actually rendered, so a
/// stopped loop schedules nothing further. Tests drive it one frame at a time.
#[derive(Debug)]
pub struct AnimationLoop {
    state: LoopState,
    frames: u64,
}

impl AnimationLoop {
    pub fn new() -> Self {
        Self { state: LoopState::Stopped, frames: 0 }
    }

    /// Returns `true` if the loop was stopped, i.e. the caller has to
    /// schedule the first frame of the new chain.
    pub fn start(&mut self) -> bool {
        let was_stopped = self.state == LoopState::Stopped;
        if was_stopped {
            log::info!("Animation started");
        }
        self.state = LoopState::Running;
        was_stopped
    }

    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            log::info!("Animation stopped after {} frames", self.frames);
        }
        self.state = LoopState::Stopped;
    }

    /// Starts a stopped loop and stops a running one. Returns the new state.
    pub fn toggle(&mut self) -> LoopState {
        match self.state {
            LoopState::Running => self.stop(),
            LoopState::Stopped => { self.start(); }
        }
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Number of frames rendered since creation.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Renders one frame if the loop is running. `None` means nothing was
    /// drawn and no further frame should be requested.
    pub fn tick<C: Canvas, R: Rng>(&mut self, field: &mut ParticleField<C, R>) -> Option<FrameStats> {
        if !self.is_running() {
            return None;
        }
        let stats = field.render_frame();
        self.frames += 1;
        Some(stats)
    }
}

impl Default for AnimationLoop {
    fn default() -> Self {
        Self::new()
    }
}
