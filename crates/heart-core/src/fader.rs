//! Photo fade cycle: ramp opacity 0 -> 1, hold, advance to the next image.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadePhase {
    FadeIn,
    Hold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeTick {
    Ramping,
    /// Opacity reached 1; the caller should start the hold.
    Complete,
}

#[derive(Clone, Debug)]
pub struct PhotoFader {
    count: usize,
    index: usize,
    steps: u32,
    steps_to_full: u32,
    step: f64,
    phase: FadePhase,
    cycles: u64,
}

impl PhotoFader {
    pub fn new(count: usize, step: f64) -> Self {
        Self {
            count: count.max(1),
            index: 0,
            steps: 0,
            steps_to_full: ((1.0 / step).ceil() as u32).max(1),
            step,
            phase: FadePhase::FadeIn,
            cycles: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    /// Completed fade cycles.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn ticks_per_fade(&self) -> u32 {
        self.steps_to_full
    }

    pub fn opacity(&self) -> f64 {
        (self.steps as f64 * self.step).clamp(0.0, 1.0)
    }

    pub fn tick(&mut self) -> FadeTick {
        if self.phase == FadePhase::Hold {
            return FadeTick::Complete;
        }
        self.steps += 1;
        if self.steps >= self.steps_to_full {
            self.phase = FadePhase::Hold;
            FadeTick::Complete
        } else {
            FadeTick::Ramping
        }
    }

    /// Move to the next image (wrapping) and restart the ramp from 0.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.count;
        self.steps = 0;
        self.phase = FadePhase::FadeIn;
        self.cycles += 1;
        self.index
    }
}
