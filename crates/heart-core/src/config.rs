//! Show configuration.
//!
//! `ShowConfig::default()` reproduces the stock page; the web front-end only
//! overrides the canvas size, image list and caption it finds in the DOM.

use crate::constants::*;
use crate::error::ShowError;
use glam::DVec2;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct Timings {
    /// How long the message overlay stays up after play.
    pub message: Duration,
    pub outline_tick: Duration,
    pub fade_tick: Duration,
    pub fade_hold: Duration,
    pub heartbeat_tick: Duration,
    /// Delay between outline completion and the first heartbeat.
    pub heartbeat_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            message: Duration::from_millis(MESSAGE_MS),
            outline_tick: Duration::from_millis(OUTLINE_TICK_MS),
            fade_tick: Duration::from_millis(FADE_TICK_MS),
            fade_hold: Duration::from_millis(FADE_HOLD_MS),
            heartbeat_tick: Duration::from_millis(HEARTBEAT_TICK_MS),
            heartbeat_delay: Duration::from_millis(HEARTBEAT_DELAY_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartbeatParams {
    pub step: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for HeartbeatParams {
    fn default() -> Self {
        Self {
            step: HEARTBEAT_STEP,
            min: HEARTBEAT_MIN,
            max: HEARTBEAT_MAX,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShowConfig {
    pub width: f64,
    pub height: f64,
    pub heart_scale: f64,
    pub sample_step: f64,
    pub particle_count: usize,
    pub image_paths: Vec<String>,
    pub caption: String,
    pub fade_step: f64,
    pub heartbeat: HeartbeatParams,
    pub timings: Timings,
    pub seed: u64,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            heart_scale: HEART_SCALE,
            sample_step: HEART_SAMPLE_STEP,
            particle_count: SNOW_COUNT,
            image_paths: DEFAULT_IMAGE_PATHS.iter().map(|p| p.to_string()).collect(),
            caption: DEFAULT_CAPTION.to_string(),
            fade_step: FADE_STEP,
            heartbeat: HeartbeatParams::default(),
            timings: Timings::default(),
            seed: DEFAULT_SEED,
        }
    }
}

impl ShowConfig {
    pub fn with_canvas_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_image_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.image_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    pub fn validate(&self) -> Result<(), ShowError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ShowError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        for step in [self.sample_step, self.fade_step, self.heartbeat.step] {
            if !(step.is_finite() && step > 0.0) {
                return Err(ShowError::InvalidStep(step));
            }
        }
        let count = (std::f64::consts::TAU / self.sample_step).ceil();
        if count > MAX_HEART_SAMPLES as f64 {
            return Err(ShowError::TooManySamples {
                step: self.sample_step,
                count,
                max: MAX_HEART_SAMPLES,
            });
        }
        let HeartbeatParams { min, max, .. } = self.heartbeat;
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(ShowError::InvalidHeartbeatRange { min, max });
        }
        if self.image_paths.is_empty() {
            return Err(ShowError::NoImages);
        }
        Ok(())
    }
}
