//! Sequencing of the whole show.
//!
//! `Idle -> ShowingMessage -> DrawingOutline -> Running`, with `Stopped`
//! reachable from anywhere through [`Director::teardown`]. Every component
//! runs off one [`Scheduler`]; each call to [`Director::advance`] dispatches
//! the jobs that came due and composes at most one frame.

use crate::assets::AssetGate;
use crate::config::ShowConfig;
use crate::error::ShowError;
use crate::fader::{FadeTick, PhotoFader};
use crate::geometry::heart_points;
use crate::heartbeat::Heartbeat;
use crate::ornament::{self, FlowerState, OutlineReveal};
use crate::particles::ParticleField;
use crate::scheduler::{Scheduler, TaskHandle};
use crate::surface::Surface;
use glam::DVec2;
use smallvec::{smallvec, SmallVec};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ShowingMessage,
    DrawingOutline,
    Running,
    Stopped,
}

/// Page-level side effects the host must carry out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cue {
    ShowMessage,
    HideMessage,
    SetBackground(String),
}

pub type Cues = SmallVec<[Cue; 2]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Job {
    MessageElapsed,
    OutlineStep,
    FadeTick,
    HoldElapsed,
    StartHeartbeat,
    HeartbeatTick,
}

#[derive(Default)]
struct Tasks {
    outline: Option<TaskHandle>,
    fade: Option<TaskHandle>,
}

pub struct Director {
    config: ShowConfig,
    center: DVec2,
    points: Vec<DVec2>,
    assets: AssetGate,
    scheduler: Scheduler<Job>,
    tasks: Tasks,
    phase: Phase,
    reveal: OutlineReveal,
    particles: ParticleField,
    flowers: FlowerState,
    fader: PhotoFader,
    heartbeat: Heartbeat,
    heartbeat_running: bool,
    background: Option<String>,
}

impl Director {
    pub fn new(config: ShowConfig) -> Result<Self, ShowError> {
        config.validate()?;
        let center = config.center();
        let points = heart_points(center, config.heart_scale, config.sample_step);
        log::info!(
            "[director] canvas={}x{} points={} images={}",
            config.width,
            config.height,
            points.len(),
            config.image_paths.len()
        );
        Ok(Self {
            center,
            points,
            assets: AssetGate::new(config.image_paths.len()),
            scheduler: Scheduler::new(),
            tasks: Tasks::default(),
            phase: Phase::Idle,
            reveal: OutlineReveal::default(),
            particles: ParticleField::new(config.size(), config.seed),
            flowers: FlowerState::default(),
            fader: PhotoFader::new(config.image_paths.len(), config.fade_step),
            heartbeat: Heartbeat::new(config.heartbeat),
            heartbeat_running: false,
            background: None,
            config,
        })
    }

    pub fn config(&self) -> &ShowConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn assets(&self) -> &AssetGate {
        &self.assets
    }

    pub fn assets_mut(&mut self) -> &mut AssetGate {
        &mut self.assets
    }

    pub fn reveal(&self) -> &OutlineReveal {
        &self.reveal
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn flowers(&self) -> &FlowerState {
        &self.flowers
    }

    pub fn fader(&self) -> &PhotoFader {
        &self.fader
    }

    pub fn heartbeat(&self) -> &Heartbeat {
        &self.heartbeat
    }

    pub fn heartbeat_running(&self) -> bool {
        self.heartbeat_running
    }

    /// Path last pushed through [`Cue::SetBackground`].
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    pub fn elapsed(&self) -> Duration {
        self.scheduler.now()
    }

    /// Start the show. Only valid once, and only after every asset loaded.
    pub fn play(&mut self) -> Result<Cues, ShowError> {
        if self.phase != Phase::Idle {
            return Err(ShowError::AlreadyStarted);
        }
        if let Some(slot) = self.assets.failure() {
            return Err(ShowError::AssetFailed {
                slot,
                path: self.config.image_paths[slot].clone(),
            });
        }
        self.assets.check()?;
        self.phase = Phase::ShowingMessage;
        self.scheduler
            .after(self.config.timings.message, Job::MessageElapsed);
        log::info!("[director] play: showing message");
        Ok(smallvec![Cue::ShowMessage])
    }

    /// Cancel every pending task. The director stays inert afterwards.
    pub fn teardown(&mut self) {
        self.scheduler.cancel_all();
        self.tasks = Tasks::default();
        self.heartbeat_running = false;
        if self.phase != Phase::Stopped {
            log::info!("[director] teardown from {:?}", self.phase);
        }
        self.phase = Phase::Stopped;
    }

    /// Move time forward by `dt`, run whatever came due and, if anything
    /// ran, compose one frame onto `surface`.
    pub fn advance<S: Surface + ?Sized>(&mut self, dt: Duration, surface: &mut S) -> Cues {
        let mut cues = Cues::new();
        self.scheduler.advance_by(dt);
        let mut fired = false;
        while let Some((_, job)) = self.scheduler.pop_due() {
            fired = true;
            self.dispatch(job, &mut cues);
        }
        if fired {
            self.compose(surface);
        }
        cues
    }

    fn dispatch(&mut self, job: Job, cues: &mut Cues) {
        match job {
            Job::MessageElapsed => {
                cues.push(Cue::HideMessage);
                self.particles.spawn(self.config.particle_count);
                self.phase = Phase::DrawingOutline;
                self.tasks.outline = Some(
                    self.scheduler
                        .every(self.config.timings.outline_tick, Job::OutlineStep),
                );
                log::info!("[director] drawing outline");
            }
            Job::OutlineStep => {
                if !self.reveal.step(self.points.len()) {
                    self.finish_outline();
                }
            }
            Job::FadeTick => {
                if self.fader.tick() == FadeTick::Complete {
                    if let Some(h) = self.tasks.fade.take() {
                        self.scheduler.cancel(h);
                    }
                    self.scheduler
                        .after(self.config.timings.fade_hold, Job::HoldElapsed);
                }
            }
            Job::HoldElapsed => {
                let index = self.fader.advance();
                self.flowers.next_color();
                let path = self.config.image_paths[index].clone();
                log::debug!("[director] photo {} -> {}", index, path);
                self.background = Some(path.clone());
                cues.push(Cue::SetBackground(path));
                self.start_fade();
            }
            Job::StartHeartbeat => {
                self.heartbeat_running = true;
                self.scheduler
                    .every(self.config.timings.heartbeat_tick, Job::HeartbeatTick);
                log::info!("[director] heartbeat started");
            }
            Job::HeartbeatTick => {
                self.heartbeat.tick();
            }
        }
    }

    fn finish_outline(&mut self) {
        if let Some(h) = self.tasks.outline.take() {
            self.scheduler.cancel(h);
        }
        self.phase = Phase::Running;
        self.start_fade();
        self.scheduler
            .after(self.config.timings.heartbeat_delay, Job::StartHeartbeat);
        log::info!(
            "[director] outline complete at {:?}, fading photos",
            self.scheduler.now()
        );
    }

    fn start_fade(&mut self) {
        self.tasks.fade = Some(
            self.scheduler
                .every(self.config.timings.fade_tick, Job::FadeTick),
        );
    }

    fn compose<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();
        match self.phase {
            Phase::Idle | Phase::ShowingMessage | Phase::Stopped => {}
            Phase::DrawingOutline => {
                ornament::draw_outline_progress(surface, &self.points, &self.reveal);
            }
            Phase::Running => {
                self.particles.advance_and_render(surface);
                let scale = if self.heartbeat_running {
                    self.heartbeat.scale()
                } else {
                    1.0
                };
                ornament::draw_heart_outline(surface, &self.points, self.center, scale);
                ornament::draw_flowers(surface, self.center, &mut self.flowers);
                ornament::draw_caption(surface, self.center, &self.config.caption);
                surface.draw_image_centered(self.fader.index(), self.center, self.fader.opacity());
            }
        }
    }
}
