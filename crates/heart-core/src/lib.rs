//! Platform-free animation logic for the heart show.
//!
//! Nothing in this crate touches the DOM. Drawing goes through the
//! [`Surface`] trait and time is fed in explicitly through
//! [`Director::advance`], so the whole show can be stepped headless.

pub mod assets;
pub mod config;
pub mod constants;
pub mod director;
pub mod error;
pub mod fader;
pub mod geometry;
pub mod heartbeat;
pub mod ornament;
pub mod particles;
pub mod scheduler;
pub mod surface;

pub use assets::AssetGate;
pub use config::{HeartbeatParams, ShowConfig, Timings};
pub use director::{Cue, Cues, Director, Phase};
pub use error::ShowError;
pub use fader::{FadePhase, FadeTick, PhotoFader};
pub use geometry::{heart_points, scale_about};
pub use heartbeat::Heartbeat;
pub use ornament::{FlowerState, OutlineReveal};
pub use particles::{Particle, ParticleField};
pub use scheduler::{Scheduler, TaskHandle};
pub use surface::{DrawOp, RecordingSurface, Surface, TextStyle};
