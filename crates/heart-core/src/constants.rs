//! Tuning constants for the show.
//!
//! Distances are canvas pixels, angles radians, durations milliseconds.

// Canvas
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

// Heart curve
pub const HEART_SCALE: f64 = 10.0; // curve units -> pixels
pub const HEART_SAMPLE_STEP: f64 = 0.01; // parameter step over [0, 2π)
pub const MAX_HEART_SAMPLES: usize = 100_000;
pub const OUTLINE_COLOR: &str = "#EB3678";
pub const OUTLINE_WIDTH: f64 = 3.0;
pub const REVEAL_COLOR: &str = "#d32f2f"; // incremental first draw
pub const REVEAL_WIDTH: f64 = 2.0;

// Snowfall
pub const SNOW_COUNT: usize = 100;
pub const SNOW_COLOR: &str = "rgba(255, 255, 255, 0.8)";
pub const SNOW_DRIFT_X: f64 = 0.25; // horizontal speed in [-drift, drift)
pub const SNOW_SPEED_Y_MIN: f64 = 1.0;
pub const SNOW_SPEED_Y_MAX: f64 = 2.5;
pub const SNOW_SIZE_MIN: f64 = 1.0;
pub const SNOW_SIZE_MAX: f64 = 4.0;

// Flowers
pub const FLOWER_COUNT: usize = 5;
pub const FLOWER_X_OFFSET: f64 = -50.0; // first flower, relative to heart center
pub const FLOWER_SPACING: f64 = 25.0;
pub const FLOWER_Y_OFFSET: f64 = -150.0;
pub const FLOWER_CENTER_RADIUS: f64 = 10.0;
pub const PETAL_COUNT: usize = 5;
pub const PETAL_DISTANCE: f64 = 15.0;
pub const PETAL_RADIUS: f64 = 5.0;
pub const FLOWER_SPIN_PER_DRAW: f64 = 0.02;
pub const FLOWER_PALETTE: [&str; 4] = [
    "#FF0000", // red
    "#FF7F7F", // light red
    "#FFFFFF", // white
    "#FFFF00", // yellow
];

// Caption
pub const DEFAULT_CAPTION: &str = "Adrian";
pub const CAPTION_FONT: &str = "400 40px 'Courier New', Courier, monospace";
pub const CAPTION_COLOR: &str = "white";

// Photo fade
pub const DEFAULT_IMAGE_PATHS: [&str; 4] = ["JSA1.png", "JSA2.png", "JSA3.png", "JSA4.png"];
pub const FADE_STEP: f64 = 0.05; // opacity added per fade tick

// Heartbeat
pub const HEARTBEAT_STEP: f64 = 0.02;
pub const HEARTBEAT_MIN: f64 = 1.0;
pub const HEARTBEAT_MAX: f64 = 1.2;

// Timings (ms)
pub const MESSAGE_MS: u64 = 3000;
pub const OUTLINE_TICK_MS: u64 = 20;
pub const FADE_TICK_MS: u64 = 50;
pub const FADE_HOLD_MS: u64 = 1000;
pub const HEARTBEAT_TICK_MS: u64 = 100;
pub const HEARTBEAT_DELAY_MS: u64 = 500; // after the outline completes

pub const DEFAULT_SEED: u64 = 42;
