// Page wiring constants and small pure helpers used by the web frontend.

use std::time::Duration;

// Element ids expected in index.html
pub const CANVAS_ID: &str = "heartCanvas";
pub const PLAY_BUTTON_ID: &str = "playButton";
pub const MESSAGE_ID: &str = "catMessage";
pub const AUDIO_ID: &str = "backgroundMusic";

// Optional canvas attributes overriding the stock show
pub const IMAGES_ATTR: &str = "data-images"; // comma-separated paths
pub const CAPTION_ATTR: &str = "data-caption";

// Image shown inside the message overlay; preloaded so it pops in instantly
pub const MESSAGE_IMAGE: &str = "cat.png";

// Page background styling applied on every photo change
pub const BACKGROUND_SIZE: &str = "cover";
pub const BACKGROUND_POSITION: &str = "center";

// Longest wall-clock step fed to the director per frame. A tab coming back
// from the background resumes instead of replaying minutes of ticks.
pub const MAX_FRAME_STEP: Duration = Duration::from_millis(250);

/// `pagehide` with `persisted == true` means the page is going into the
/// back/forward cache and may come back; only a real unload tears down.
#[inline]
pub fn should_teardown_on_pagehide(persisted: bool) -> bool {
    !persisted
}

#[inline]
pub fn clamp_frame_step(dt: Duration) -> Duration {
    dt.min(MAX_FRAME_STEP)
}

/// Split a `data-images` value into trimmed, non-empty paths.
pub fn parse_image_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[inline]
pub fn background_url(path: &str) -> String {
    format!("url({})", path)
}
