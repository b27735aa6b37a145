// Host-side tests for show sequencing, frame composition and teardown.

use heart_core::constants::*;
use heart_core::{
    Cue, Director, DrawOp, FadePhase, Phase, RecordingSurface, ShowConfig, ShowError,
};
use std::time::Duration;

const PATHS: [&str; 4] = ["a.png", "b.png", "c.png", "d.png"];
const STEP: Duration = Duration::from_millis(10);

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn config() -> ShowConfig {
    ShowConfig::default().with_image_paths(PATHS)
}

fn ready_director() -> Director {
    let mut d = Director::new(config()).expect("valid config");
    for slot in 0..PATHS.len() {
        d.assets_mut().record_loaded(slot);
    }
    d
}

fn surface() -> RecordingSurface {
    RecordingSurface::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
}

/// Step the director in 10 ms increments until `done` holds.
fn run_until(
    d: &mut Director,
    s: &mut RecordingSurface,
    mut done: impl FnMut(&Director) -> bool,
) -> Vec<Cue> {
    let mut cues = Vec::new();
    for _ in 0..1_000_000 {
        if done(d) {
            return cues;
        }
        cues.extend(d.advance(STEP, s));
    }
    panic!("condition never reached");
}

fn run_for(d: &mut Director, s: &mut RecordingSurface, total: Duration) -> Vec<Cue> {
    let end = d.elapsed() + total;
    run_until(d, s, |d| d.elapsed() >= end)
}

fn outline_end() -> u64 {
    // message, then one tick per segment plus the tick that notices completion
    let points = heart_core::geometry::sample_count(HEART_SAMPLE_STEP) as u64;
    MESSAGE_MS + points * OUTLINE_TICK_MS
}

#[test]
fn play_is_gated_on_assets() {
    let mut d = Director::new(config()).expect("valid config");
    assert_eq!(d.config().image_paths, PATHS);
    assert_eq!(d.assets().expected(), PATHS.len());
    assert_eq!(
        d.play(),
        Err(ShowError::AssetsPending {
            loaded: 0,
            expected: 4
        })
    );
    d.assets_mut().record_loaded(0);
    d.assets_mut().record_loaded(1);
    d.assets_mut().record_loaded(2);
    assert!(matches!(d.play(), Err(ShowError::AssetsPending { loaded: 3, .. })));
    assert_eq!(d.phase(), Phase::Idle);
    assert!(d.assets_mut().record_loaded(3));
    assert!(d.play().is_ok());
}

#[test]
fn failed_asset_keeps_play_disabled() {
    let mut d = Director::new(config()).expect("valid config");
    d.assets_mut().record_loaded(0);
    d.assets_mut().record_failed(1);
    for slot in 1..4 {
        d.assets_mut().record_loaded(slot);
    }
    assert!(!d.assets().is_ready());
    assert_eq!(d.assets().failure(), Some(1));
    assert_eq!(
        d.play(),
        Err(ShowError::AssetFailed {
            slot: 1,
            path: "b.png".into()
        })
    );
}

#[test]
fn play_only_once() {
    let mut d = ready_director();
    let cues = d.play().expect("play");
    assert_eq!(cues.as_slice(), &[Cue::ShowMessage]);
    assert_eq!(d.phase(), Phase::ShowingMessage);
    assert_eq!(d.play(), Err(ShowError::AlreadyStarted));
}

#[test]
fn idle_director_draws_nothing() {
    let mut d = ready_director();
    let mut s = surface();
    for _ in 0..100 {
        assert!(d.advance(STEP, &mut s).is_empty());
    }
    assert!(s.ops.is_empty());
}

#[test]
fn message_then_outline_reveal() {
    let mut d = ready_director();
    let mut s = surface();
    d.play().expect("play");

    let cues = run_for(&mut d, &mut s, ms(MESSAGE_MS - 10));
    assert!(cues.is_empty());
    assert_eq!(d.phase(), Phase::ShowingMessage);

    let cues = run_for(&mut d, &mut s, ms(10));
    assert_eq!(cues, vec![Cue::HideMessage]);
    assert_eq!(d.phase(), Phase::DrawingOutline);
    assert_eq!(d.particles().len(), SNOW_COUNT);

    run_for(&mut d, &mut s, ms(OUTLINE_TICK_MS * 10));
    assert_eq!(d.reveal().cursor(), 10);
    match s.last_frame() {
        [DrawOp::Polyline { points, color, .. }] => {
            assert_eq!(points.len(), 11);
            assert_eq!(color, REVEAL_COLOR);
        }
        other => panic!("unexpected frame {other:?}"),
    }
}

#[test]
fn outline_completion_starts_fader_then_heartbeat() {
    let mut d = ready_director();
    let mut s = surface();
    d.play().expect("play");
    run_until(&mut d, &mut s, |d| d.phase() == Phase::Running);
    assert_eq!(d.elapsed(), ms(outline_end()));
    assert_eq!(d.reveal().cursor(), d.points().len() - 1);
    assert!(!d.heartbeat_running());

    run_for(&mut d, &mut s, ms(HEARTBEAT_DELAY_MS - 10));
    assert!(!d.heartbeat_running());
    run_for(&mut d, &mut s, ms(10));
    assert!(d.heartbeat_running());
}

#[test]
fn one_fade_cycle_advances_to_second_photo() {
    let mut d = ready_director();
    let mut s = surface();
    d.play().expect("play");
    run_until(&mut d, &mut s, |d| d.phase() == Phase::Running);

    // 20 ticks of 50 ms, then the 1 s hold
    let cycle = FADE_TICK_MS * 20 + FADE_HOLD_MS;
    let cues = run_for(&mut d, &mut s, ms(cycle - 10));
    assert_eq!(d.fader().index(), 0);
    assert_eq!(d.fader().phase(), FadePhase::Hold);
    assert_eq!(d.fader().opacity(), 1.0);
    assert!(cues.is_empty());

    let cues = run_for(&mut d, &mut s, ms(10));
    assert_eq!(d.fader().index(), 1);
    assert_eq!(d.fader().opacity(), 0.0);
    assert_eq!(d.background(), Some(PATHS[1]));
    assert_eq!(cues, vec![Cue::SetBackground(PATHS[1].to_string())]);
    assert_eq!(d.flowers().color_index, 1);
}

#[test]
fn photo_index_follows_completed_cycles_modulo_count() {
    let mut d = ready_director();
    let mut s = surface();
    d.play().expect("play");
    run_until(&mut d, &mut s, |d| d.phase() == Phase::Running);
    let cycle = FADE_TICK_MS * 20 + FADE_HOLD_MS;
    let cues = run_for(&mut d, &mut s, ms(cycle * 6));
    assert_eq!(d.fader().cycles(), 6);
    assert_eq!(d.fader().index(), 6 % PATHS.len());
    let backgrounds: Vec<_> = cues
        .into_iter()
        .filter_map(|c| match c {
            Cue::SetBackground(p) => Some(p),
            _ => None,
        })
        .collect();
    assert_eq!(backgrounds, vec!["b.png", "c.png", "d.png", "a.png", "b.png", "c.png"]);
}

#[test]
fn running_frame_layers_everything_once() {
    let mut d = ready_director();
    let mut s = surface();
    d.play().expect("play");
    run_until(&mut d, &mut s, |d| d.phase() == Phase::Running);
    run_for(&mut d, &mut s, ms(1000));

    let frame = s.last_frame();
    let circles = frame
        .iter()
        .filter(|op| matches!(op, DrawOp::Circle { .. }))
        .count();
    assert_eq!(circles, SNOW_COUNT + FLOWER_COUNT * (1 + PETAL_COUNT));
    let outlines: Vec<_> = frame
        .iter()
        .filter_map(|op| match op {
            DrawOp::Polyline { color, .. } => Some(color.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(outlines, vec![OUTLINE_COLOR]);
    assert!(frame
        .iter()
        .any(|op| matches!(op, DrawOp::Text { text, .. } if text == DEFAULT_CAPTION)));
    match frame.last() {
        Some(DrawOp::Image { slot, alpha, .. }) => {
            assert_eq!(*slot, d.fader().index());
            assert_eq!(*alpha, d.fader().opacity());
        }
        other => panic!("photo should be the top layer, got {other:?}"),
    }
}

#[test]
fn one_clear_per_advance_even_when_many_jobs_fire() {
    let mut d = ready_director();
    let mut s = surface();
    d.play().expect("play");
    run_until(&mut d, &mut s, |d| d.heartbeat_running());
    s.take_ops();
    // fade + heartbeat ticks both fall inside this step
    d.advance(ms(250), &mut s);
    assert_eq!(s.clear_count(), 1);
}

#[test]
fn heartbeat_pulses_outline_within_bounds() {
    let mut d = ready_director();
    let mut s = surface();
    d.play().expect("play");
    run_until(&mut d, &mut s, |d| d.heartbeat_running());
    let mut max_seen: f64 = 0.0;
    for _ in 0..500 {
        d.advance(STEP, &mut s);
        let scale = d.heartbeat().scale();
        assert!((HEARTBEAT_MIN..=HEARTBEAT_MAX).contains(&scale));
        max_seen = max_seen.max(scale);
    }
    assert_eq!(max_seen, HEARTBEAT_MAX);
    assert_eq!(d.particles().len(), SNOW_COUNT);
}

#[test]
fn missing_photo_is_skipped_silently() {
    let mut d = ready_director();
    let mut s = surface().with_loaded_images(vec![false, true, true, true]);
    d.play().expect("play");
    run_until(&mut d, &mut s, |d| d.phase() == Phase::Running);
    run_for(&mut d, &mut s, ms(500));
    assert!(!s.last_frame().iter().any(|op| matches!(op, DrawOp::Image { .. })));
    assert!(s.last_frame().iter().any(|op| matches!(op, DrawOp::Text { .. })));
}

#[test]
fn teardown_stops_all_tasks() {
    let mut d = ready_director();
    let mut s = surface();
    d.play().expect("play");
    run_until(&mut d, &mut s, |d| d.heartbeat_running());
    d.teardown();
    assert_eq!(d.phase(), Phase::Stopped);
    s.take_ops();
    let index = d.fader().index();
    for _ in 0..1000 {
        assert!(d.advance(STEP, &mut s).is_empty());
    }
    assert!(s.ops.is_empty());
    assert_eq!(d.fader().index(), index);
    assert_eq!(d.play(), Err(ShowError::AlreadyStarted));
}

#[test]
fn invalid_config_is_rejected() {
    let no_images = ShowConfig::default().with_image_paths(Vec::<String>::new());
    assert_eq!(Director::new(no_images).err(), Some(ShowError::NoImages));

    let mut bad_step = ShowConfig::default();
    bad_step.sample_step = 0.0;
    assert_eq!(Director::new(bad_step).err(), Some(ShowError::InvalidStep(0.0)));

    let flat = ShowConfig::default().with_canvas_size(0.0, 600.0);
    assert!(matches!(
        Director::new(flat).err(),
        Some(ShowError::InvalidCanvas { .. })
    ));

    let mut tiny_step = ShowConfig::default();
    tiny_step.sample_step = 1e-12;
    assert!(matches!(
        Director::new(tiny_step).err(),
        Some(ShowError::TooManySamples { max: MAX_HEART_SAMPLES, .. })
    ));

    let mut inverted = ShowConfig::default();
    inverted.heartbeat.min = 1.2;
    inverted.heartbeat.max = 1.0;
    assert_eq!(
        Director::new(inverted).err(),
        Some(ShowError::InvalidHeartbeatRange { min: 1.2, max: 1.0 })
    );

    let mut flat_beat = ShowConfig::default();
    flat_beat.heartbeat.max = flat_beat.heartbeat.min;
    assert!(matches!(
        Director::new(flat_beat).err(),
        Some(ShowError::InvalidHeartbeatRange { .. })
    ));
}
