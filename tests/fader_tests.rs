// Host-side tests for the photo fader and the heartbeat driver.

use heart_core::constants::{FADE_STEP, HEARTBEAT_MAX, HEARTBEAT_MIN, HEARTBEAT_STEP};
use heart_core::{FadePhase, FadeTick, Heartbeat, HeartbeatParams, PhotoFader};

fn run_fade(f: &mut PhotoFader) -> u32 {
    let mut ticks = 0;
    loop {
        ticks += 1;
        if f.tick() == FadeTick::Complete {
            return ticks;
        }
        assert!(ticks < 1000, "fade never completed");
    }
}

#[test]
fn fade_takes_twenty_ticks_at_default_step() {
    let mut f = PhotoFader::new(4, FADE_STEP);
    assert_eq!(f.opacity(), 0.0);
    assert_eq!(f.ticks_per_fade(), 20);
    assert_eq!(run_fade(&mut f), 20);
    assert_eq!(f.opacity(), 1.0);
    assert_eq!(f.phase(), FadePhase::Hold);
}

#[test]
fn opacity_is_monotonic_and_bounded_within_a_fade() {
    let mut f = PhotoFader::new(4, 0.03);
    let mut prev = f.opacity();
    while f.tick() == FadeTick::Ramping {
        let o = f.opacity();
        assert!(o >= prev);
        assert!((0.0..=1.0).contains(&o));
        prev = o;
    }
    assert_eq!(f.opacity(), 1.0);
}

#[test]
fn advance_resets_opacity_and_wraps_index() {
    let mut f = PhotoFader::new(4, FADE_STEP);
    for n in 1..=9u64 {
        run_fade(&mut f);
        let idx = f.advance();
        assert_eq!(f.opacity(), 0.0);
        assert_eq!(f.phase(), FadePhase::FadeIn);
        assert_eq!(idx as u64, n % 4);
        assert_eq!(f.cycles(), n);
    }
}

#[test]
fn ticks_during_hold_do_not_change_opacity() {
    let mut f = PhotoFader::new(2, FADE_STEP);
    run_fade(&mut f);
    assert_eq!(f.tick(), FadeTick::Complete);
    assert_eq!(f.opacity(), 1.0);
}

#[test]
fn heartbeat_starts_at_rest_and_grows() {
    let mut h = Heartbeat::new(HeartbeatParams::default());
    assert_eq!(h.scale(), HEARTBEAT_MIN);
    assert!(h.is_growing());
    let s = h.tick();
    assert!((s - (HEARTBEAT_MIN + HEARTBEAT_STEP)).abs() < 1e-12);
}

#[test]
fn heartbeat_scale_stays_within_bounds() {
    let mut h = Heartbeat::new(HeartbeatParams::default());
    let mut hit_max = false;
    let mut hit_min_again = false;
    for _ in 0..1000 {
        let s = h.tick();
        assert!((HEARTBEAT_MIN..=HEARTBEAT_MAX).contains(&s), "scale {s}");
        if s == HEARTBEAT_MAX {
            hit_max = true;
        }
        if hit_max && s == HEARTBEAT_MIN {
            hit_min_again = true;
        }
    }
    assert!(hit_max && hit_min_again);
}

#[test]
fn heartbeat_flips_direction_at_each_bound() {
    let mut h = Heartbeat::new(HeartbeatParams {
        step: 0.1,
        min: 1.0,
        max: 1.2,
    });
    h.tick();
    h.tick();
    assert_eq!(h.scale(), 1.2);
    assert!(!h.is_growing());
    h.tick();
    h.tick();
    assert_eq!(h.scale(), 1.0);
    assert!(h.is_growing());
}
