// Host-side tests for easing, timelines and the two scripted animations.

mod common;

use common::eye::animations::{self, Channel};
use common::eye::config::VizConfig;
use common::eye::constants::*;
use common::eye::easing::Ease;
use common::eye::interaction::Viewport;
use common::eye::settings::{controls, SHRINK_CONTROL_ID};
use common::eye::timeline::{Playback, Timeline};
use common::eye::viz::Visualization;
use common::run_ticks;

const ALL_EASES: [Ease; 6] = [
    Ease::Linear,
    Ease::Power1Out,
    Ease::Power2Out,
    Ease::Power2InOut,
    Ease::Power3Out,
    Ease::Power4Out,
];

fn make_viz() -> Visualization {
    Visualization::new(VizConfig::default(), Viewport::new(1280.0, 720.0))
}

#[test]
fn eases_hit_both_endpoints_and_clamp() {
    for ease in ALL_EASES {
        assert_eq!(ease.evaluate(0.0), 0.0, "{ease:?} at 0");
        assert_eq!(ease.evaluate(1.0), 1.0, "{ease:?} at 1");
        assert_eq!(ease.evaluate(-3.0), 0.0, "{ease:?} below range");
        assert_eq!(ease.evaluate(7.0), 1.0, "{ease:?} above range");
    }
}

#[test]
fn eases_are_monotone() {
    for ease in ALL_EASES {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease.evaluate(i as f32 / 100.0);
            assert!(v >= prev, "{ease:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn out_eases_lead_linear_progress() {
    assert!(Ease::Power4Out.evaluate(0.25) > Ease::Power1Out.evaluate(0.25));
    assert!(Ease::Power1Out.evaluate(0.25) > Ease::Linear.evaluate(0.25));
    assert!((Ease::Power2InOut.evaluate(0.5) - 0.5).abs() < 1e-6);
    assert!(Ease::Power2InOut.evaluate(0.25) < 0.25);
}

#[test]
fn then_appends_segments_back_to_back() {
    let tl: Timeline<u8> = Timeline::new()
        .then(0, 1.0, 0.0, 1.0, Ease::Linear)
        .then(0, 2.0, 1.0, 0.0, Ease::Linear);
    let segs = tl.segments();
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[1].start, 1.0);
    assert_eq!(tl.duration(), 3.0);
}

#[test]
fn paused_timeline_writes_nothing() {
    let mut tl: Timeline<u8> = Timeline::new().then(0, 1.0, 0.0, 1.0, Ease::Linear);
    let mut writes = 0;
    assert!(!tl.advance(0.5, |_, _| writes += 1));
    assert_eq!(writes, 0);
    assert_eq!(tl.state(), Playback::Paused);
    assert_eq!(tl.current_segment(), None);
}

#[test]
fn timeline_finishes_and_stops_writing() {
    let mut tl: Timeline<u8> = Timeline::new().then(0, 1.0, 0.0, 10.0, Ease::Linear);
    tl.play_from_start();
    let mut last = f32::NAN;
    assert!(tl.advance(0.4, |_, v| last = v));
    assert!((last - 4.0).abs() < 1e-5);
    assert!(tl.advance(5.0, |_, v| last = v));
    assert_eq!(last, 10.0);
    assert_eq!(tl.state(), Playback::Finished);
    assert_eq!(tl.elapsed(), 1.0);
    assert!(!tl.advance(0.1, |_, v| last = v));
}

#[test]
fn later_segment_wins_on_shared_channel() {
    let mut tl: Timeline<u8> = Timeline::new()
        .then(0, 1.0, 0.0, 1.0, Ease::Linear)
        .then(0, 1.0, 5.0, 6.0, Ease::Linear);
    tl.play_from_start();
    let mut value = 0.0;
    tl.advance(1.5, |_, v| value = v);
    assert!((value - 5.5).abs() < 1e-5);
    assert_eq!(tl.current_segment(), Some(1));
}

#[test]
fn shrink_pulse_plays_in_under_two_seconds() {
    let pulse = animations::shrink_pulse(0.0);
    assert_eq!(pulse.duration(), SHRINK_CONTRACT_SEC + SHRINK_RELAX_SEC);
    assert!((pulse.wall_duration() - 1.75).abs() < 1e-6);
    assert!(pulse.segments().iter().all(|s| s.channel == Channel::Shrink));
}

#[test]
fn entrance_poses_first_frame_before_playing() {
    let viz = make_viz();
    assert_eq!(viz.scene.group.position.y, ENTRANCE_START_Y);
    assert_eq!(viz.scene.group.rotation.z, ENTRANCE_START_ROT_Z);
    assert_eq!(viz.scene.shadow.scale.x, ENTRANCE_START_SHADOW_SCALE_X);
    assert_eq!(viz.entrance().state(), Playback::Paused);
}

#[test]
fn entrance_settles_at_rest_pose() {
    let mut viz = make_viz();
    viz.start_entrance();
    run_ticks(&mut viz, 130, 1.0 / 60.0);
    assert_eq!(viz.entrance().state(), Playback::Finished);
    assert_eq!(viz.scene.group.position.y, 0.0);
    assert_eq!(viz.scene.group.rotation.z, 0.0);
    assert_eq!(viz.scene.shadow.scale.x, 1.0);
}

#[test]
fn entrance_group_only_falls() {
    let mut viz = make_viz();
    viz.start_entrance();
    let mut prev = viz.scene.group.position.y;
    for _ in 0..150 {
        viz.tick(1.0 / 60.0);
        let y = viz.scene.group.position.y;
        assert!(y <= prev);
        prev = y;
    }
}

#[test]
fn click_pulse_reaches_minimum_then_relaxes_to_zero() {
    let mut viz = make_viz();
    viz.on_click();
    let mut min = f32::MAX;
    let mut any_animated = false;
    for _ in 0..240 {
        let update = viz.tick(1.0 / 120.0);
        any_animated |= update.shrink_animated;
        min = min.min(viz.params.shrink);
        assert!(viz.params.shrink >= SHRINK_PULSE_MIN - 1e-6);
    }
    assert!(any_animated);
    assert!((min - SHRINK_PULSE_MIN).abs() < 1e-3);
    assert_eq!(viz.params.shrink, 0.0);
    assert_eq!(viz.shrink_pulse().state(), Playback::Finished);
}

#[test]
fn click_pulse_reports_nothing_once_finished() {
    let mut viz = make_viz();
    viz.on_click();
    run_ticks(&mut viz, 40, 0.05);
    assert!(!viz.tick(0.05).shrink_animated);
}

#[test]
fn click_mid_pulse_restarts_from_first_segment() {
    let mut viz = make_viz();
    viz.on_click();
    run_ticks(&mut viz, 12, 0.05);
    assert_eq!(viz.shrink_pulse().current_segment(), Some(1));

    viz.on_click();
    let pulse = viz.shrink_pulse();
    assert_eq!(pulse.elapsed(), 0.0);
    assert!(pulse.is_playing());
    assert_eq!(pulse.current_segment(), Some(0));

    // only one pulse runs: it ends 1.75s after the second click
    run_ticks(&mut viz, 34, 0.05);
    assert!(viz.shrink_pulse().is_playing());
    run_ticks(&mut viz, 2, 0.05);
    assert_eq!(viz.shrink_pulse().state(), Playback::Finished);
}

fn set_shrink_slider(viz: &mut Visualization, raw: &str) {
    let shrink = controls()
        .into_iter()
        .find(|b| b.id == SHRINK_CONTROL_ID)
        .expect("shrink control");
    shrink.apply_input(&mut viz.params, raw).unwrap();
}

#[test]
fn first_click_contracts_from_slider_value() {
    let mut viz = make_viz();
    set_shrink_slider(&mut viz, "0.3");

    viz.on_click();
    viz.tick(0.0);
    assert_eq!(viz.params.shrink, 0.3);

    viz.tick(1.0 / 60.0);
    let shrink = viz.params.shrink;
    assert!(shrink < 0.3 && shrink > 0.0, "jumped to {shrink}");

    run_ticks(&mut viz, 120, 1.0 / 60.0);
    assert_eq!(viz.params.shrink, 0.0);
}

#[test]
fn restart_replays_recorded_start_value() {
    let mut viz = make_viz();
    set_shrink_slider(&mut viz, "0.2");
    viz.on_click();
    run_ticks(&mut viz, 120, 1.0 / 60.0);
    assert_eq!(viz.shrink_pulse().state(), Playback::Finished);

    set_shrink_slider(&mut viz, "-0.5");
    viz.on_click();
    viz.tick(0.0);
    assert_eq!(viz.params.shrink, 0.2);
}
