use approx::assert_abs_diff_eq;
use motionplay_core::{
    compute_extent, compute_transform, normalize, to_chart_rows, Config, Frame, MotionKind,
    MotionPlayer, PlayerStatus, RawResult, Timeline, TimelineState,
};
use serde_json::json;

fn framed(value: serde_json::Value) -> RawResult {
    RawResult::from_json(&json!({ "states": value }))
}

#[test]
fn uniform_motion_extent_and_lookup() {
    let raw = framed(json!([
        { "t": 0.0, "position": 0.0 },
        { "t": 1.0, "position": 5.0 },
        { "t": 2.0, "position": 10.0 }
    ]));
    let frames = normalize(&raw, MotionKind::UniformLinear);
    assert_eq!(frames.len(), 3);

    let extent = compute_extent(&frames, MotionKind::UniformLinear);
    assert_eq!(extent.min_x(), Some(0.0));
    assert_eq!(extent.max_x(), Some(10.0));
    assert_eq!(extent.y, None);

    let mut tl = Timeline::new(frames, MotionKind::UniformLinear, &Config::default());
    tl.play();
    let up = tl.tick(1.5).expect("playing tick yields an update");
    assert_eq!(up.frame_index, 1);
    assert_abs_diff_eq!(up.time, 1.5);
    // position 5 of [0, 10] lands mid-viewport
    assert_abs_diff_eq!(up.marker_x, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(up.marker_y, 50.0, epsilon = 1e-9);
    assert_eq!(up.readout, "Time: 1.00 s\nPosition: 5.00 m");
}

#[test]
fn free_fall_parallel_arrays_zip_into_frames() {
    let raw = RawResult::from_arrays([
        ("times", vec![0.0, 1.0, 2.0]),
        ("heights", vec![10.0, 5.0, 0.0]),
    ]);
    let frames = normalize(&raw, MotionKind::FreeFall);
    assert_eq!(
        frames,
        vec![
            Frame::new(0.0).with("height", 10.0),
            Frame::new(1.0).with("height", 5.0),
            Frame::new(2.0).with("height", 0.0),
        ]
    );

    let rows = serde_json::to_value(to_chart_rows(&frames)).unwrap();
    assert_eq!(
        rows,
        json!([
            { "time": 0.0, "height": 10.0 },
            { "time": 1.0, "height": 5.0 },
            { "time": 2.0, "height": 0.0 }
        ])
    );
}

#[test]
fn empty_arrays_mean_no_animation() {
    let raw = RawResult::from_json(&json!({ "times": [], "heights": [] }));
    assert!(normalize(&raw, MotionKind::FreeFall).is_empty());

    let mut player = MotionPlayer::default();
    player.load(&raw, MotionKind::FreeFall);
    assert_eq!(player.status(), PlayerStatus::Empty);
    player.play();
    assert_eq!(player.timeline_state(), TimelineState::Idle);
    let out = player.update(1.0);
    assert!(out.update.is_none());
    assert!(out.events.is_empty());
    assert!(player.reset().is_none());
    assert_eq!(player.timeline_state(), TimelineState::Idle);
}

#[test]
fn two_axis_kind_with_flat_y_is_centered() {
    for kind in [MotionKind::Projectile, MotionKind::InclinedPlane] {
        let frames = vec![
            Frame::new(0.0).with("position_x", 0.0).with("position_y", 0.0),
            Frame::new(1.0).with("position_x", 4.0).with("position_y", 0.0),
        ];
        let t = compute_transform(&frames, kind);
        assert_eq!(t.scale_y, 0.0);
        assert_eq!(t.offset_y, 50.0);
        assert!(t.scale_x.is_finite() && t.scale_x > 0.0);
        assert!(t.offset_y.is_finite());
    }
}

#[test]
fn unknown_slug_falls_back_to_position_plot() {
    let kind = MotionKind::from_slug_or_generic("ley-de-hooke-3d");
    assert_eq!(kind, MotionKind::Generic);
    let raw = RawResult::from_arrays([("tiempos", vec![0.0, 1.0]), ("posiciones", vec![1.0, 3.0])]);
    let frames = normalize(&raw, kind);
    assert_eq!(frames[1].get("position"), Some(3.0));
    let t = compute_transform(&frames, kind);
    assert_abs_diff_eq!(t.apply_x(1.0), 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(t.apply_x(3.0), 90.0, epsilon = 1e-9);
}
