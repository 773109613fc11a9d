//! Scripted playback end to end

use std::time::Duration;

use side_reveal::config::RevealConfig;
use side_reveal::script::{Playback, Report, Script};
use side_reveal::SideReveal;

fn play(yaml: &str) -> (Playback, Vec<Report>) {
    let script = Script::from_yaml(yaml).unwrap();
    let mut playback = Playback::new(
        SideReveal::new(RevealConfig::default()),
        Duration::from_millis(16),
    );
    let mut reports = Vec::new();
    playback.run(&script, |report| reports.push(report.clone()));
    (playback, reports)
}

fn will_reveals(reports: &[Report]) -> Vec<(bool, bool)> {
    reports
        .iter()
        .filter_map(|r| match r {
            Report::WillReveal {
                reveal, animated, ..
            } => Some((*reveal, *animated)),
            _ => None,
        })
        .collect()
}

fn last_frame(reports: &[Report]) -> &Report {
    reports
        .iter()
        .rev()
        .find(|r| matches!(r, Report::Frame { .. }))
        .unwrap()
}

#[test]
fn test_swipe_then_tap_overlay() {
    let (playback, reports) = play(
        r#"
steps:
  - op: swipe
    from: 5
    to: 180
  - op: wait
    ms: 1000
  - op: tap
    x: 300
    y: 100
  - op: wait
    ms: 1000
"#,
    );

    assert_eq!(will_reveals(&reports), vec![(true, true), (false, true)]);
    assert!(!playback.reveal().is_revealed());

    match last_frame(&reports) {
        Report::Frame {
            offset,
            overlay_alpha,
            revealed,
            animating,
            ..
        } => {
            assert_eq!(*offset, 0.0);
            assert_eq!(*overlay_alpha, 0.0);
            assert!(!revealed);
            assert!(!animating);
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_swipe_settles_revealed() {
    let (playback, reports) = play(
        r#"
steps:
  - op: swipe
    from: 5
    to: 180
  - op: wait
    ms: 1000
"#,
    );

    assert!(playback.reveal().is_revealed());
    assert_eq!(playback.presenter().presented().offset, 250.0);

    // Frames sampled while the finger was down report the drag
    assert!(reports
        .iter()
        .any(|r| matches!(r, Report::Frame { dragging: true, .. })));

    match last_frame(&reports) {
        Report::Frame {
            offset,
            overlay_alpha,
            revealed,
            dragging,
            ..
        } => {
            assert_eq!(*offset, 250.0);
            assert!((overlay_alpha - 0.3).abs() < 1e-4);
            assert!(revealed);
            assert!(!dragging);
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_tap_on_front_while_hidden_does_nothing() {
    let (playback, reports) = play(
        r#"
steps:
  - op: tap
    x: 100
    y: 100
"#,
    );
    assert!(will_reveals(&reports).is_empty());
    assert!(!playback.reveal().is_revealed());
}

#[test]
fn test_script_config_and_clock() {
    let (playback, reports) = play(
        r#"
viewport: { width: 400, height: 800 }
config:
  reveal_width: 300
  overlay_alpha: 0.5
steps:
  - op: reveal
    reveal: true
    animated: false
  - op: wait
    ms: 100
"#,
    );

    assert_eq!(playback.reveal().config().reveal_width, 300.0);
    assert_eq!(playback.reveal().current_offset(), 300.0);
    assert_eq!(playback.elapsed(), Duration::from_millis(100));
    assert_eq!(will_reveals(&reports), vec![(true, false)]);

    match last_frame(&reports) {
        Report::Frame {
            t_ms,
            offset,
            overlay_alpha,
            animating,
            ..
        } => {
            assert_eq!(*t_ms, 100);
            assert_eq!(*offset, 300.0);
            assert_eq!(*overlay_alpha, 0.5);
            assert!(!animating);
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_content_steps_reach_presenter() {
    use side_reveal::model::{ContentId, ContentSlot};

    let (playback, _) = play(
        r#"
steps:
  - op: front
    id: home
  - op: side
    id: menu
  - op: front
    id: ~
"#,
    );

    assert_eq!(playback.presenter().content(ContentSlot::Front), None);
    assert_eq!(
        playback.presenter().content(ContentSlot::Side),
        Some(&ContentId::new("menu"))
    );
}

#[test]
fn test_reports_serialize_as_tagged_json() {
    let report = Report::WillReveal {
        t_ms: 32,
        reveal: true,
        animated: true,
    };
    assert_eq!(
        serde_json::to_string(&report).unwrap(),
        r#"{"event":"will_reveal","t_ms":32,"reveal":true,"animated":true}"#
    );
}

#[test]
fn test_bundled_demos_replay() {
    let demos = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    for name in ["swipe.yaml", "toggle.yaml"] {
        let script = Script::load(&demos.join(name)).unwrap();
        let mut playback = Playback::new(
            SideReveal::new(RevealConfig::default()),
            Duration::from_millis(16),
        );
        let mut frames = 0;
        playback.run(&script, |report| {
            if matches!(report, Report::Frame { .. }) {
                frames += 1;
            }
        });
        assert!(frames > 0, "{} produced no frames", name);
        assert!(!playback.presenter().is_animating(), "{} did not settle", name);
    }
}
