//! Integration tests for the input → tank → threshold → outputs pipeline.
//!
//! Drives [`AppService`] against the recording mocks and checks state,
//! output writes and emitted events for each cycle.

use crate::mock_hw::{ActuatorCall, LogSink, MockHardware, ScriptedInput};

use tankmon::app::commands::FillCommand;
use tankmon::app::events::AppEvent;
use tankmon::app::service::AppService;
use tankmon::config::SystemConfig;
use tankmon::error::{Error, FillError, InputError};
use tankmon::render::{LEVEL_LABEL, colour, patterns};
use tankmon::threshold::TankStatus;

fn make_app() -> (AppService, MockHardware, LogSink) {
    let mut app = AppService::new(SystemConfig::default());
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();
    app.start(&mut hw, &mut sink);
    (app, hw, sink)
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_lights_ok_and_blanks_display() {
    let (app, hw, sink) = make_app();

    assert_eq!(
        hw.calls,
        vec![
            ActuatorCall::Indicators(TankStatus::Ok),
            ActuatorCall::ClearDisplay,
        ]
    );
    assert_eq!(hw.matrix_draws(), 0, "matrix stays dark until the first fill");
    assert_eq!(sink.events, vec![AppEvent::Started { capacity: 500 }]);
    assert_eq!(app.level(), 0);
}

// ── Fill scenarios ────────────────────────────────────────────

#[test]
fn fill_to_capacity_then_refuse() {
    let (mut app, mut hw, mut sink) = make_app();

    assert_eq!(app.handle_code(b'A', &mut hw, &mut sink), Ok(100));
    assert_eq!(app.status(), TankStatus::Ok);

    assert_eq!(app.handle_code(b'D', &mut hw, &mut sink), Ok(500));
    assert_eq!(app.status(), TankStatus::Full);
    assert_eq!(hw.indicators(), Some(TankStatus::Full));

    let writes = hw.calls.len();
    assert_eq!(
        app.handle_code(b'A', &mut hw, &mut sink),
        Err(Error::Fill(FillError::AlreadyFull))
    );
    assert_eq!(app.level(), 500);
    assert_eq!(hw.calls.len(), writes, "refused fill must not touch outputs");
}

#[test]
fn overshoot_is_refused_and_level_kept() {
    let (mut app, mut hw, mut sink) = make_app();

    assert_eq!(app.handle_code(b'D', &mut hw, &mut sink), Ok(400));
    assert_eq!(
        app.handle_code(b'B', &mut hw, &mut sink),
        Err(Error::Fill(FillError::WouldExceedCapacity {
            level: 400,
            amount: 200
        }))
    );
    assert_eq!(app.level(), 400);
    assert_eq!(hw.level_text(), Some("400L"));
    assert_eq!(app.status(), TankStatus::Ok);
}

#[test]
fn exact_fill_to_capacity_is_accepted() {
    let (mut app, mut hw, mut sink) = make_app();

    assert_eq!(app.handle_code(b'C', &mut hw, &mut sink), Ok(300));
    assert_eq!(app.handle_code(b'B', &mut hw, &mut sink), Ok(500));
    assert_eq!(app.status(), TankStatus::Full);
    assert_eq!(hw.level_text(), Some("500L"));
}

#[test]
fn single_e_fills_tank() {
    let (mut app, mut hw, mut sink) = make_app();
    assert_eq!(
        app.handle_command(FillCommand::Add500, &mut hw, &mut sink),
        Ok(500)
    );
    let lit = hw
        .matrix()
        .map(|words| words.iter().filter(|&&w| w != colour::OFF).count());
    assert_eq!(lit, Some(patterns::MATRIX_CELLS));
}

// ── Invalid input ─────────────────────────────────────────────

#[test]
fn unknown_codes_are_rejected_without_side_effects() {
    let (mut app, mut hw, mut sink) = make_app();
    let writes = hw.calls.len();

    for code in [b'a', b'e', b'F', b'1', b'?', 0x00, 0xFF] {
        assert_eq!(
            app.handle_code(code, &mut hw, &mut sink),
            Err(Error::Input(InputError::InvalidCode(code)))
        );
    }

    assert_eq!(app.level(), 0);
    assert_eq!(hw.calls.len(), writes);
    assert_eq!(app.rejected_count(), 7);
    assert_eq!(
        sink.count(|e| matches!(e, AppEvent::CommandRejected(Error::Input(_)))),
        7
    );
}

// ── Output ordering and content ───────────────────────────────

#[test]
fn accepted_fill_writes_indicators_matrix_then_text() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.calls.clear();

    app.handle_code(b'C', &mut hw, &mut sink).unwrap();

    assert_eq!(hw.calls.len(), 3);
    assert_eq!(hw.calls[0], ActuatorCall::Indicators(TankStatus::Ok));
    assert!(matches!(hw.calls[1], ActuatorCall::Matrix(_)));
    assert_eq!(
        hw.calls[2],
        ActuatorCall::Text {
            label: LEVEL_LABEL.to_owned(),
            level: "300L".to_owned(),
        }
    );
}

#[test]
fn matrix_frame_matches_tier_pattern() {
    let (mut app, mut hw, mut sink) = make_app();

    app.handle_code(b'A', &mut hw, &mut sink).unwrap();
    assert_eq!(app.frame().tier, 0);

    // 200L → tier 1: bottom two rows lit.
    app.handle_code(b'A', &mut hw, &mut sink).unwrap();
    assert_eq!(app.frame().tier, 1);

    let words = hw.matrix().copied().unwrap();
    assert!(words[..15].iter().all(|&w| w == colour::OFF));
    assert!(words[15..].iter().all(|&w| w == colour::water_cell(1.0)));
}

#[test]
fn indicators_are_never_both_lit() {
    let (mut app, mut hw, mut sink) = make_app();
    for &code in b"AABBE" {
        let _ = app.handle_code(code, &mut hw, &mut sink);
        let (ok, full) = app.frame().status().indicators();
        assert!(ok != full, "exactly one indicator must be lit");
    }
}

// ── Events ────────────────────────────────────────────────────

#[test]
fn events_trace_level_and_status_changes() {
    let (mut app, mut hw, mut sink) = make_app();
    sink.events.clear();

    app.handle_code(b'E', &mut hw, &mut sink).unwrap();

    assert_eq!(
        sink.events,
        vec![
            AppEvent::CommandAccepted {
                command: FillCommand::Add500,
                level: 500
            },
            AppEvent::LevelChanged { from: 0, to: 500 },
            AppEvent::StatusChanged {
                from: TankStatus::Ok,
                to: TankStatus::Full
            },
        ]
    );
}

#[test]
fn status_change_emitted_only_on_flip() {
    let (mut app, mut hw, mut sink) = make_app();
    for &code in b"ABA" {
        app.handle_code(code, &mut hw, &mut sink).unwrap();
    }
    assert_eq!(
        sink.count(|e| matches!(e, AppEvent::StatusChanged { .. })),
        0
    );
    assert_eq!(sink.count(|e| matches!(e, AppEvent::LevelChanged { .. })), 3);
    assert_eq!(app.accepted_count(), 3);
}

// ── Polling ───────────────────────────────────────────────────

#[test]
fn poll_consumes_one_code_per_tick() {
    let (mut app, mut hw, mut sink) = make_app();
    let mut input = ScriptedInput::new(b"AxB");

    assert_eq!(app.poll(&mut input, &mut hw, &mut sink), Some(Ok(100)));
    assert_eq!(input.remaining(), 2);
    assert_eq!(
        app.poll(&mut input, &mut hw, &mut sink),
        Some(Err(Error::Input(InputError::InvalidCode(b'x'))))
    );
    assert_eq!(app.poll(&mut input, &mut hw, &mut sink), Some(Ok(300)));
    assert_eq!(app.poll(&mut input, &mut hw, &mut sink), None);
    assert_eq!(app.poll(&mut input, &mut hw, &mut sink), None);
    assert_eq!(app.level(), 300);
}

#[test]
fn poll_skips_disconnected_input() {
    let (mut app, mut hw, mut sink) = make_app();
    let mut input = ScriptedInput::disconnected(b"E");

    assert_eq!(app.poll(&mut input, &mut hw, &mut sink), None);
    assert_eq!(input.remaining(), 1, "nothing is read while disconnected");
    assert_eq!(app.level(), 0);
}
