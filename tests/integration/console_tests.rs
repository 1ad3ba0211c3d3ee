//! Console input driving the full service.

use std::io::Cursor;

use crate::mock_hw::{LogSink, MockHardware};

use tankmon::adapters::console::ConsoleInput;
use tankmon::app::ports::InputPort;
use tankmon::app::service::AppService;
use tankmon::config::SystemConfig;

#[test]
fn typed_session_with_newlines() {
    let mut app = AppService::new(SystemConfig::default());
    let (mut hw, mut sink) = (MockHardware::new(), LogSink::new());
    app.start(&mut hw, &mut sink);

    // Each key followed by enter, as typed on a terminal.
    let mut input = ConsoleInput::new(Cursor::new(b"A\nb\nD\nA\n".to_vec()));
    let mut outcomes = Vec::new();
    while input.is_connected() {
        if let Some(r) = app.poll(&mut input, &mut hw, &mut sink) {
            outcomes.push(r.is_ok());
        }
    }

    assert_eq!(outcomes, vec![true, false, true, false]);
    assert_eq!(app.level(), 500);
    assert_eq!(app.accepted_count(), 2);
    assert_eq!(app.rejected_count(), 2);
}
