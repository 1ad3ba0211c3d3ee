//! Fuzz target: operator input stream
//!
//! Feeds arbitrary bytes through the console adapter and the full service
//! against the simulated board, verifying:
//! - No panics on any byte sequence
//! - Level never exceeds capacity
//! - Exactly one status LED is lit after every cycle
//! - The OLED and matrix only change on accepted fills
//!
//! cargo fuzz run fuzz_input_stream

#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use tankmon::adapters::console::ConsoleInput;
use tankmon::adapters::hardware::SimHardware;
use tankmon::app::events::AppEvent;
use tankmon::app::ports::{EventSink, InputPort};
use tankmon::app::service::AppService;
use tankmon::config::SystemConfig;
use tankmon::tank::CAPACITY_LITRES;

struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let config = SystemConfig {
        matrix_settle_ms: 0,
        echo_matrix: false,
        ..SystemConfig::default()
    };
    let mut hw = SimHardware::simulated(&config);
    let mut app = AppService::new(config);
    let mut sink = Discard;
    app.start(&mut hw, &mut sink);

    let mut input = ConsoleInput::new(Cursor::new(data));
    while input.is_connected() {
        let frames = hw.matrix().sink().frames();
        let Some(outcome) = app.poll(&mut input, &mut hw, &mut sink) else {
            continue;
        };

        assert!(app.level() <= CAPACITY_LITRES);
        let (ok, full) = hw.indicators().pins();
        assert!(ok.is_high() != full.is_high());

        let drawn = hw.matrix().sink().frames() - frames;
        assert_eq!(drawn, u32::from(outcome.is_ok()));
    }
});
