//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements    | Connects to                          |
//! |-------------|---------------|--------------------------------------|
//! | `console`   | InputPort     | stdin / USB-CDC byte stream          |
//! | `hardware`  | ActuatorPort  | status LEDs, LED matrix, OLED        |
//! | `log_sink`  | EventSink     | Serial log output                    |
//! | `sim`       | (devices)     | Host stand-ins for pins, PIO, OLED   |

pub mod console;
pub mod hardware;
pub mod log_sink;
pub mod sim;
