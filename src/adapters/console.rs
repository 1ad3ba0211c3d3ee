//! Serial-console input adapter.
//!
//! Reads one key at a time from any byte stream (stdin on the host, the
//! USB-CDC console on the board). Whitespace between keys, including the
//! newline a terminal sends after each key, is skipped rather than treated
//! as an invalid code. End of stream or a read error marks the link as
//! disconnected.

use std::io::{ErrorKind, Read};

use log::{info, warn};

use crate::app::ports::InputPort;

pub struct ConsoleInput<R> {
    reader: R,
    connected: bool,
}

impl<R: Read> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            connected: true,
        }
    }

    fn next_byte(&mut self) -> Option<u8> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => {
                    info!("console: input closed");
                    self.connected = false;
                    return None;
                }
                Ok(_) => return Some(buf[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => {
                    warn!("console: read failed ({})", e);
                    self.connected = false;
                    return None;
                }
            }
        }
    }
}

impl<R: Read> InputPort for ConsoleInput<R> {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn read_code(&mut self) -> Option<u8> {
        while self.connected {
            match self.next_byte() {
                Some(b) if b.is_ascii_whitespace() => {}
                other => return other,
            }
        }
        None
    }
}
