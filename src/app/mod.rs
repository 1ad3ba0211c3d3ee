//! Application core — pure domain logic, zero I/O.
//!
//! This module wires the level tracker, threshold evaluator and renderer
//! into one input cycle. All interaction with devices happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
