//! Water-tank monitor library.
//!
//! Exposes the domain, application core, drivers and adapters so the
//! binary, the integration tests and the fuzz targets share one code path.
//! Everything here runs on the host; board drivers plug in through the
//! `embedded-hal` and `embedded-graphics` traits.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod render;
pub mod tank;
pub mod threshold;
