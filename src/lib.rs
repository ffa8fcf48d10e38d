//! local-notify - native local notifications from one surface
//!
//! This crate exposes the OS notification services - toast display, scheduled
//! notifications, badge counters, and cancellation - through a single uniform
//! interface, so an application layer can trigger native notifications without
//! branching on platform.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects, payload formats, and errors
//! - **Application**: The notification surface and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (WinRT, notify-rust, memory)
//! - **CLI**: Command-line interface, argument parsing, and command runners

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
