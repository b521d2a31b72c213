//! Counting heartbeat shared by the firmware entry task.
//!
//! The library is `no_std` so the same code runs on the ESP32-C3; unit tests
//! build it against `std` on the host.
#![cfg_attr(not(test), no_std)]
#![deny(clippy::large_stack_frames)]

mod heartbeat;

use embassy_time::Duration;

pub use heartbeat::{Greeting, Heartbeat};

/// Source label carried by every greeting.
pub const TAG: &str = "MAIN";

/// Time the entry task spends asleep between two greetings.
pub const PERIOD: Duration = Duration::from_millis(5000);
