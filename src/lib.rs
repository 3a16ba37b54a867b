//! Meson PWM Driver Library
//!
//! This library drives one PWM output of the Amlogic Meson `pwm-ctrl`
//! platform driver through its sysfs interface. Each channel `N` is
//! controlled by three text attributes in `/sys/devices/platform/pwm-ctrl/`:
//!
//! ```text
//! freqN     output frequency in Hz (46 - 1_000_000)
//! dutyN     duty cycle in percent (0 - 100)
//! enableN   0 = off, non-zero = on
//! ```
//!
//! A [`ChannelHandle`] opens a channel, mirrors these attributes and
//! converts between the device units and period/pulse width in nanoseconds.
//!
//! ```no_run
//! use meson_pwm::ChannelHandle;
//!
//! # fn main() -> meson_pwm::Result<()> {
//! let mut pwm = ChannelHandle::open_default(0)?;
//! pwm.set_frequency(1_000)?;
//! pwm.set_duty_cycle_percent(25)?;
//! pwm.enable()?;
//! assert_eq!(pwm.duty_cycle(), 250_000);
//! # Ok(())
//! # }
//! ```
//!
//! All I/O is blocking. Handles are not coordinated with each other, so two
//! handles on the same channel must be serialized by the caller.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Driver configuration and constants
pub mod config;

/// Error type
pub mod error;

/// Frequency, period and duty cycle value types
pub mod types;

/// Attribute file I/O
pub mod sysfs;

/// PWM channel handle
pub mod channel;

/// embedded-hal trait implementations
pub mod hal;

pub use channel::ChannelHandle;
pub use config::SysfsLayout;
pub use error::{PwmError, Result};
