//! Value types for PWM attributes
//!
//! The controller is configured in hertz and whole percent, while callers
//! usually think in periods and pulse widths. These types hold the range
//! checks and the conversions between the two views.

use core::fmt;

use crate::config::{MAX_DUTY_PERCENT, MAX_FREQUENCY_HZ, MIN_FREQUENCY_HZ, NANOS_PER_SECOND};

/// Output frequency in Hertz with validation
///
/// Only frequencies the controller can generate are representable.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Frequency(u32);

impl Frequency {
    /// Minimum supported frequency
    pub const MIN_HZ: u32 = MIN_FREQUENCY_HZ;

    /// Maximum supported frequency
    pub const MAX_HZ: u32 = MAX_FREQUENCY_HZ;

    /// Create a new Frequency from Hz, returns None if out of range
    #[must_use]
    pub const fn from_hz(hz: u32) -> Option<Self> {
        if hz >= Self::MIN_HZ && hz <= Self::MAX_HZ {
            Some(Self(hz))
        } else {
            None
        }
    }

    /// Get the frequency in Hz
    #[must_use]
    pub const fn as_hz(self) -> u32 {
        self.0
    }

    /// Period of one cycle at this frequency
    #[must_use]
    pub const fn period(self) -> Period {
        Period::from_hz(self.0)
    }
}

impl fmt::Debug for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frequency({} Hz)", self.0)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Frequency {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} Hz", self.0);
    }
}

/// Length of one PWM cycle in nanoseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period(u64);

impl Period {
    /// Create from nanoseconds
    #[must_use]
    pub const fn from_ns(ns: u64) -> Self {
        Self(ns)
    }

    /// Period of a raw frequency attribute value
    ///
    /// The device reports 0 Hz on an unconfigured channel; it is treated as
    /// 1 Hz so the period stays non-zero.
    #[must_use]
    pub const fn from_hz(hz: u32) -> Self {
        let hz = if hz == 0 { 1 } else { hz as u64 };
        Self(NANOS_PER_SECOND / hz)
    }

    /// Get the period in nanoseconds
    #[must_use]
    pub const fn as_ns(self) -> u64 {
        self.0
    }

    /// Frequency that produces this period, if the controller supports it
    ///
    /// The division truncates, so periods that do not divide a second
    /// evenly map to the next lower whole frequency.
    #[must_use]
    pub fn frequency(self) -> Option<Frequency> {
        if self.0 == 0 {
            return None;
        }
        u32::try_from(NANOS_PER_SECOND / self.0)
            .ok()
            .and_then(Frequency::from_hz)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Period {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}ns", self.0);
    }
}

/// Duty cycle as whole percent (0-100)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DutyPercent(u8);

impl DutyPercent {
    /// 0% duty cycle
    pub const ZERO: Self = Self(0);

    /// 50% duty cycle
    pub const HALF: Self = Self(50);

    /// 100% duty cycle
    pub const FULL: Self = Self(100);

    /// Create from percentage, returns None above 100
    #[must_use]
    pub const fn from_percent(percent: u32) -> Option<Self> {
        if percent <= MAX_DUTY_PERCENT {
            Some(Self(percent as u8))
        } else {
            None
        }
    }

    /// Percentage of `period` covered by a pulse of `duty_ns`
    ///
    /// Rounds to the nearest percent. Returns None when the pulse is longer
    /// than the period or the period is zero.
    #[must_use]
    pub fn from_duty_cycle(duty_ns: u64, period: Period) -> Option<Self> {
        let period_ns = period.as_ns();
        if period_ns == 0 || duty_ns > period_ns {
            return None;
        }
        let percent = (u128::from(duty_ns) * 100 + u128::from(period_ns) / 2) / u128::from(period_ns);
        u32::try_from(percent).ok().and_then(Self::from_percent)
    }

    /// Get as percentage
    #[must_use]
    pub const fn as_percent(self) -> u8 {
        self.0
    }

    /// Absolute pulse width within `period`
    #[must_use]
    pub const fn duty_cycle(self, period: Period) -> u64 {
        period.as_ns() * self.0 as u64 / 100
    }
}

impl fmt::Display for DutyPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DutyPercent {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}%", self.0);
    }
}
