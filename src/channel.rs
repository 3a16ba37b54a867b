//! PWM channel handle
//!
//! A [`ChannelHandle`] owns one channel of the Meson `pwm-ctrl` driver. It
//! keeps the channel's enable file open for its whole lifetime and mirrors
//! the frequency, duty cycle and enable attributes in memory. Getters read
//! the mirror; setters write through to the device and then update it.

use core::fmt;
use std::fs::{File, OpenOptions};
use std::io;
#[cfg(unix)]
use std::os::fd::{AsFd, AsRawFd, BorrowedFd, RawFd};

use log::debug;

use crate::config::SysfsLayout;
use crate::error::{PwmError, Result};
use crate::sysfs::{read_attr, write_attr};
use crate::types::{DutyPercent, Frequency, Period};

/// Attribute values as last read from or written to the device
#[derive(Clone, Copy, Debug)]
struct Attributes {
    /// Raw frequency attribute (Hz), may be 0 on an unconfigured channel
    frequency: u32,
    period: Period,
    duty_percent: DutyPercent,
    /// Pulse width in nanoseconds
    duty_cycle: u64,
    enabled: i64,
}

impl Attributes {
    fn read(layout: &SysfsLayout, channel: u32) -> Result<Self> {
        let frequency: u32 = read_attr(&layout.freq_path(channel))?;
        let period = Period::from_hz(frequency);

        let duty_path = layout.duty_percent_path(channel);
        let raw_duty: u32 = read_attr(&duty_path)?;
        let duty_percent = DutyPercent::from_percent(raw_duty).ok_or_else(|| {
            PwmError::io(
                "Parsing PWM attribute",
                &duty_path,
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("duty cycle {raw_duty}% is above 100%"),
                ),
            )
        })?;

        let enabled: i64 = read_attr(&layout.enable_path(channel))?;

        Ok(Self {
            frequency,
            period,
            duty_percent,
            duty_cycle: duty_percent.duty_cycle(period),
            enabled,
        })
    }
}

/// One open PWM channel
#[derive(Debug)]
pub struct ChannelHandle {
    layout: SysfsLayout,
    channel: u32,
    /// Enable attribute, held open while the handle lives
    descriptor: File,
    attrs: Attributes,
}

impl ChannelHandle {
    /// Open `channel` of the driver found at `layout`
    ///
    /// # Errors
    ///
    /// - [`PwmError::UnavailableDevice`] if the base directory is missing
    /// - [`PwmError::Io`] if the enable file cannot be opened or any
    ///   attribute cannot be read
    pub fn open(layout: SysfsLayout, channel: u32) -> Result<Self> {
        if !layout.root().is_dir() {
            return Err(PwmError::UnavailableDevice {
                path: layout.root().to_path_buf(),
            });
        }

        let enable_path = layout.enable_path(channel);
        let descriptor = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&enable_path)
            .map_err(|e| PwmError::io("Opening PWM", &enable_path, e))?;

        let attrs = Attributes::read(&layout, channel)?;
        debug!(
            "Opened PWM {} at {}: {} Hz, {}, enable={}",
            channel,
            layout.root().display(),
            attrs.frequency,
            attrs.duty_percent,
            attrs.enabled
        );

        Ok(Self {
            layout,
            channel,
            descriptor,
            attrs,
        })
    }

    /// Open `channel` of the driver at its standard location
    ///
    /// # Errors
    ///
    /// See [`ChannelHandle::open`].
    pub fn open_default(channel: u32) -> Result<Self> {
        Self::open(SysfsLayout::default(), channel)
    }

    /// Open a channel given as text, e.g. from a command line
    ///
    /// # Errors
    ///
    /// [`PwmError::InvalidArgument`] if `channel` is not a non-negative
    /// integer, checked before any file is touched. Otherwise see
    /// [`ChannelHandle::open`].
    pub fn open_parsed(layout: SysfsLayout, channel: &str) -> Result<Self> {
        let channel = channel.trim().parse::<u32>().map_err(|_| {
            PwmError::invalid(
                "channel",
                format!("{channel:?} is not a non-negative integer"),
            )
        })?;
        Self::open(layout, channel)
    }

    /// Release the channel
    ///
    /// Dropping the handle has the same effect.
    pub fn close(self) {
        debug!("Closing PWM {}", self.channel);
    }

    /// Channel number
    #[must_use]
    pub const fn channel(&self) -> u32 {
        self.channel
    }

    /// Open enable attribute file
    #[must_use]
    pub const fn descriptor(&self) -> &File {
        &self.descriptor
    }

    /// Layout the channel was opened with
    #[must_use]
    pub const fn layout(&self) -> &SysfsLayout {
        &self.layout
    }

    /// Re-read all attributes from the device
    ///
    /// The cached values are only replaced if every read succeeds.
    ///
    /// # Errors
    ///
    /// [`PwmError::Io`] if an attribute cannot be read or parsed.
    pub fn refresh(&mut self) -> Result<()> {
        self.attrs = Attributes::read(&self.layout, self.channel)?;
        Ok(())
    }

    /// Output frequency in Hz
    #[must_use]
    pub const fn frequency(&self) -> u32 {
        self.attrs.frequency
    }

    /// Set the output frequency
    ///
    /// The pulse width is rescaled so the duty percentage stays the same.
    ///
    /// # Errors
    ///
    /// [`PwmError::InvalidArgument`] unless `46 <= hz <= 1_000_000`, or
    /// [`PwmError::Io`] if the write fails.
    pub fn set_frequency(&mut self, hz: u32) -> Result<()> {
        let frequency = Frequency::from_hz(hz).ok_or_else(|| {
            PwmError::invalid(
                "frequency",
                format!(
                    "{hz} Hz is outside {} Hz to {} Hz",
                    Frequency::MIN_HZ,
                    Frequency::MAX_HZ
                ),
            )
        })?;
        self.apply_frequency(frequency, frequency.period())
    }

    /// Length of one cycle in nanoseconds
    #[must_use]
    pub const fn period(&self) -> u64 {
        self.attrs.period.as_ns()
    }

    /// Set the cycle length in nanoseconds
    ///
    /// The device is configured in hertz, so the frequency written is
    /// `1e9 / ns` truncated. The cached period keeps the requested value.
    ///
    /// # Errors
    ///
    /// [`PwmError::InvalidArgument`] if the period maps to a frequency
    /// outside the supported range, or [`PwmError::Io`] if the write fails.
    pub fn set_period(&mut self, ns: u64) -> Result<()> {
        let period = Period::from_ns(ns);
        let frequency = period.frequency().ok_or_else(|| {
            PwmError::invalid(
                "period",
                format!(
                    "{ns} ns is outside {} ns to {} ns",
                    Period::from_hz(Frequency::MAX_HZ).as_ns(),
                    Period::from_hz(Frequency::MIN_HZ).as_ns(),
                ),
            )
        })?;
        self.apply_frequency(frequency, period)
    }

    fn apply_frequency(&mut self, frequency: Frequency, period: Period) -> Result<()> {
        write_attr(&self.layout.freq_path(self.channel), frequency.as_hz())?;
        self.attrs.frequency = frequency.as_hz();
        self.attrs.period = period;
        self.attrs.duty_cycle = self.attrs.duty_percent.duty_cycle(period);
        Ok(())
    }

    /// Pulse width in nanoseconds
    #[must_use]
    pub const fn duty_cycle(&self) -> u64 {
        self.attrs.duty_cycle
    }

    /// Set the pulse width in nanoseconds
    ///
    /// The device takes whole percent, so the value written is rounded to
    /// the nearest percent of the current period.
    ///
    /// # Errors
    ///
    /// [`PwmError::InvalidArgument`] if `ns` is longer than the period, or
    /// [`PwmError::Io`] if the write fails.
    pub fn set_duty_cycle(&mut self, ns: u64) -> Result<()> {
        let percent = DutyPercent::from_duty_cycle(ns, self.attrs.period).ok_or_else(|| {
            PwmError::invalid(
                "duty cycle",
                format!("{ns} ns is longer than the {} ns period", self.period()),
            )
        })?;
        write_attr(&self.layout.duty_percent_path(self.channel), percent.as_percent())?;
        self.attrs.duty_percent = percent;
        self.attrs.duty_cycle = ns;
        Ok(())
    }

    /// Duty cycle in percent
    #[must_use]
    pub const fn duty_cycle_percent(&self) -> u8 {
        self.attrs.duty_percent.as_percent()
    }

    /// Set the duty cycle in percent
    ///
    /// # Errors
    ///
    /// [`PwmError::InvalidArgument`] above 100, or [`PwmError::Io`] if the
    /// write fails. The device is not touched when the value is rejected.
    pub fn set_duty_cycle_percent(&mut self, percent: u32) -> Result<()> {
        let duty = DutyPercent::from_percent(percent).ok_or_else(|| {
            PwmError::invalid("duty cycle percent", format!("{percent} is not between 0 and 100"))
        })?;
        debug!("Writing duty cycle of: {} to PWM {}", duty, self.channel);
        write_attr(&self.layout.duty_percent_path(self.channel), duty.as_percent())?;
        self.attrs.duty_percent = duty;
        self.attrs.duty_cycle = duty.duty_cycle(self.attrs.period);
        Ok(())
    }

    /// Raw enable attribute
    #[must_use]
    pub const fn enabled(&self) -> i64 {
        self.attrs.enabled
    }

    /// Check if the output is enabled
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.attrs.enabled != 0
    }

    /// Write `value` to the enable attribute
    ///
    /// Any integer is passed through; the driver treats non-zero as on.
    ///
    /// # Errors
    ///
    /// [`PwmError::Io`] if the write fails.
    pub fn set_enabled(&mut self, value: i64) -> Result<()> {
        write_attr(&self.layout.enable_path(self.channel), value)?;
        self.attrs.enabled = value;
        Ok(())
    }

    /// Turn the output on
    ///
    /// # Errors
    ///
    /// [`PwmError::Io`] if the write fails.
    pub fn enable(&mut self) -> Result<()> {
        self.set_enabled(1)
    }

    /// Turn the output off
    ///
    /// # Errors
    ///
    /// [`PwmError::Io`] if the write fails.
    pub fn disable(&mut self) -> Result<()> {
        self.set_enabled(0)
    }
}

#[cfg(unix)]
impl AsFd for ChannelHandle {
    fn as_fd(&self) -> BorrowedFd<'_> {
        self.descriptor.as_fd()
    }
}

#[cfg(unix)]
impl AsRawFd for ChannelHandle {
    fn as_raw_fd(&self) -> RawFd {
        self.descriptor.as_raw_fd()
    }
}

impl fmt::Display for ChannelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = self.layout.root();
        let driver = root
            .file_name()
            .map_or_else(|| root.display().to_string(), |n| n.to_string_lossy().into_owned());
        write!(
            f,
            "PWM {} ({}, {} Hz, {}, {})",
            self.channel,
            driver,
            self.attrs.frequency,
            self.attrs.duty_percent,
            if self.is_enabled() { "enabled" } else { "disabled" }
        )
    }
}
