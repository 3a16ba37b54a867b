//! Driver configuration and hardware constants
//!
//! This module defines the location of the Meson `pwm-ctrl` sysfs interface,
//! the per-channel attribute filename templates and the limits the driver
//! accepts. The constants describe the real device; [`SysfsLayout`] carries
//! them into a [`ChannelHandle`](crate::channel::ChannelHandle) so another
//! root can be substituted.

use std::path::{Path, PathBuf};

/// Base directory of the `pwm-ctrl` platform driver
pub const SYSFS_PATH: &str = "/sys/devices/platform/pwm-ctrl/";

/// Frequency attribute (Hz), `{channel}` is replaced by the channel number
pub const FREQ_TEMPLATE: &str = "freq{channel}";

/// Duty cycle attribute (percent)
pub const DUTY_PERCENT_TEMPLATE: &str = "duty{channel}";

/// Output enable attribute
pub const ENABLE_TEMPLATE: &str = "enable{channel}";

/// Placeholder substituted in the templates
pub const CHANNEL_PLACEHOLDER: &str = "{channel}";

/// Lowest frequency the controller can generate
pub const MIN_FREQUENCY_HZ: u32 = 46;

/// Highest frequency the controller can generate (1 MHz)
pub const MAX_FREQUENCY_HZ: u32 = 1_000_000;

/// Nanoseconds per second, used for frequency/period conversion
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Full scale of the duty cycle attribute
pub const MAX_DUTY_PERCENT: u32 = 100;

/// Location of the PWM attribute files
///
/// The default layout points at the real device. Tests and boards that
/// mount the driver elsewhere build one with [`SysfsLayout::with_root`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SysfsLayout {
    root: PathBuf,
    freq: String,
    duty_percent: String,
    enable: String,
}

impl SysfsLayout {
    /// Layout with the standard templates under `root`
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            freq: FREQ_TEMPLATE.to_string(),
            duty_percent: DUTY_PERCENT_TEMPLATE.to_string(),
            enable: ENABLE_TEMPLATE.to_string(),
        }
    }

    /// Replace the attribute filename templates
    ///
    /// Each template should contain [`CHANNEL_PLACEHOLDER`]; a template
    /// without it names the same file for every channel.
    #[must_use]
    pub fn with_templates(
        mut self,
        freq: impl Into<String>,
        duty_percent: impl Into<String>,
        enable: impl Into<String>,
    ) -> Self {
        self.freq = freq.into();
        self.duty_percent = duty_percent.into();
        self.enable = enable.into();
        self
    }

    /// Base directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the frequency attribute for `channel`
    #[must_use]
    pub fn freq_path(&self, channel: u32) -> PathBuf {
        self.attribute_path(&self.freq, channel)
    }

    /// Path of the duty percentage attribute for `channel`
    #[must_use]
    pub fn duty_percent_path(&self, channel: u32) -> PathBuf {
        self.attribute_path(&self.duty_percent, channel)
    }

    /// Path of the enable attribute for `channel`
    #[must_use]
    pub fn enable_path(&self, channel: u32) -> PathBuf {
        self.attribute_path(&self.enable, channel)
    }

    fn attribute_path(&self, template: &str, channel: u32) -> PathBuf {
        self.root
            .join(template.replace(CHANNEL_PLACEHOLDER, &channel.to_string()))
    }
}

impl Default for SysfsLayout {
    fn default() -> Self {
        Self::with_root(SYSFS_PATH)
    }
}
