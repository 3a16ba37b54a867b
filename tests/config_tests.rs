//! Configuration and Constants Tests
//!
//! Tests to verify configuration values are valid and consistent.
//! Run with: cargo test --test config_tests

use std::path::{Path, PathBuf};

use meson_pwm::config::*;
use meson_pwm::types::{Frequency, Period};

// =============================================================================
// Constant Tests
// =============================================================================

#[test]
fn sysfs_path_is_pwm_ctrl() {
    assert_eq!(SYSFS_PATH, "/sys/devices/platform/pwm-ctrl/");
}

#[test]
fn templates_contain_placeholder() {
    for template in [FREQ_TEMPLATE, DUTY_PERCENT_TEMPLATE, ENABLE_TEMPLATE] {
        assert!(template.contains(CHANNEL_PLACEHOLDER), "{template}");
    }
}

#[test]
fn frequency_limits_consistent() {
    assert!(MIN_FREQUENCY_HZ < MAX_FREQUENCY_HZ);
    assert_eq!(Frequency::MIN_HZ, MIN_FREQUENCY_HZ);
    assert_eq!(Frequency::MAX_HZ, MAX_FREQUENCY_HZ);
}

#[test]
fn shortest_period_is_whole_nanoseconds() {
    // 1 MHz must not truncate to a different frequency on the way back
    let period = Period::from_hz(MAX_FREQUENCY_HZ);
    assert_eq!(period.as_ns() * u64::from(MAX_FREQUENCY_HZ), NANOS_PER_SECOND);
}

// =============================================================================
// Layout Tests
// =============================================================================

#[test]
fn default_layout_root() {
    assert_eq!(SysfsLayout::default().root(), Path::new(SYSFS_PATH));
}

#[test]
fn layout_with_root() {
    let layout = SysfsLayout::with_root("/mnt/pwm");
    assert_eq!(layout.freq_path(4), PathBuf::from("/mnt/pwm/freq4"));
    assert_eq!(layout.duty_percent_path(4), PathBuf::from("/mnt/pwm/duty4"));
    assert_eq!(layout.enable_path(4), PathBuf::from("/mnt/pwm/enable4"));
}

#[test]
fn layout_equality() {
    assert_eq!(SysfsLayout::default(), SysfsLayout::with_root(SYSFS_PATH));
    assert_ne!(SysfsLayout::default(), SysfsLayout::with_root("/tmp"));
}
