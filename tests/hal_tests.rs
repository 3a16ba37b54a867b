//! embedded-hal Adapter Tests
//!
//! Drives a channel through the generic `SetDutyCycle` trait.
//! Run with: cargo test --test hal_tests

mod common;

use common::FakeSysfs;
use embedded_hal::pwm::{Error, ErrorKind, SetDutyCycle};
use meson_pwm::ChannelHandle;

/// Generic helper, as a board crate would write it
fn set_half<P: SetDutyCycle>(pwm: &mut P) -> Result<(), P::Error> {
    pwm.set_duty_cycle_fraction(1, 2)
}

fn max_duty<P: SetDutyCycle>(pwm: &P) -> u16 {
    pwm.max_duty_cycle()
}

fn fully_on<P: SetDutyCycle>(pwm: &mut P) -> Result<(), P::Error> {
    pwm.set_duty_cycle_fully_on()
}

fn fully_off<P: SetDutyCycle>(pwm: &mut P) -> Result<(), P::Error> {
    pwm.set_duty_cycle_fully_off()
}

fn raw_duty<P: SetDutyCycle>(pwm: &mut P, duty: u16) -> Result<(), P::Error> {
    pwm.set_duty_cycle(duty)
}

#[test]
fn max_duty_is_percent_scale() {
    let sysfs = FakeSysfs::with_channel(0, "1000", "0", "1");
    let pwm = ChannelHandle::open(sysfs.layout(), 0).unwrap();
    assert_eq!(max_duty(&pwm), 100);
}

#[test]
fn fraction_writes_percent() {
    let sysfs = FakeSysfs::with_channel(0, "1000", "0", "1");
    let mut pwm = ChannelHandle::open(sysfs.layout(), 0).unwrap();

    set_half(&mut pwm).unwrap();
    assert_eq!(sysfs.read("duty0"), "50");
    assert_eq!(pwm.duty_cycle(), 500_000);
}

#[test]
fn fully_on_and_off() {
    let sysfs = FakeSysfs::with_channel(0, "1000", "40", "1");
    let mut pwm = ChannelHandle::open(sysfs.layout(), 0).unwrap();

    fully_on(&mut pwm).unwrap();
    assert_eq!(sysfs.read("duty0"), "100");
    fully_off(&mut pwm).unwrap();
    assert_eq!(sysfs.read("duty0"), "0");
}

#[test]
fn duty_above_max_rejected() {
    let sysfs = FakeSysfs::with_channel(0, "1000", "40", "1");
    let mut pwm = ChannelHandle::open(sysfs.layout(), 0).unwrap();

    let err = raw_duty(&mut pwm, 101).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Other);
    assert_eq!(sysfs.read("duty0"), "40");
}
