//! embedded-hal PWM traits
//!
//! Lets generic `embedded-hal` 1.0 code drive a [`ChannelHandle`]. The
//! controller resolves duty cycle in whole percent, so the maximum duty
//! value is 100 and a duty value is a percentage.

use embedded_hal::pwm::{Error, ErrorKind, ErrorType, SetDutyCycle};

use crate::channel::ChannelHandle;
use crate::config::MAX_DUTY_PERCENT;
use crate::error::PwmError;

impl Error for PwmError {
    fn kind(&self) -> ErrorKind {
        match self {
            PwmError::InvalidArgument { .. }
            | PwmError::UnavailableDevice { .. }
            | PwmError::Io { .. } => ErrorKind::Other,
        }
    }
}

impl ErrorType for ChannelHandle {
    type Error = PwmError;
}

impl SetDutyCycle for ChannelHandle {
    fn max_duty_cycle(&self) -> u16 {
        MAX_DUTY_PERCENT as u16
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.set_duty_cycle_percent(u32::from(duty))
    }
}
