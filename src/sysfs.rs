//! Attribute file access
//!
//! Every attribute is a small text file holding one decimal integer.
//! Reads take the whole file, writes truncate and replace it.

use std::fmt::Display;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use log::{debug, trace, warn};

use crate::error::{PwmError, Result};

/// Read and parse an attribute
pub fn read_attr<T>(path: &Path) -> Result<T>
where
    T: FromStr,
{
    let text = fs::read_to_string(path).map_err(|e| {
        warn!("Failed to read {}: {}", path.display(), e);
        PwmError::io("Reading PWM attribute", path, e)
    })?;
    trace!("{} = {:?}", path.display(), text);

    text.trim().parse().map_err(|_| {
        let e = io::Error::new(
            io::ErrorKind::InvalidData,
            format!("expected an integer, found {:?}", text.trim()),
        );
        warn!("Failed to parse {}: {}", path.display(), e);
        PwmError::io("Parsing PWM attribute", path, e)
    })
}

/// Replace the contents of an attribute with `value`
///
/// The file must already exist; attributes are created by the driver, never
/// by userspace.
pub fn write_attr(path: &Path, value: impl Display) -> Result<()> {
    let text = value.to_string();
    debug!("Writing {} to {}", text, path.display());

    OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .and_then(|mut file| file.write_all(text.as_bytes()))
        .map_err(|e| {
            warn!("Failed to write {}: {}", path.display(), e);
            PwmError::io("Writing PWM attribute", path, e)
        })
}
