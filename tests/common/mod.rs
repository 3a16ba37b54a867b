//! Fake `pwm-ctrl` directory for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use meson_pwm::SysfsLayout;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Temporary driver directory, removed on drop
pub struct FakeSysfs {
    base: PathBuf,
    root: PathBuf,
}

impl FakeSysfs {
    /// Empty `pwm-ctrl` directory
    pub fn new() -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let base = std::env::temp_dir().join(format!("meson-pwm-test-{}-{}", std::process::id(), id));
        let root = base.join("pwm-ctrl");
        fs::create_dir_all(&root).expect("create fake sysfs");
        Self { base, root }
    }

    /// Directory with one channel's attributes populated
    pub fn with_channel(channel: u32, freq: &str, duty: &str, enable: &str) -> Self {
        let sysfs = Self::new();
        sysfs.add_channel(channel, freq, duty, enable);
        sysfs
    }

    pub fn add_channel(&self, channel: u32, freq: &str, duty: &str, enable: &str) {
        self.write(&format!("freq{channel}"), freq);
        self.write(&format!("duty{channel}"), duty);
        self.write(&format!("enable{channel}"), enable);
    }

    pub fn layout(&self) -> SysfsLayout {
        SysfsLayout::with_root(&self.root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn write(&self, name: &str, contents: &str) {
        fs::write(self.root.join(name), contents).expect("write attribute");
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.root.join(name)).expect("read attribute")
    }

    pub fn remove(&self, name: &str) {
        fs::remove_file(self.root.join(name)).expect("remove attribute");
    }
}

impl Drop for FakeSysfs {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.base);
    }
}
