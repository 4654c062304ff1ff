use std::{ffi::OsStr, path::Path, process::Command};

use crate::LaunchError;

/// Builds the host's commands for opening things. Nothing is spawned here.
pub trait Opener {
    fn platform(&self) -> &'static str;

    /// Open a URL, file or directory with the default handler.
    fn open_default(&self, target: &OsStr) -> Command;

    /// Open a new terminal tab (or window) whose working directory is `dir`.
    fn new_tab(&self, dir: &Path) -> Command;
}

struct MacOs;

impl Opener for MacOs {
    fn platform(&self) -> &'static str {
        "macos"
    }

    fn open_default(&self, target: &OsStr) -> Command {
        let mut command = Command::new("open");
        command.arg(target);
        command
    }

    fn new_tab(&self, dir: &Path) -> Command {
        let mut command = Command::new("open");
        command.args(["-a", "Terminal"]).arg(dir);
        command
    }
}

struct Xdg;

impl Opener for Xdg {
    fn platform(&self) -> &'static str {
        "xdg"
    }

    fn open_default(&self, target: &OsStr) -> Command {
        let mut command = Command::new("xdg-open");
        command.arg(target);
        command
    }

    fn new_tab(&self, dir: &Path) -> Command {
        let mut working_dir = OsStr::new("--working-directory=").to_os_string();
        working_dir.push(dir);

        let mut command = Command::new("gnome-terminal");
        command.arg("--tab").arg(working_dir);
        command
    }
}

struct Windows;

impl Opener for Windows {
    fn platform(&self) -> &'static str {
        "windows"
    }

    fn open_default(&self, target: &OsStr) -> Command {
        // `start` treats its first quoted argument as a window title.
        let mut command = Command::new("cmd");
        command.args(["/c", "start", ""]).arg(target);
        command
    }

    fn new_tab(&self, dir: &Path) -> Command {
        let mut command = Command::new("wt");
        command.args(["-w", "0", "new-tab", "-d"]).arg(dir);
        command
    }
}

pub fn for_os(os: &str) -> Result<Box<dyn Opener>, LaunchError> {
    Ok(match os {
        "macos" => Box::new(MacOs),
        "linux" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => Box::new(Xdg),
        "windows" => Box::new(Windows),
        other => return Err(LaunchError::UnsupportedPlatform(other.to_owned())),
    })
}

pub fn for_host() -> Result<Box<dyn Opener>, LaunchError> {
    for_os(std::env::consts::OS)
}
