//! Handing URLs to the desktop browser

use std::io;
use std::process::Command;
use std::thread;

/// Something that can show a URL to the user
pub trait BrowserOpener {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// The platform's default browser
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl BrowserOpener for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        let mut command = if cfg!(target_os = "macos") {
            Command::new("open")
        } else if cfg!(target_os = "windows") {
            let mut command = Command::new("cmd");
            command.args(["/C", "start", ""]);
            command
        } else if cfg!(unix) {
            Command::new("xdg-open")
        } else {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "no known way to open a browser on this platform",
            ));
        };

        command.arg(url);
        spawn_detached(command)
    }
}

/// Start `command` without blocking; a background thread reaps it on exit
fn spawn_detached(mut command: Command) -> io::Result<()> {
    let mut child = command.spawn()?;
    thread::spawn(move || child.wait());
    Ok(())
}
