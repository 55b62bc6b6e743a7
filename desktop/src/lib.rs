//! Desktop implementations of the looptap frame source and control sink.

#[cfg(all(unix, not(target_os = "macos")))]
mod linux;

#[cfg(all(unix, not(target_os = "macos")))]
use crate::linux as imp;

#[cfg(not(all(unix, not(target_os = "macos"))))]
mod fallback;

#[cfg(not(all(unix, not(target_os = "macos"))))]
use crate::fallback as imp;

mod controls;
mod screen;

pub use crate::{controls::DesktopControls, screen::ScreenFrame};

use {
    anyhow::{anyhow, Context as _},
    enigo::{Button, Coordinate, Direction, Enigo, Key, Keyboard, Mouse},
    image::RgbaImage,
    looptap::Size,
    std::sync::{Arc, Mutex, MutexGuard},
};

struct ContextData {
    imp: imp::Context,
    enigo: Mutex<Enigo>,
    monitor: xcap::Monitor,
}

/// Shared handle to the display: the first monitor for capture and one
/// input injector. Cheap to clone.
#[derive(Clone)]
pub struct Context(Arc<ContextData>);

impl Context {
    pub fn new() -> anyhow::Result<Self> {
        let monitor = xcap::Monitor::all()?
            .into_iter()
            .next()
            .context("no monitors found")?;
        Ok(Self(Arc::new(ContextData {
            imp: imp::Context::new()?,
            enigo: Mutex::new(Enigo::new(&enigo::Settings::default())?),
            monitor,
        })))
    }

    fn enigo(&self) -> anyhow::Result<MutexGuard<'_, Enigo>> {
        self.0
            .enigo
            .lock()
            .map_err(|_| anyhow!("input injector lock poisoned"))
    }

    pub fn screen_size(&self) -> anyhow::Result<Size> {
        let monitor = &self.0.monitor;
        Ok(Size::new(monitor.width()? as i32, monitor.height()? as i32))
    }

    pub fn capture_full_screen(&self) -> anyhow::Result<RgbaImage> {
        Ok(self.0.monitor.capture_image()?)
    }

    pub fn key(&self, key: Key) -> anyhow::Result<()> {
        self.enigo()?.key(key, Direction::Click)?;
        Ok(())
    }

    pub fn mouse_move_global(&self, x: i32, y: i32) -> anyhow::Result<()> {
        self.enigo()?.move_mouse(x, y, Coordinate::Abs)?;
        Ok(())
    }

    pub fn mouse_left_click(&self) -> anyhow::Result<()> {
        self.enigo()?.button(Button::Left, Direction::Click)?;
        Ok(())
    }

    /// Gives input focus to the window under the pointer.
    pub fn focus_under_pointer(&self) -> anyhow::Result<()> {
        self.0.imp.focus_under_pointer(self)
    }
}
