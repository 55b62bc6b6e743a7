use {
    crate::Context,
    enigo::Key,
    looptap::GameControls,
    tracing::warn,
};

/// Sends game input to the desktop through the shared [`Context`].
///
/// Input failures are logged and dropped.
#[derive(Clone)]
pub struct DesktopControls {
    context: Context,
}

impl DesktopControls {
    pub fn new(context: Context) -> Self {
        Self { context }
    }
}

impl GameControls for DesktopControls {
    fn fire(&mut self) {
        if let Err(err) = self.context.key(Key::Space) {
            warn!("failed to press space: {err:?}");
        }
    }

    fn move_pointer(&mut self, x: i32, y: i32) {
        if let Err(err) = self.context.mouse_move_global(x, y) {
            warn!("failed to move pointer to ({x}, {y}): {err:?}");
        }
    }

    fn click(&mut self, x: i32, y: i32) {
        let result = self
            .context
            .mouse_move_global(x, y)
            .and_then(|()| self.context.mouse_left_click());
        if let Err(err) = result {
            warn!("failed to click at ({x}, {y}): {err:?}");
        }
    }

    fn focus(&mut self, x: i32, y: i32) {
        let result = self
            .context
            .mouse_move_global(x, y)
            .and_then(|()| self.context.focus_under_pointer());
        if let Err(err) = result {
            warn!("failed to focus window at ({x}, {y}): {err:?}");
        }
    }
}
