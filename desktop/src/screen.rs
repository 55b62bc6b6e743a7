use {
    crate::Context,
    anyhow::Context as _,
    image::RgbaImage,
    looptap::{GameFrame, Pixel, Size},
    std::path::Path,
    tracing::{error, info},
};

/// Live frame source backed by screenshots of the primary monitor.
///
/// Each `next` replaces the held image with a fresh capture. A failed
/// capture keeps the previous image.
pub struct ScreenFrame {
    context: Context,
    image: RgbaImage,
}

impl ScreenFrame {
    /// Takes a first capture, whose dimensions become the frame size.
    pub fn new(context: Context) -> anyhow::Result<Self> {
        let monitor = context.screen_size()?;
        let image = context
            .capture_full_screen()
            .context("initial screen capture failed")?;
        info!(
            "screen size: {}x{} (monitor reports {}x{})",
            image.width(),
            image.height(),
            monitor.width,
            monitor.height
        );
        Ok(Self { context, image })
    }
}

impl GameFrame for ScreenFrame {
    fn next(&mut self) {
        match self.context.capture_full_screen() {
            Ok(image) => self.image = image,
            Err(err) => error!("screen capture failed: {err:?}"),
        }
    }

    fn pixel(&self, x: i32, y: i32) -> Pixel {
        if self.image.width() == 0 || self.image.height() == 0 {
            return Pixel::default();
        }
        let x = x.clamp(0, self.image.width() as i32 - 1) as u32;
        let y = y.clamp(0, self.image.height() as i32 - 1) as u32;
        Pixel::from(*self.image.get_pixel(x, y))
    }

    fn size(&self) -> Size {
        Size::new(self.image.width() as i32, self.image.height() as i32)
    }

    fn save_png(&self, path: &Path) {
        match self.image.save(path) {
            Ok(()) => info!("saved frame to {:?}", path.display()),
            Err(err) => error!("failed to save png to {:?}: {err}", path.display()),
        }
    }
}
