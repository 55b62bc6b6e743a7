//! In-memory frame source and control sink, for tests and offline replay.

use {
    crate::{
        frame::{GameControls, GameFrame},
        types::{Pixel, Size},
    },
    anyhow::{ensure, Context as _},
    fs_err::read_dir,
    image::{ImageReader, RgbaImage},
    itertools::Itertools,
    std::path::{Path, PathBuf},
    tracing::{debug, error, info},
};

/// Plays back a fixed list of rasters. `next` moves to the following image
/// and stays on the last one once the list is exhausted.
#[derive(Debug, Clone)]
pub struct ImageFrame {
    images: Vec<RgbaImage>,
    current: usize,
    started: bool,
}

impl ImageFrame {
    /// `images` must not be empty and should share one size.
    pub fn from_images(images: Vec<RgbaImage>) -> anyhow::Result<Self> {
        ensure!(!images.is_empty(), "no images to play back");
        Ok(Self {
            images,
            current: 0,
            started: false,
        })
    }

    /// Loads every `.png` file of `dir` in file name order.
    pub fn load_dir(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = dir.as_ref();
        let paths: Vec<PathBuf> = read_dir(dir)?
            .map_ok(|entry| entry.path())
            .filter_ok(|path| path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("png")))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .sorted()
            .collect();
        ensure!(!paths.is_empty(), "no png files found in {:?}", dir.display());

        let images = paths
            .iter()
            .map(|path| -> anyhow::Result<RgbaImage> {
                Ok(ImageReader::open(path)?
                    .decode()
                    .with_context(|| format!("failed to decode {:?}", path.display()))?
                    .into_rgba8())
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        info!("loaded {} frames from {:?}", images.len(), dir.display());
        Self::from_images(images)
    }

    /// Number of images not yet shown by `next`.
    pub fn remaining(&self) -> usize {
        if self.started {
            self.images.len() - self.current - 1
        } else {
            self.images.len()
        }
    }

    pub fn current_image(&self) -> &RgbaImage {
        &self.images[self.current]
    }
}

impl GameFrame for ImageFrame {
    fn next(&mut self) {
        if self.started {
            self.current = (self.current + 1).min(self.images.len() - 1);
        } else {
            self.started = true;
        }
    }

    fn pixel(&self, x: i32, y: i32) -> Pixel {
        let image = self.current_image();
        if image.width() == 0 || image.height() == 0 {
            return Pixel::default();
        }
        let x = x.clamp(0, image.width() as i32 - 1) as u32;
        let y = y.clamp(0, image.height() as i32 - 1) as u32;
        Pixel::from(*image.get_pixel(x, y))
    }

    fn size(&self) -> Size {
        let image = self.current_image();
        Size::new(image.width() as i32, image.height() as i32)
    }

    fn save_png(&self, path: &Path) {
        if let Err(err) = self.current_image().save(path) {
            error!("failed to save png to {:?}: {err}", path.display());
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    Fire,
    Move { x: i32, y: i32 },
    Click { x: i32, y: i32 },
    Focus { x: i32, y: i32 },
}

/// Control sink that only remembers what it was asked to do.
#[derive(Debug, Clone, Default)]
pub struct RecordingControls {
    events: Vec<ControlEvent>,
}

impl RecordingControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ControlEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.events)
    }

    fn record(&mut self, event: ControlEvent) {
        debug!(?event, "control");
        self.events.push(event);
    }
}

impl GameControls for RecordingControls {
    fn fire(&mut self) {
        self.record(ControlEvent::Fire);
    }

    fn move_pointer(&mut self, x: i32, y: i32) {
        self.record(ControlEvent::Move { x, y });
    }

    fn click(&mut self, x: i32, y: i32) {
        self.record(ControlEvent::Click { x, y });
    }

    fn focus(&mut self, x: i32, y: i32) {
        self.record(ControlEvent::Focus { x, y });
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::test_util::canvas,
        image::Rgba,
    };

    const RED: Pixel = Pixel::from_rgb(255, 0, 0);
    const BLUE: Pixel = Pixel::from_rgb(0, 0, 255);

    #[test]
    fn playback_stays_on_last_image() {
        let mut frame = ImageFrame::from_images(vec![canvas(4, 4, RED), canvas(4, 4, BLUE)]).unwrap();
        assert_eq!(frame.remaining(), 2);
        frame.next();
        assert_eq!(frame.pixel(0, 0), RED);
        assert_eq!(frame.remaining(), 1);
        frame.next();
        assert_eq!(frame.pixel(0, 0), BLUE);
        assert_eq!(frame.remaining(), 0);
        frame.next();
        assert_eq!(frame.pixel(0, 0), BLUE);
    }

    #[test]
    fn out_of_range_reads_are_clamped() {
        let mut image = canvas(4, 3, RED);
        image.put_pixel(3, 2, Rgba::from(BLUE));
        let frame = ImageFrame::from_images(vec![image]).unwrap();
        assert_eq!(frame.size(), Size::new(4, 3));
        assert_eq!(frame.pixel(4, 3), BLUE);
        assert_eq!(frame.pixel(100, 100), BLUE);
        assert_eq!(frame.pixel(-1, -1), RED);
    }

    #[test]
    fn dumped_frames_load_back_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        ImageFrame::from_images(vec![canvas(3, 2, BLUE)]).unwrap().save_png(&dir.path().join("b.png"));
        ImageFrame::from_images(vec![canvas(3, 2, RED)]).unwrap().save_png(&dir.path().join("a.png"));
        fs_err::write(dir.path().join("notes.txt"), "not a frame").unwrap();

        let mut frame = ImageFrame::load_dir(dir.path()).unwrap();
        assert_eq!(frame.remaining(), 2);
        frame.next();
        assert_eq!(frame.pixel(1, 1), RED);
        frame.next();
        assert_eq!(frame.pixel(1, 1), BLUE);
    }

    #[test]
    fn empty_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ImageFrame::load_dir(dir.path()).is_err());
    }

    #[test]
    fn empty_image_list_is_an_error() {
        assert!(ImageFrame::from_images(Vec::new()).is_err());
    }

    #[test]
    fn save_failure_is_not_fatal() {
        let frame = ImageFrame::from_images(vec![canvas(2, 2, RED)]).unwrap();
        frame.save_png(Path::new("/nonexistent-dir/proof.png"));
    }

    #[test]
    fn controls_are_recorded() {
        let mut controls = RecordingControls::new();
        controls.focus(1, 2);
        controls.fire();
        controls.click(3, 4);
        controls.move_pointer(5, 6);
        assert_eq!(
            controls.take_events(),
            [
                ControlEvent::Focus { x: 1, y: 2 },
                ControlEvent::Fire,
                ControlEvent::Click { x: 3, y: 4 },
                ControlEvent::Move { x: 5, y: 6 },
            ]
        );
        assert!(controls.events().is_empty());
    }
}
