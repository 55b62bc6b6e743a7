use {
    crate::{
        frame::GameFrame,
        region::{find_color_bounds, Growth},
        types::{Pixel, Rect, Size},
    },
    std::cmp::max,
};

/// How a ball was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Via {
    /// Re-acquired from an edge midpoint of the previous ball box.
    Followed,
    /// Found by scanning the search zone.
    Scanned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sighting {
    pub rect: Rect,
    pub via: Via,
}

/// Tells the round game token apart from other blobs of the same color.
#[derive(Debug, Clone, Copy)]
pub struct BallDetector {
    pub color: Pixel,
    pub min_size: i32,
    pub bounds: Size,
}

impl BallDetector {
    pub fn new(color: Pixel, min_size: i32, bounds: Size) -> Self {
        Self {
            color,
            min_size,
            bounds,
        }
    }

    fn is_ball<F: GameFrame + ?Sized>(&self, frame: &F, x: i32, y: i32) -> bool {
        frame.pixel(x, y) == self.color
    }

    /// Grows the region around `(x, y)` and accepts it if it looks like a
    /// disc inscribed in its bounding square: corners are not ball-colored,
    /// edge midpoints one pixel inside are.
    pub fn check<F: GameFrame + ?Sized>(&self, frame: &F, x: i32, y: i32) -> Option<Rect> {
        if !self.is_ball(frame, x, y) {
            return None;
        }

        let Growth::Grown(ball) =
            find_color_bounds(frame, Rect::from_point(x, y), self.color, self.bounds)
        else {
            return None;
        };

        let width = ball.width();
        let height = ball.height();
        if width <= self.min_size || height <= self.min_size || width != height {
            return None;
        }

        let (left, top, right, bottom) = (ball.x0, ball.y0, ball.x1 - 1, ball.y1 - 1);
        let corners_clear = !self.is_ball(frame, left, top)
            && !self.is_ball(frame, right, top)
            && !self.is_ball(frame, left, bottom)
            && !self.is_ball(frame, right, bottom);
        let edges_filled = self.is_ball(frame, ball.center_x(), top + 1)
            && self.is_ball(frame, ball.center_x(), bottom - 1)
            && self.is_ball(frame, left + 1, ball.center_y())
            && self.is_ball(frame, right - 1, ball.center_y());

        (corners_clear && edges_filled).then_some(ball)
    }

    /// Looks for the ball near `last` first, then anywhere in `zone`.
    pub fn locate<F: GameFrame + ?Sized>(
        &self,
        frame: &F,
        last: Rect,
        zone: Rect,
    ) -> Option<Sighting> {
        let probes = [
            (last.center_x(), last.y0),
            (last.x0, last.center_y()),
            (last.center_x(), last.y1 - 1),
            (last.x1 - 1, last.center_y()),
        ];
        if let Some(rect) = probes.iter().find_map(|&(x, y)| self.check(frame, x, y)) {
            return Some(Sighting {
                rect,
                via: Via::Followed,
            });
        }

        let step_x = max(1, last.width() / 2) as usize;
        let step_y = max(1, last.height() / 2) as usize;
        for y in (zone.y0..zone.y1).step_by(step_y) {
            for x in (zone.x0..zone.x1).step_by(step_x) {
                if last.contains(x, y) {
                    continue;
                }
                if let Some(rect) = self.check(frame, x, y) {
                    return Some(Sighting {
                        rect,
                        via: Via::Scanned,
                    });
                }
            }
        }
        None
    }
}

/// True when none of the four edge midpoints of the probe box (the ball box
/// grown by `margin` pixels) shows the field color.
pub fn is_ball_surrounded<F: GameFrame + ?Sized>(
    frame: &F,
    ball: Rect,
    field_color: Pixel,
    margin: u32,
    bounds: Size,
) -> bool {
    let probe = ball.expanded(margin, bounds);
    let probes = [
        (probe.center_x(), probe.y0),
        (probe.center_x(), probe.y1 - 1),
        (probe.x0, probe.center_y()),
        (probe.x1 - 1, probe.center_y()),
    ];
    probes
        .iter()
        .all(|&(x, y)| frame.pixel(x, y) != field_color)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            config::{BALL_COLOR, FIELD_COLOR},
            raster::ImageFrame,
            test_util::{canvas, fill, stamp, DIAMOND_5, DISC_7},
        },
    };

    fn detector(frame: &ImageFrame) -> BallDetector {
        BallDetector::new(BALL_COLOR, 4, frame.size())
    }

    fn frame_with(pattern: &[&str], x: i32, y: i32) -> ImageFrame {
        let mut image = canvas(64, 48, FIELD_COLOR);
        stamp(&mut image, x, y, pattern, BALL_COLOR);
        ImageFrame::from_images(vec![image]).unwrap()
    }

    #[test]
    fn diamond_is_accepted() {
        let frame = frame_with(&DIAMOND_5, 20, 10);
        assert_eq!(
            detector(&frame).check(&frame, 22, 12),
            Some(Rect::new(20, 10, 25, 15))
        );
    }

    #[test]
    fn disc_is_accepted_from_any_pixel() {
        let frame = frame_with(&DISC_7, 30, 30);
        let detector = detector(&frame);
        for (x, y) in [(33, 33), (32, 30), (30, 34), (36, 32), (34, 36)] {
            assert_eq!(
                detector.check(&frame, x, y),
                Some(Rect::new(30, 30, 37, 37)),
                "seed ({x}, {y})"
            );
        }
    }

    #[test]
    fn solid_square_is_rejected() {
        let mut image = canvas(64, 48, FIELD_COLOR);
        fill(&mut image, Rect::new(10, 10, 15, 15), BALL_COLOR);
        let frame = ImageFrame::from_images(vec![image]).unwrap();
        assert_eq!(detector(&frame).check(&frame, 12, 12), None);
    }

    #[test]
    fn solid_square_of_disc_size_is_rejected() {
        let mut image = canvas(64, 48, FIELD_COLOR);
        fill(&mut image, Rect::new(20, 20, 27, 27), BALL_COLOR);
        let frame = ImageFrame::from_images(vec![image]).unwrap();
        assert_eq!(detector(&frame).check(&frame, 23, 23), None);
        assert_eq!(detector(&frame).check(&frame, 20, 20), None);
    }

    #[test]
    fn small_blob_is_rejected() {
        let frame = frame_with(&[".X.", "XXX", ".X."], 10, 10);
        assert_eq!(detector(&frame).check(&frame, 11, 11), None);
    }

    #[test]
    fn non_square_is_rejected() {
        let frame = frame_with(&["..XXX..", ".XXXXX.", "XXXXXXX", ".XXXXX.", "..XXX.."], 5, 5);
        assert_eq!(detector(&frame).check(&frame, 8, 7), None);
    }

    #[test]
    fn wrong_seed_color_is_rejected() {
        let frame = frame_with(&DISC_7, 30, 30);
        assert_eq!(detector(&frame).check(&frame, 5, 5), None);
    }

    #[test]
    fn locate_follows_small_motion() {
        let frame = frame_with(&DISC_7, 32, 31);
        let last = Rect::new(30, 30, 37, 37);
        let sighting = detector(&frame).locate(&frame, last, Rect::new(0, 0, 64, 48));
        assert_eq!(
            sighting,
            Some(Sighting {
                rect: Rect::new(32, 31, 39, 38),
                via: Via::Followed,
            })
        );
    }

    #[test]
    fn locate_scans_zone() {
        let frame = frame_with(&DISC_7, 50, 5);
        let last = Rect::new(10, 30, 17, 37);
        let detector = detector(&frame);

        let sighting = detector.locate(&frame, last, Rect::new(0, 0, 64, 48));
        assert_eq!(
            sighting,
            Some(Sighting {
                rect: Rect::new(50, 5, 57, 12),
                via: Via::Scanned,
            })
        );

        assert_eq!(detector.locate(&frame, last, Rect::new(0, 20, 64, 48)), None);
    }

    #[test]
    fn locate_without_history_scans_every_pixel() {
        let frame = frame_with(&DIAMOND_5, 41, 17);
        let sighting = detector(&frame).locate(&frame, Rect::default(), Rect::new(0, 0, 64, 48));
        assert_eq!(sighting.map(|s| s.rect), Some(Rect::new(41, 17, 46, 22)));
    }

    #[test]
    fn surroundedness() {
        const DARK: Pixel = Pixel::from_rgb(90, 90, 90);
        let ball = Rect::new(30, 20, 37, 27);

        let frame = frame_with(&DISC_7, 30, 20);
        assert!(!is_ball_surrounded(&frame, ball, FIELD_COLOR, 3, frame.size()));

        let mut image = canvas(64, 48, FIELD_COLOR);
        fill(&mut image, Rect::new(20, 10, 47, 37), DARK);
        stamp(&mut image, 30, 20, &DISC_7, BALL_COLOR);
        let frame = ImageFrame::from_images(vec![image]).unwrap();
        assert!(is_ball_surrounded(&frame, ball, FIELD_COLOR, 3, frame.size()));

        // Field still visible to the right of the probe box.
        let mut image = canvas(64, 48, FIELD_COLOR);
        fill(&mut image, Rect::new(20, 10, 39, 37), DARK);
        stamp(&mut image, 30, 20, &DISC_7, BALL_COLOR);
        let frame = ImageFrame::from_images(vec![image]).unwrap();
        assert!(!is_ball_surrounded(&frame, ball, FIELD_COLOR, 3, frame.size()));
    }
}
