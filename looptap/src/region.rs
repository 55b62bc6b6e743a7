//! Bounding box of a same-colored region grown from a seed.

use crate::{
    frame::GameFrame,
    types::{Pixel, Rect, Size},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Growth {
    Grown(Rect),
    Unchanged,
}

impl Growth {
    pub fn rect(self, seed: Rect) -> Rect {
        match self {
            Growth::Grown(rect) => rect,
            Growth::Unchanged => seed,
        }
    }
}

fn row_contains<F: GameFrame + ?Sized>(frame: &F, y: i32, x0: i32, x1: i32, color: Pixel) -> bool {
    (x0..x1).any(|x| frame.pixel(x, y) == color)
}

fn column_contains<F: GameFrame + ?Sized>(
    frame: &F,
    x: i32,
    y0: i32,
    y1: i32,
    color: Pixel,
) -> bool {
    (y0..y1).any(|y| frame.pixel(x, y) == color)
}

/// Pushes each side of `seed` outward one pixel at a time for as long as the
/// new outermost row or column still holds at least one `color` pixel within
/// the current span of the other axis. Sides are tried independently and the
/// passes repeat until nothing moves.
///
/// This is a per-axis approximation of a flood fill. A thin line of `color`
/// touching the box edge is enough to pull the box into a neighbouring region.
pub fn find_color_bounds<F: GameFrame + ?Sized>(
    frame: &F,
    seed: Rect,
    color: Pixel,
    bounds: Size,
) -> Growth {
    let mut r = seed;
    loop {
        let before = r;

        r.x0 = (r.x0 - 1).max(0);
        if r.x0 != before.x0 && !column_contains(frame, r.x0, r.y0, r.y1, color) {
            r.x0 = before.x0;
        }

        r.y0 = (r.y0 - 1).max(0);
        if r.y0 != before.y0 && !row_contains(frame, r.y0, r.x0, r.x1, color) {
            r.y0 = before.y0;
        }

        r.x1 = (r.x1 + 1).min(bounds.width);
        if r.x1 != before.x1 && !column_contains(frame, r.x1 - 1, r.y0, r.y1, color) {
            r.x1 = before.x1;
        }

        r.y1 = (r.y1 + 1).min(bounds.height);
        if r.y1 != before.y1 && !row_contains(frame, r.y1 - 1, r.x0, r.x1, color) {
            r.y1 = before.y1;
        }

        if r == before {
            break;
        }
    }

    if r == seed {
        Growth::Unchanged
    } else {
        Growth::Grown(r)
    }
}
