use {
    crate::types::{Rect, Size},
    std::cmp::max,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absorb {
    /// First sighting, the field is now exactly the ball box.
    Initialized,
    /// The ball box was already inside the field.
    Unchanged,
    Grown,
}

/// Playing field inferred from where the ball has been seen so far.
#[derive(Debug, Clone, Default)]
pub struct FieldCalibration {
    field: Option<Rect>,
    min_ball_size: i32,
    field_units: i32,
}

impl FieldCalibration {
    pub fn new(min_ball_size: i32, field_units: i32) -> Self {
        Self {
            field: None,
            min_ball_size,
            field_units,
        }
    }

    pub fn field(&self) -> Option<Rect> {
        self.field
    }

    /// The field spans more than `field_units` ball widths on both axes and
    /// is square to within a quarter ball width.
    pub fn have_field(&self, ball: Rect) -> bool {
        let Some(field) = self.field else {
            return false;
        };
        let unit = max(self.min_ball_size, ball.width());
        field.width() > unit * self.field_units
            && field.height() > unit * self.field_units
            && field.width() < field.height() + unit / 4
            && field.width() > field.height() - unit / 4
    }

    pub fn absorb(&mut self, ball: Rect) -> Absorb {
        let Some(before) = self.field else {
            self.field = Some(ball);
            return Absorb::Initialized;
        };
        let mut field = before;
        field.add(&ball);
        self.field = Some(field);
        if field == before {
            Absorb::Unchanged
        } else {
            Absorb::Grown
        }
    }

    /// Grows the field by one pixel ring.
    pub fn expand(&mut self, bounds: Size) {
        if let Some(field) = &mut self.field {
            field.expand(bounds);
        }
    }

    pub fn add_safety_margin(&mut self, rings: i32, bounds: Size) {
        for _ in 0..rings {
            self.expand(bounds);
        }
    }
}
