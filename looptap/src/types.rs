use {
    image::Rgba,
    serde::{Deserialize, Serialize},
    std::{
        cmp::{max, min},
        fmt::{self, Display, Formatter},
        str::FromStr,
    },
    thiserror::Error,
};

/// Screen raster bounds in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle. `x0`/`y0` are inclusive, `x1`/`y1` are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// 1×1 box around a single pixel.
    pub const fn from_point(x: i32, y: i32) -> Self {
        Self::new(x, y, x + 1, y + 1)
    }

    /// The whole screen.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    pub fn center_x(&self) -> i32 {
        self.x0 + self.width() / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y0 + self.height() / 2
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.x0 <= x && x < self.x1 && self.y0 <= y && y < self.y1
    }

    /// Grows `self` into the bounding box of `self` and `other`.
    pub fn add(&mut self, other: &Rect) {
        self.x0 = min(self.x0, other.x0);
        self.y0 = min(self.y0, other.y0);
        self.x1 = max(self.x1, other.x1);
        self.y1 = max(self.y1, other.y1);
    }

    /// Clamps to `[0, width] × [0, height]` keeping `x0 <= x1` and `y0 <= y1`.
    pub fn limit(&mut self, bounds: Size) {
        self.x0 = self.x0.clamp(0, bounds.width);
        self.y0 = self.y0.clamp(0, bounds.height);
        self.x1 = self.x1.clamp(0, bounds.width).max(self.x0);
        self.y1 = self.y1.clamp(0, bounds.height).max(self.y0);
    }

    /// Moves every side outward by one pixel. Returns false once the rect
    /// covers the whole screen.
    pub fn expand(&mut self, bounds: Size) -> bool {
        self.x0 -= 1;
        self.y0 -= 1;
        self.x1 += 1;
        self.y1 += 1;
        self.limit(bounds);

        self.x0 != 0 || self.y0 != 0 || self.x1 != bounds.width || self.y1 != bounds.height
    }

    /// Moves every side inward by one pixel. Returns false once the rect
    /// has collapsed to a point.
    pub fn shrink(&mut self, bounds: Size) -> bool {
        self.x0 += 1;
        self.y0 += 1;
        self.x1 -= 1;
        self.y1 -= 1;
        self.limit(bounds);

        self.x0 != self.x1 || self.y0 != self.y1
    }

    #[must_use]
    pub fn expanded(mut self, rings: u32, bounds: Size) -> Self {
        for _ in 0..rings {
            self.expand(bounds);
        }
        self
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{{{{}, {}}}, {{{}, {}}}}}", self.x0, self.y0, self.x1, self.y1)
    }
}

/// Packed `0xAARRGGBB` pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pixel(u32);

impl Pixel {
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Alpha is left at zero, matching what captured pixels carry.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 0)
    }

    pub const fn to_u32(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

impl Display for Pixel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r(),
            self.g(),
            self.b(),
            self.a()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePixelError {
    #[error("expected 6 or 8 hex digits, got {0:?}")]
    Length(String),
    #[error("invalid hex color {0:?}")]
    Digits(String),
}

impl FromStr for Pixel {
    type Err = ParsePixelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParsePixelError::Digits(s.into()));
        }
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| ParsePixelError::Digits(s.into()))?;
        match digits.len() {
            6 => Ok(Self(value)),
            8 => Ok(Self((value >> 8) | ((value & 0xff) << 24))),
            _ => Err(ParsePixelError::Length(s.into())),
        }
    }
}

impl TryFrom<String> for Pixel {
    type Error = ParsePixelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pixel> for String {
    fn from(value: Pixel) -> Self {
        value.to_string()
    }
}

impl From<Rgba<u8>> for Pixel {
    fn from(value: Rgba<u8>) -> Self {
        let [r, g, b, _] = value.0;
        Self::from_rgb(r, g, b)
    }
}

impl From<Pixel> for Rgba<u8> {
    fn from(value: Pixel) -> Self {
        Rgba([value.r(), value.g(), value.b(), 255])
    }
}
