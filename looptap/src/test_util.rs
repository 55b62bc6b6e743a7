use {
    crate::types::{Pixel, Rect},
    image::{Rgba, RgbaImage},
};

pub const DIAMOND_5: [&str; 5] = ["..X..", ".XXX.", "XXXXX", ".XXX.", "..X.."];

pub const DISC_7: [&str; 7] = [
    "..XXX..", ".XXXXX.", "XXXXXXX", "XXXXXXX", "XXXXXXX", ".XXXXX.", "..XXX..",
];

pub fn canvas(width: u32, height: u32, color: Pixel) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba::from(color))
}

pub fn fill(image: &mut RgbaImage, rect: Rect, color: Pixel) {
    for y in rect.y0..rect.y1 {
        for x in rect.x0..rect.x1 {
            image.put_pixel(x as u32, y as u32, Rgba::from(color));
        }
    }
}

/// Paints every `X` of `pattern` with its top-left corner at `(x, y)`.
pub fn stamp(image: &mut RgbaImage, x: i32, y: i32, pattern: &[&str], color: Pixel) {
    for (dy, row) in pattern.iter().enumerate() {
        for (dx, c) in row.chars().enumerate() {
            if c == 'X' {
                image.put_pixel((x + dx as i32) as u32, (y + dy as i32) as u32, Rgba::from(color));
            }
        }
    }
}
