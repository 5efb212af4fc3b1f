// src/core/preprocess.rs
//
// Letterbox preprocessing for square YOLO inputs.

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};

/// Gray used for letterbox padding
const PAD_VALUE: u8 = 114;

/// Geometry of a letterboxed image: aspect-preserving scale plus centred padding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    pub size: u32,
    pub scale: f32,
    pub offset_x: u32,
    pub offset_y: u32,
    pub source_width: u32,
    pub source_height: u32,
}

impl Letterbox {
    pub fn new(source_width: u32, source_height: u32, size: u32) -> Self {
        let size = size.max(1);
        let w = source_width.max(1);
        let h = source_height.max(1);
        let scale = (size as f32 / w as f32).min(size as f32 / h as f32);

        let mut letterbox = Self {
            size,
            scale,
            offset_x: 0,
            offset_y: 0,
            source_width: w,
            source_height: h,
        };
        let (new_w, new_h) = letterbox.resized_dims();
        letterbox.offset_x = (size - new_w) / 2;
        letterbox.offset_y = (size - new_h) / 2;
        letterbox
    }

    /// Dimensions of the scaled image before padding
    pub fn resized_dims(&self) -> (u32, u32) {
        let new_w = ((self.source_width as f32 * self.scale).round() as u32).clamp(1, self.size);
        let new_h = ((self.source_height as f32 * self.scale).round() as u32).clamp(1, self.size);
        (new_w, new_h)
    }

    /// Map an `[x1, y1, x2, y2]` box from model input space back to the source image
    pub fn restore(&self, bbox: [f32; 4]) -> [f32; 4] {
        let max_x = self.source_width as f32;
        let max_y = self.source_height as f32;
        let ox = self.offset_x as f32;
        let oy = self.offset_y as f32;

        [
            ((bbox[0] - ox) / self.scale).clamp(0.0, max_x),
            ((bbox[1] - oy) / self.scale).clamp(0.0, max_y),
            ((bbox[2] - ox) / self.scale).clamp(0.0, max_x),
            ((bbox[3] - oy) / self.scale).clamp(0.0, max_y),
        ]
    }
}

/// Letterbox `image` into a `size`x`size` canvas and return it as a
/// normalized CHW buffer (`3 * size * size` values in [0, 1]).
pub fn letterbox(image: &DynamicImage, size: u32) -> (Letterbox, Vec<f32>) {
    let rgb = image.to_rgb8();
    let geometry = Letterbox::new(rgb.width(), rgb.height(), size);
    let size = geometry.size;
    let (new_w, new_h) = geometry.resized_dims();

    let resized = imageops::resize(&rgb, new_w, new_h, FilterType::Triangle);
    let mut canvas = RgbImage::from_pixel(size, size, Rgb([PAD_VALUE; 3]));
    imageops::replace(
        &mut canvas,
        &resized,
        geometry.offset_x as i64,
        geometry.offset_y as i64,
    );

    let plane = (size as usize) * (size as usize);
    let mut data = vec![0f32; 3 * plane];
    for (x, y, pixel) in canvas.enumerate_pixels() {
        let idx = y as usize * size as usize + x as usize;
        for channel in 0..3 {
            data[channel * plane + idx] = pixel[channel] as f32 / 255.0;
        }
    }

    (geometry, data)
}
