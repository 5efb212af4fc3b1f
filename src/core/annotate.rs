// src/core/annotate.rs
//
// Draws labelled detection boxes onto a copy of the input image.

use ab_glyph::{FontRef, PxScale};
use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use crate::config::ClassMap;
use crate::detection::Detection;

const FONT_DATA: &[u8] = include_bytes!("../../fonts/DejaVuSans.ttf");

const LABEL_COLOR: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);

/// Per-class box colours, cycled by class id
const PALETTE: [[u8; 3]; 10] = [
    [0xFF, 0x38, 0x38],
    [0xFF, 0x9D, 0x97],
    [0xFF, 0x70, 0x1F],
    [0xFF, 0xB2, 0x1D],
    [0xCF, 0xD2, 0x31],
    [0x48, 0xF9, 0x0A],
    [0x92, 0xCC, 0x17],
    [0x3D, 0xDB, 0x86],
    [0x1A, 0x93, 0x34],
    [0x00, 0xD4, 0xBB],
];

pub fn class_color(class_id: u32) -> Rgb<u8> {
    Rgb(PALETTE[class_id as usize % PALETTE.len()])
}

/// Border thickness scaled to the image, never below 2 px
fn line_thickness(width: u32, height: u32) -> u32 {
    (((width + height) as f32 / 2.0 * 0.003).round() as u32).max(2)
}

/// Text drawn in the tab above a box, e.g. `minor_injury 0.87`
pub fn label_text(det: &Detection, classes: &ClassMap) -> String {
    format!("{} {:.2}", classes.name(det.class_id), det.confidence)
}

/// Round `v` to a pixel index in `[-1, max]`. NaN maps to 0.
fn to_pixel(v: f32, max: u32) -> i32 {
    v.round().clamp(-1.0, max as f32) as i32
}

/// Return an RGB copy of `image` with every detection outlined and labelled.
///
/// Each box gets a solid tab above it holding the class name and confidence.
/// Boxes outside the frame are clamped, never rejected.
pub fn annotate(image: &DynamicImage, detections: &[Detection], classes: &ClassMap) -> RgbImage {
    let mut canvas = image.to_rgb8();
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return canvas;
    }

    let font = FontRef::try_from_slice(FONT_DATA).ok();
    let thickness = line_thickness(width, height);
    let scale = PxScale::from((thickness as f32 * 6.0).max(12.0));
    let padding = thickness as i32;

    for det in detections {
        let color = class_color(det.class_id);
        let (x1, x2) = (to_pixel(det.x1, width), to_pixel(det.x2, width));
        let (y1, y2) = (to_pixel(det.y1, height), to_pixel(det.y2, height));
        let (x1, x2) = (x1.min(x2), x1.max(x2));
        let (y1, y2) = (y1.min(y2), y1.max(y2));

        draw_box(&mut canvas, (x1, y1, x2, y2), thickness as i32, color);

        let text = label_text(det, classes);
        let (text_w, text_h) = match &font {
            Some(font) => text_size(scale, font, &text),
            None => (0, scale.y as u32),
        };
        let tab_w = text_w + 2 * padding as u32;
        let tab_h = text_h + 2 * padding as u32;
        let tab_top = if y1 - tab_h as i32 >= 0 { y1 - tab_h as i32 } else { y1 };
        draw_filled_rect_mut(&mut canvas, Rect::at(x1, tab_top).of_size(tab_w, tab_h), color);

        if let Some(font) = &font {
            draw_text_mut(
                &mut canvas,
                LABEL_COLOR,
                x1 + padding,
                tab_top + padding,
                scale,
                font,
                &text,
            );
        }
    }

    canvas
}

/// Outline the inclusive box with a border `thickness` px wide, drawn inwards
fn draw_box(canvas: &mut RgbImage, bounds: (i32, i32, i32, i32), thickness: i32, color: Rgb<u8>) {
    let (x1, y1, x2, y2) = bounds;
    for inset in 0..thickness {
        let (left, top) = (x1 + inset, y1 + inset);
        let (right, bottom) = (x2 - inset, y2 - inset);
        if right < left || bottom < top {
            break;
        }
        let rect = Rect::at(left, top).of_size((right - left + 1) as u32, (bottom - top + 1) as u32);
        draw_hollow_rect_mut(canvas, rect, color);
    }
}
