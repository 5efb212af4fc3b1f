// src/core/postprocess.rs
//
// YOLOv8 head decoding and class-aware non-maximum suppression.

use anyhow::{anyhow, Result};

use super::preprocess::Letterbox;
use crate::config::DetectorConfig;
use crate::detection::Detection;

/// Decode a raw YOLOv8 output tensor.
///
/// Accepts `[1, 4 + nc, N]` (the exported layout) or its transpose
/// `[1, N, 4 + nc]`. Each candidate is `cx, cy, w, h` followed by one score
/// per class; the best class is kept when its score reaches `conf_threshold`.
/// Boxes come back in model input space.
pub fn decode_yolo(shape: &[usize], data: &[f32], conf_threshold: f32) -> Result<Vec<Detection>> {
    let (rows, cols) = match shape {
        [1, rows, cols] => (*rows, *cols),
        [rows, cols] => (*rows, *cols),
        _ => return Err(anyhow!("unexpected YOLO output shape {:?}", shape)),
    };

    if rows * cols != data.len() {
        return Err(anyhow!(
            "output shape {:?} does not match {} values",
            shape,
            data.len()
        ));
    }

    // Attributes are the short axis
    let channels_first = rows <= cols;
    let (attrs, candidates) = if channels_first { (rows, cols) } else { (cols, rows) };
    if attrs <= 4 {
        return Err(anyhow!("YOLO output has no class scores: shape {:?}", shape));
    }

    let value = |candidate: usize, attr: usize| -> f32 {
        if channels_first {
            data[attr * candidates + candidate]
        } else {
            data[candidate * attrs + attr]
        }
    };

    let mut detections = Vec::new();
    for i in 0..candidates {
        let (class_id, score) = (4..attrs)
            .map(|a| (a - 4, value(i, a)))
            .fold((0, f32::NEG_INFINITY), |best, cur| if cur.1 > best.1 { cur } else { best });

        if !score.is_finite() || score < conf_threshold {
            continue;
        }

        let (cx, cy, w, h) = (value(i, 0), value(i, 1), value(i, 2), value(i, 3));
        detections.push(Detection::new(
            class_id as u32,
            score,
            [cx - w / 2.0, cy - h / 2.0, cx + w / 2.0, cy + h / 2.0],
        ));
    }

    Ok(detections)
}

/// Class-aware NMS. Boxes of different classes never suppress each other.
/// Output is sorted by confidence, highest first, and truncated to `max_detections`.
pub fn non_max_suppression(
    mut detections: Vec<Detection>,
    iou_threshold: f32,
    max_detections: usize,
) -> Vec<Detection> {
    detections.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut keep: Vec<Detection> = Vec::new();
    for candidate in detections {
        if keep.len() >= max_detections {
            break;
        }
        let suppressed = keep
            .iter()
            .any(|k| k.class_id == candidate.class_id && k.iou(&candidate) > iou_threshold);
        if !suppressed {
            keep.push(candidate);
        }
    }

    keep
}

/// Full post-processing: decode, undo the letterbox, then suppress overlaps
pub fn postprocess(
    shape: &[usize],
    data: &[f32],
    letterbox: &Letterbox,
    config: &DetectorConfig,
) -> Result<Vec<Detection>> {
    let raw = decode_yolo(shape, data, config.confidence_threshold)?;
    let restored = raw
        .into_iter()
        .map(|d| {
            let bbox = letterbox.restore([d.x1, d.y1, d.x2, d.y2]);
            Detection::new(d.class_id, d.confidence, bbox)
        })
        .collect();
    Ok(non_max_suppression(
        restored,
        config.iou_threshold,
        config.max_detections,
    ))
}
