use log::warn;
use std::path::Path;

use crate::config::ClassMap;
use crate::types::{BoundingBox, NormalizedBox};
use crate::voc::VocAnnotation;

/// Convert one parsed annotation to normalized boxes. A box whose class name
/// is not in the class map is dropped with a warning; the returned count says
/// how many were dropped. Out-of-range normalized values are reported but not
/// clamped.
pub fn convert_annotation(
    annotation: &VocAnnotation,
    classes: &ClassMap,
    xml_path: &Path,
) -> (Vec<NormalizedBox>, usize) {
    let image_width = annotation.size.width as f64;
    let image_height = annotation.size.height as f64;

    let mut boxes = Vec::with_capacity(annotation.objects.len());
    let mut dropped = 0;
    for bbox in annotation.bounding_boxes() {
        let class_id = match classes.get(&bbox.class_name) {
            Some(class_id) => class_id,
            None => {
                warn!(
                    "\"{}\" is not in the class list, dropping box in {}",
                    bbox.class_name,
                    xml_path.display()
                );
                dropped += 1;
                continue;
            }
        };

        let normalized = normalize_box(&bbox, class_id, image_width, image_height);
        if !normalized.in_range() {
            warn!(
                "Box for \"{}\" in {} normalizes outside [0,1]: \
                 {:.6} {:.6} {:.6} {:.6}",
                bbox.class_name,
                xml_path.display(),
                normalized.x_center,
                normalized.y_center,
                normalized.width,
                normalized.height
            );
        }
        boxes.push(normalized);
    }

    (boxes, dropped)
}

/// Calculate the YOLO representation of one pixel-coordinate box.
pub fn normalize_box(
    bbox: &BoundingBox,
    class_id: usize,
    image_width: f64,
    image_height: f64,
) -> NormalizedBox {
    NormalizedBox {
        class_id,
        x_center: (bbox.xmin + bbox.xmax) / 2.0 / image_width,
        y_center: (bbox.ymin + bbox.ymax) / 2.0 / image_height,
        width: (bbox.xmax - bbox.xmin) / image_width,
        height: (bbox.ymax - bbox.ymin) / image_height,
    }
}

/// Format normalized boxes as YOLO label lines, one box per line with six
/// decimal digits so reruns produce byte-identical files.
pub fn format_yolo_lines(boxes: &[NormalizedBox]) -> String {
    let mut yolo_data = String::with_capacity(boxes.len() * 64);
    for b in boxes {
        yolo_data.push_str(&format!(
            "{} {:.6} {:.6} {:.6} {:.6}\n",
            b.class_id, b.x_center, b.y_center, b.width, b.height
        ));
    }
    yolo_data
}
