use std::path::PathBuf;

// One (image, annotation) pair found during the source walk
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrameRecord {
    pub movie_id: u64,
    pub frame_id: u32,
    pub xml_path: PathBuf,
    pub image_path: PathBuf,
}

// Why a candidate XML file was excluded from the batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// File name is not "frame" followed by 3 or 4 digits
    NotAFrameName,
    /// No sibling .jpg next to the XML
    MissingImage,
}

// Classification result for one candidate XML file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameMatch {
    Matched(FrameRecord),
    Ignored { path: PathBuf, reason: IgnoreReason },
}

/// One bounding box in source pixel coordinates, as read from the XML.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    pub class_name: String,
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

/// One bounding box in YOLO format: class id plus center/size expressed as
/// fractions of the image dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedBox {
    pub class_id: usize,
    pub x_center: f64,
    pub y_center: f64,
    pub width: f64,
    pub height: f64,
}

impl NormalizedBox {
    /// All four geometric fields inside `[0,1]`. Values outside indicate
    /// malformed source data.
    pub fn in_range(&self) -> bool {
        [self.x_center, self.y_center, self.width, self.height]
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }
}

// Struct to hold processing statistics
#[derive(Debug, Default, Clone)]
pub struct ProcessingStats {
    pub discovered_pairs: usize,
    pub converted: usize,
    pub skipped_missing_image: usize,
    pub failed_parse: usize,
    pub skipped_no_valid_boxes: usize,
    pub failed_write: usize,
    pub dropped_unknown_class_boxes: usize,
    pub train_count: usize,
    pub test_count: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print_summary(&self) {
        log::info!("=== Processing Summary ===");
        log::info!("XML/JPG pairs discovered: {}", self.discovered_pairs);
        log::info!(
            "Converted records: {} (train: {}, test: {})",
            self.converted,
            self.train_count,
            self.test_count
        );
        log::info!("Skipped (missing image file): {}", self.skipped_missing_image);
        log::info!("Skipped (unparsable XML): {}", self.failed_parse);
        log::info!("Skipped (no valid objects): {}", self.skipped_no_valid_boxes);
        log::info!("Failed writes: {}", self.failed_write);

        if self.dropped_unknown_class_boxes > 0 {
            log::warn!(
                "Dropped {} boxes whose class name is not in the class list",
                self.dropped_unknown_class_boxes
            );
        }

        let total_skipped = self.skipped_missing_image
            + self.failed_parse
            + self.skipped_no_valid_boxes
            + self.failed_write;
        if total_skipped > 0 {
            log::warn!("Total skipped records: {}", total_skipped);
        }
    }
}
