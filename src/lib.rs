//! labelImg to YOLO format converter
//!
//! This library provides functionality to convert labelImg Pascal VOC XML
//! annotations to YOLO format for object detection training, split the
//! converted dataset into train/test subsets, and lay the results out in a
//! flat destination directory.

pub mod config;
pub mod conversion;
pub mod dataset;
pub mod io;
pub mod split;
pub mod types;
pub mod utils;
pub mod voc;
pub mod walker;

// Re-export commonly used types and functions
pub use config::{Args, ClassMap};
pub use conversion::{convert_annotation, format_yolo_lines};
pub use dataset::process_dataset;
pub use io::{output_stem, setup_output_directories, OutputDirs, SplitManifests};
pub use split::{Split, SplitSampler};
pub use types::{FrameMatch, FrameRecord, IgnoreReason, NormalizedBox, ProcessingStats};
pub use voc::{read_and_parse_xml, VocAnnotation};
pub use walker::scan_source;
