use log::error;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::types::BoundingBox;

// The labelImg annotation document. Fields the converter does not use
// (folder, filename, pose, ...) are ignored during deserialization.
#[derive(Debug, Deserialize, Clone)]
pub struct VocAnnotation {
    pub size: VocSize,
    #[serde(rename = "object", default)]
    pub objects: Vec<VocObject>,
}

// The <size> node: image dimensions in pixels
#[derive(Debug, Deserialize, Clone)]
pub struct VocSize {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub depth: u32,
}

// One <object> node: class name plus its bounding box
#[derive(Debug, Deserialize, Clone)]
pub struct VocObject {
    pub name: String,
    pub bndbox: VocBndBox,
}

// The <bndbox> node in pixel coordinates. labelImg writes integers but
// floats occur in the wild, so these parse as f64.
#[derive(Debug, Deserialize, Clone)]
pub struct VocBndBox {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl VocAnnotation {
    /// The annotated boxes in source pixel coordinates.
    pub fn bounding_boxes(&self) -> Vec<BoundingBox> {
        self.objects
            .iter()
            .map(|obj| BoundingBox {
                class_name: obj.name.clone(),
                xmin: obj.bndbox.xmin,
                ymin: obj.bndbox.ymin,
                xmax: obj.bndbox.xmax,
                ymax: obj.bndbox.ymax,
            })
            .collect()
    }
}

/// Read and parse a single labelImg XML file into a VocAnnotation struct.
/// Parsing happens directly from a buffered file stream instead of loading
/// the entire file into memory first.
pub fn read_and_parse_xml(path: &Path) -> Option<VocAnnotation> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            error!("Failed to open XML file ({}): {:?}", path.display(), e);
            return None;
        }
    };

    match quick_xml::de::from_reader(BufReader::new(file)) {
        Ok(annotation) => Some(annotation),
        Err(e) => {
            error!("Failed to parse XML ({}): {:?}", path.display(), e);
            None
        }
    }
}
