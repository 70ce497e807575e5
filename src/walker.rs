use glob::glob;
use log::debug;
use std::io;
use std::path::Path;

use crate::types::{FrameMatch, FrameRecord, IgnoreReason};

/// Scan the source directory for movie<digits> subdirectories and classify
/// every XML file inside them. Non-matching directories are skipped;
/// non-matching XML files and XML files without a sibling .jpg come back as
/// `Ignored` so the caller can report them. Results are sorted, which keeps
/// the batch order (and therefore the split assignment) reproducible.
pub fn scan_source(source: &Path) -> io::Result<Vec<FrameMatch>> {
    if !source.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("source directory not found: {}", source.display()),
        ));
    }

    let movie_pattern = source.join("movie*");
    let movie_dirs = glob(&movie_pattern.to_string_lossy())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut matches = Vec::new();
    for movie_dir in movie_dirs.filter_map(|entry| entry.ok()) {
        if !movie_dir.is_dir() {
            continue;
        }
        let movie_id = match parse_movie_id(&movie_dir) {
            Some(id) => id,
            None => {
                debug!("Skipping non-movie directory: {}", movie_dir.display());
                continue;
            }
        };

        let xml_pattern = movie_dir.join("*.xml");
        let xml_files = glob(&xml_pattern.to_string_lossy())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        for xml_path in xml_files.filter_map(|entry| entry.ok()) {
            matches.push(classify_frame_xml(movie_id, &xml_path));
        }
    }

    matches.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
    Ok(matches)
}

/// Classify one candidate XML file inside a movie directory.
pub fn classify_frame_xml(movie_id: u64, xml_path: &Path) -> FrameMatch {
    let frame_id = match parse_frame_id(xml_path) {
        Some(id) => id,
        None => {
            return FrameMatch::Ignored {
                path: xml_path.to_path_buf(),
                reason: IgnoreReason::NotAFrameName,
            }
        }
    };

    let image_path = xml_path.with_extension("jpg");
    if !image_path.exists() {
        return FrameMatch::Ignored {
            path: xml_path.to_path_buf(),
            reason: IgnoreReason::MissingImage,
        };
    }

    FrameMatch::Matched(FrameRecord {
        movie_id,
        frame_id,
        xml_path: xml_path.to_path_buf(),
        image_path,
    })
}

// Directory name must be "movie" followed by one or more digits
fn parse_movie_id(movie_dir: &Path) -> Option<u64> {
    let name = movie_dir.file_name()?.to_str()?;
    let digits = name.strip_prefix("movie")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

// File stem must be "frame" followed by exactly 3 or 4 digits
fn parse_frame_id(xml_path: &Path) -> Option<u32> {
    let stem = xml_path.file_stem()?.to_str()?;
    let digits = stem.strip_prefix("frame")?;
    if !(3..=4).contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn sort_key(m: &FrameMatch) -> (u64, u32, std::path::PathBuf) {
    match m {
        FrameMatch::Matched(record) => {
            (record.movie_id, record.frame_id, record.xml_path.clone())
        }
        FrameMatch::Ignored { path, .. } => (u64::MAX, u32::MAX, path.clone()),
    }
}
