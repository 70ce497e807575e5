use log::{error, info, warn};
use std::path::PathBuf;

use crate::config::{Args, ClassMap};
use crate::conversion::{convert_annotation, format_yolo_lines};
use crate::io::{output_stem, setup_output_directories, write_record, SplitManifests};
use crate::split::{Split, SplitSampler};
use crate::types::{FrameMatch, FrameRecord, IgnoreReason, ProcessingStats};
use crate::utils::create_progress_bar;
use crate::voc::read_and_parse_xml;
use crate::walker::scan_source;

/// Main dataset processing pipeline: walk the source, convert each XML/JPG
/// pair, assign it to a split, and write the destination layout. Per-record
/// failures are logged and counted, never fatal to the batch.
pub fn process_dataset(
    args: &Args,
    classes: &ClassMap,
) -> Result<ProcessingStats, Box<dyn std::error::Error>> {
    let source = PathBuf::from(&args.source);
    let mut stats = ProcessingStats::new();

    let mut records: Vec<FrameRecord> = Vec::new();
    for candidate in scan_source(&source)? {
        match candidate {
            FrameMatch::Matched(record) => records.push(record),
            FrameMatch::Ignored { path, reason } => match reason {
                IgnoreReason::MissingImage => {
                    warn!("JPG is missing for: {}", path.display());
                    stats.skipped_missing_image += 1;
                }
                IgnoreReason::NotAFrameName => {
                    warn!("Not a frame XML, skipping: {}", path.display());
                }
            },
        }
    }
    stats.discovered_pairs = records.len();
    info!(
        "Discovered {} XML/JPG pairs in \"{}\".",
        records.len(),
        source.display()
    );

    let output_dirs = setup_output_directories(args)?;
    let mut manifests = SplitManifests::create(&output_dirs.destination, &args.subdir)?;
    let mut sampler = SplitSampler::from_seed(args.seed, args.percentage_test);

    let pb = create_progress_bar(records.len() as u64);
    for record in &records {
        pb.inc(1);

        let annotation = match read_and_parse_xml(&record.xml_path) {
            Some(annotation) => annotation,
            None => {
                stats.failed_parse += 1;
                continue;
            }
        };
        if annotation.size.width == 0 || annotation.size.height == 0 {
            warn!(
                "Zero image dimensions in {}, skipping",
                record.xml_path.display()
            );
            stats.failed_parse += 1;
            continue;
        }

        let (boxes, dropped) = convert_annotation(&annotation, classes, &record.xml_path);
        stats.dropped_unknown_class_boxes += dropped;
        if boxes.is_empty() {
            warn!("No valid objects in {}, skipping", record.xml_path.display());
            stats.skipped_no_valid_boxes += 1;
            continue;
        }

        let split = sampler.draw();
        let stem = output_stem(&args.header, record, split);
        let image_output_path =
            match write_record(&output_dirs.data_dir, &stem, record, &format_yolo_lines(&boxes)) {
                Ok(path) => path,
                Err(e) => {
                    error!(
                        "Failed to write outputs for {}: {}",
                        record.xml_path.display(),
                        e
                    );
                    stats.failed_write += 1;
                    continue;
                }
            };
        if let Err(e) = manifests.record(split, &image_output_path) {
            error!(
                "Failed to append {} to the {} manifest: {}",
                image_output_path.display(),
                split,
                e
            );
            stats.failed_write += 1;
            continue;
        }

        stats.converted += 1;
        match split {
            Split::Train => stats.train_count += 1,
            Split::Test => stats.test_count += 1,
        }
    }
    pb.finish_with_message("Conversion complete");

    manifests.finish()?;
    info!(
        "Generated {} label/JPG/XML trios in \"{}\".",
        stats.converted,
        output_dirs.data_dir.display()
    );

    Ok(stats)
}
