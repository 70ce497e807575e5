use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Args;
use crate::split::Split;
use crate::types::FrameRecord;

// Struct to hold the destination layout
pub struct OutputDirs {
    pub destination: PathBuf,
    pub data_dir: PathBuf,
}

/// Set up the directory structure for the converted output. Directories are
/// created with `create_dir_all`, so rerunning over a partially-populated
/// destination is safe and leaves unrelated files alone. Outputs sharing a
/// stem with existing files are overwritten.
pub fn setup_output_directories(args: &Args) -> std::io::Result<OutputDirs> {
    let destination = PathBuf::from(&args.destination);
    let data_dir = destination.join(&args.subdir);
    fs::create_dir_all(&data_dir)?;

    Ok(OutputDirs {
        destination,
        data_dir,
    })
}

/// File stem for one converted record: header, movie id, split, and the
/// frame id zero-padded to four digits (frame023 becomes frame0023).
pub fn output_stem(header: &str, record: &FrameRecord, split: Split) -> String {
    format!(
        "{}{}_{}_frame{:04}",
        header, record.movie_id, split, record.frame_id
    )
}

/// Write the label file and copy the image plus the source XML alongside it
/// under the same stem. Returns the path of the copied image, which the
/// split manifests want to list.
pub fn write_record(
    data_dir: &Path,
    stem: &str,
    record: &FrameRecord,
    yolo_data: &str,
) -> std::io::Result<PathBuf> {
    let label_path = data_dir.join(stem).with_extension("txt");
    let mut writer = BufWriter::new(File::create(&label_path)?);
    writer.write_all(yolo_data.as_bytes())?;
    writer.flush()?;

    let image_output_path = data_dir.join(stem).with_extension("jpg");
    fs::copy(&record.image_path, &image_output_path)?;

    // Keep the original XML next to the converted label for provenance
    let xml_output_path = data_dir.join(stem).with_extension("xml");
    fs::copy(&record.xml_path, &xml_output_path)?;

    Ok(image_output_path)
}

/// The <subdir>-train.txt and <subdir>-test.txt manifest files listing the
/// image paths of each split.
pub struct SplitManifests {
    train: BufWriter<File>,
    test: BufWriter<File>,
}

impl SplitManifests {
    pub fn create(destination: &Path, subdir: &str) -> std::io::Result<Self> {
        let train_path = destination.join(format!("{}-train.txt", subdir));
        let test_path = destination.join(format!("{}-test.txt", subdir));
        Ok(Self {
            train: BufWriter::new(File::create(train_path)?),
            test: BufWriter::new(File::create(test_path)?),
        })
    }

    pub fn record(&mut self, split: Split, image_path: &Path) -> std::io::Result<()> {
        let writer = match split {
            Split::Train => &mut self.train,
            Split::Test => &mut self.test,
        };
        writeln!(writer, "{}", image_path.display())
    }

    pub fn finish(mut self) -> std::io::Result<()> {
        self.train.flush()?;
        self.test.flush()
    }
}
