use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over the frame batch
pub fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} Converting frames [{elapsed_precise}] \
                 [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )
            .progress_chars("#>-"),
    );
    pb
}
