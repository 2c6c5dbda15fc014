use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use owo_colors::OwoColorize;
use std::path::Path;

use crate::split::SplitSummary;

pub(crate) fn print_step(label: &str, value: &str) {
    println!("{} {}", format!("{label}:").cyan().bold(), value);
}

pub(crate) fn print_export(progress: Option<&ProgressBar>, path: &Path) {
    let line = format!("{} {}", "Exporting:".cyan().bold(), path.display());
    match progress {
        Some(pb) => pb.println(line),
        None => println!("{}", line),
    }
}

pub(crate) fn print_summary(summary: &SplitSummary, output_dir: &Path) {
    println!(
        "{} {} track(s) written to {}",
        "Done".green().bold(),
        summary.exported.len(),
        output_dir.display().to_string().green()
    );
}

pub(crate) fn make_progress_bar(tracks: usize) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(
        Some(tracks as u64),
        ProgressDrawTarget::stderr_with_hz(10),
    );
    let style = ProgressStyle::with_template("{bar:40.cyan/blue} {pos:>3}/{len:<3} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");
    pb.set_style(style);
    pb.set_message("encoding");
    pb
}

pub(crate) fn finish_progress(progress: &mut Option<ProgressBar>, message: &str) {
    if let Some(pb) = progress.take() {
        pb.finish_with_message(message.to_string());
    }
}
