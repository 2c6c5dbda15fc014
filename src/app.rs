use clap::Parser;

use crate::Result;
use crate::cli::{Args, ensure_input_file};
use crate::decoder::load_audio;
use crate::encoder::FfmpegEncoder;
use crate::http::UreqTransport;
use crate::metadata::{FetchConfig, MetadataFetcher, ThreadSleeper};
use crate::output::{finish_progress, make_progress_bar, print_step, print_summary};
use crate::split::Splitter;

pub fn run() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    ensure_input_file(&args.input_file)?;

    print_step("Loading input path", &args.input_file.display().to_string());
    let audio = load_audio(&args.input_file)?;

    print_step("Retrieving metadata for", &args.release_id.to_string());
    let config = FetchConfig::default();
    let transport = UreqTransport::new(&config.user_agent);
    let mut fetcher = MetadataFetcher::new(config, transport, ThreadSleeper);
    let metadata = fetcher.fetch(args.release_id)?;

    let mut progress = Some(make_progress_bar(metadata.tracklist.len()));
    let mut splitter = Splitter::new(FfmpegEncoder::default());
    let result = splitter.run(
        &audio,
        &metadata,
        &args.output_path,
        args.offset,
        progress.as_ref(),
    );

    match result {
        Ok(summary) => {
            finish_progress(&mut progress, "done");
            print_summary(&summary, &args.output_path);
            Ok(())
        }
        Err(err) => {
            finish_progress(&mut progress, "aborted");
            Err(err)
        }
    }
}
