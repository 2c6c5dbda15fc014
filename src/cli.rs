use clap::Parser;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::error::Error;

/// Split one long recording into tagged MP3 tracks using Discogs release data.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub(crate) struct Args {
    /// Audio file holding the whole release
    #[arg(value_name = "INPUT_FILE")]
    pub(crate) input_file: PathBuf,
    /// Directory the tracks are written to (created if missing)
    #[arg(value_name = "OUTPUT_PATH")]
    pub(crate) output_path: PathBuf,
    /// Discogs release id
    #[arg(value_name = "RELEASE_ID", value_parser = parse_release_id)]
    pub(crate) release_id: u64,
    /// Milliseconds trimmed from the nominal length of every track
    #[arg(long, value_name = "MS", default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) offset: i64,
}

pub(crate) fn parse_release_id(value: &str) -> std::result::Result<u64, String> {
    let id: u64 = value
        .trim()
        .parse()
        .map_err(|_| format!("release id must be a positive integer, got {:?}", value))?;
    if id == 0 {
        return Err("release id must be a positive integer".to_string());
    }
    Ok(id)
}

pub(crate) fn ensure_input_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(Error::MissingInput {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
