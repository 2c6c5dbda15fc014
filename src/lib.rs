pub type Result<T> = std::result::Result<T, Error>;

mod app;
mod audio;
mod cli;
mod decoder;
mod encoder;
mod error;
mod http;
mod metadata;
mod output;
mod split;
mod types;

pub use app::run;
pub use audio::AudioSegment;
pub use decoder::load_audio;
pub use encoder::{FfmpegEncoder, TrackEncoder};
pub use error::Error;
pub use http::{HttpResponse, Transport, TransportError, UreqTransport};
pub use metadata::{FetchConfig, MetadataFetcher, Sleeper, ThreadSleeper};
pub use split::{SplitSummary, Splitter, export_path, parse_duration, sanitize_filename, track_tags};
pub use types::{Artist, ReleaseMetadata, TrackInfo, TrackTags};

#[cfg(test)]
mod tests;
