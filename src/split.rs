use indicatif::ProgressBar;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::audio::AudioSegment;
use crate::encoder::TrackEncoder;
use crate::error::Error;
use crate::output::print_export;
use crate::types::{Artist, ReleaseMetadata, TrackInfo, TrackTags};

const ILLEGAL_FILENAME_CHARS: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    pub exported: Vec<PathBuf>,
    pub final_cursor_ms: i64,
}

pub struct Splitter<E> {
    encoder: E,
}

impl<E: TrackEncoder> Splitter<E> {
    pub fn new(encoder: E) -> Self {
        Self { encoder }
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Cuts `audio` into consecutive tracks and writes one tagged file per
    /// track into `output_dir`.
    ///
    /// `overlap_offset_ms` is subtracted from every track's nominal length,
    /// the first included. The cursor advances by the computed length even
    /// when the slice was clamped at the end of the audio; it saturates at the
    /// `i64` bounds instead of wrapping.
    pub fn run(
        &mut self,
        audio: &AudioSegment,
        metadata: &ReleaseMetadata,
        output_dir: &Path,
        overlap_offset_ms: i64,
        progress: Option<&ProgressBar>,
    ) -> Result<SplitSummary> {
        if metadata.tracklist.is_empty() {
            return Err(Error::EmptyTracklist);
        }

        fs::create_dir_all(output_dir).map_err(|err| {
            Error::io(
                format!("failed to create output directory {}", output_dir.display()),
                err,
            )
        })?;

        let mut cursor: i64 = 0;
        let mut exported = Vec::with_capacity(metadata.tracklist.len());
        for track in &metadata.tracklist {
            let export_path = export_path(track, output_dir)?;
            print_export(progress, &export_path);

            let tags = track_tags(metadata, track)?;
            let elapsed = parse_duration(&track.duration)?.saturating_sub(overlap_offset_ms);
            let end = cursor.saturating_add(elapsed);
            debug!("track {}: [{} ms, {} ms)", track.position, cursor, end);

            let slice = audio.slice(cursor, end);
            self.encoder.encode(&slice, &tags, &export_path)?;
            exported.push(export_path);

            cursor = end;
            if let Some(pb) = progress {
                pb.inc(1);
            }
        }

        Ok(SplitSummary {
            exported,
            final_cursor_ms: cursor,
        })
    }
}

/// Parses a `MM:SS` duration into milliseconds. Values that do not fit in
/// an `i64` of milliseconds are rejected as invalid.
pub fn parse_duration(duration: &str) -> Result<i64> {
    let invalid = || Error::InvalidDuration {
        value: duration.to_string(),
    };

    let (minutes, seconds) = duration.split_once(':').ok_or_else(invalid)?;
    let minutes: i64 = minutes.trim().parse().map_err(|_| invalid())?;
    let seconds: i64 = seconds.trim().parse().map_err(|_| invalid())?;
    minutes
        .checked_mul(60)
        .and_then(|total| total.checked_add(seconds))
        .and_then(|total| total.checked_mul(1000))
        .ok_or_else(invalid)
}

pub fn track_tags(metadata: &ReleaseMetadata, track: &TrackInfo) -> Result<TrackTags> {
    Ok(TrackTags {
        track: track.position.clone(),
        title: track.title.clone(),
        artist: first_artist(&track.artists, || format!("track {}", track.position))?,
        album: metadata.title.clone(),
        album_artist: first_artist(&metadata.artists, || {
            format!("release {:?}", metadata.title)
        })?,
    })
}

pub fn export_path(track: &TrackInfo, output_dir: &Path) -> Result<PathBuf> {
    let artist = first_artist(&track.artists, || format!("track {}", track.position))?;
    let name = format!("{} - {} - {}.mp3", track.position, artist, track.title);
    Ok(output_dir.join(sanitize_filename(&name)))
}

pub fn sanitize_filename(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !ILLEGAL_FILENAME_CHARS.contains(ch))
        .collect()
}

fn first_artist(artists: &[Artist], subject: impl FnOnce() -> String) -> Result<String> {
    artists
        .first()
        .map(|artist| artist.name.clone())
        .ok_or_else(|| Error::MissingArtist { subject: subject() })
}
