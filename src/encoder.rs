use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::Result;
use crate::audio::AudioSegment;
use crate::error::Error;
use crate::types::TrackTags;

pub trait TrackEncoder {
    fn encode(&mut self, audio: &AudioSegment, tags: &TrackTags, path: &Path) -> Result<()>;
}

/// Encodes MP3 by piping raw PCM into an `ffmpeg` subprocess.
pub struct FfmpegEncoder {
    ffmpeg_path: PathBuf,
}

impl Default for FfmpegEncoder {
    fn default() -> Self {
        Self {
            ffmpeg_path: PathBuf::from("ffmpeg"),
        }
    }
}

impl FfmpegEncoder {
    pub fn new(ffmpeg_path: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
        }
    }

    pub(crate) fn build_args(audio: &AudioSegment, tags: &TrackTags, path: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = [
            "-y",
            "-hide_banner",
            "-loglevel",
            "error",
            "-f",
            "s16le",
            "-ar",
        ]
        .iter()
        .map(OsString::from)
        .collect();
        args.push(audio.sample_rate().to_string().into());
        args.push("-ac".into());
        args.push(audio.channels().to_string().into());
        args.extend(
            ["-i", "pipe:0", "-codec:a", "libmp3lame", "-id3v2_version", "4"].map(OsString::from),
        );
        for (key, value) in tags.pairs() {
            args.push("-metadata".into());
            args.push(format!("{}={}", key, value).into());
        }
        args.push("-f".into());
        args.push("mp3".into());
        args.push(path.as_os_str().to_os_string());
        args
    }
}

impl TrackEncoder for FfmpegEncoder {
    fn encode(&mut self, audio: &AudioSegment, tags: &TrackTags, path: &Path) -> Result<()> {
        let encode_err = |message: String| Error::Encode {
            path: path.to_path_buf(),
            message,
        };

        let mut child = Command::new(&self.ffmpeg_path)
            .args(Self::build_args(audio, tags, path))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| {
                encode_err(format!(
                    "failed to spawn {}: {}",
                    self.ffmpeg_path.display(),
                    err
                ))
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| encode_err("ffmpeg stdin unavailable".to_string()))?;
        let pcm = audio.to_le_bytes();
        let writer = std::thread::spawn(move || stdin.write_all(&pcm));

        let output = child
            .wait_with_output()
            .map_err(|err| encode_err(format!("failed to wait for ffmpeg: {}", err)))?;
        let written = writer
            .join()
            .map_err(|_| encode_err("pcm writer thread panicked".to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(encode_err(format!(
                "ffmpeg exited with {}: {}",
                output.status,
                stderr.lines().last().unwrap_or("unknown error")
            )));
        }
        written.map_err(|err| encode_err(format!("failed to stream pcm to ffmpeg: {}", err)))?;

        Ok(())
    }
}
