use std::fs::File;
use std::path::Path;

use log::debug;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::Result;
use crate::audio::AudioSegment;
use crate::error::Error;

/// Decodes the whole file into memory as interleaved 16-bit PCM.
pub fn load_audio(path: &Path) -> Result<AudioSegment> {
    let decode_err = |message: String| Error::Decode {
        path: path.to_path_buf(),
        message,
    };

    let file = File::open(path)
        .map_err(|err| Error::io(format!("failed to open {}", path.display()), err))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|err| decode_err(format!("format probe failed: {err}")))?;
    let mut reader = probed.format;

    let track = reader
        .default_track()
        .ok_or_else(|| decode_err("no default audio track".to_string()))?;
    if track.codec_params.codec == CODEC_TYPE_NULL {
        return Err(decode_err("unsupported codec".to_string()));
    }
    let track_id = track.id;
    let codec_params = track.codec_params.clone();

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|err| decode_err(format!("decoder init failed: {err}")))?;

    let mut sample_rate = codec_params.sample_rate.unwrap_or(0);
    let mut channels = codec_params
        .channels
        .map(|layout| layout.count() as u16)
        .unwrap_or(0);
    let mut interleaved: Vec<i16> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<i16>> = None;

    loop {
        let packet = match reader.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(err))
                if err.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(err) => return Err(decode_err(format!("read failed: {err}"))),
        };
        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(SymphoniaError::DecodeError(err)) => {
                debug!("skipping corrupt packet in {}: {}", path.display(), err);
                continue;
            }
            Err(err) => return Err(decode_err(format!("decode failed: {err}"))),
        };

        let spec = *decoded.spec();
        sample_rate = spec.rate;
        channels = spec.channels.count() as u16;

        let needed = decoded.capacity();
        if sample_buf
            .as_ref()
            .is_none_or(|buf| buf.capacity() < needed * spec.channels.count())
        {
            sample_buf = Some(SampleBuffer::<i16>::new(needed as u64, spec));
        }
        if let Some(buf) = sample_buf.as_mut() {
            buf.copy_interleaved_ref(decoded);
            interleaved.extend_from_slice(buf.samples());
        }
    }

    if sample_rate == 0 || channels == 0 {
        return Err(decode_err("stream does not advertise a sample format".to_string()));
    }

    let audio = AudioSegment::new(sample_rate, channels, interleaved);
    debug!(
        "decoded {}: {} Hz, {} ch, {} ms",
        path.display(),
        sample_rate,
        channels,
        audio.duration_ms()
    );
    Ok(audio)
}
