use std::path::Path;

use crate::split::{export_path, parse_duration, sanitize_filename, track_tags};
use crate::types::{Artist, ReleaseMetadata, TrackInfo, TrackTags};

fn test_release() -> (ReleaseMetadata, TrackInfo) {
    let track = TrackInfo {
        position: "1".to_string(),
        title: "Test Track".to_string(),
        duration: "3:00".to_string(),
        artists: vec![Artist {
            name: "Test Artist".to_string(),
        }],
    };
    let release = ReleaseMetadata {
        title: "Test Album".to_string(),
        artists: vec![Artist {
            name: "Test Artist".to_string(),
        }],
        tracklist: vec![track.clone()],
    };
    (release, track)
}

#[test]
fn parse_duration_minutes_seconds() {
    assert_eq!(parse_duration("2:30").unwrap(), 150_000);
    assert_eq!(parse_duration("0:00").unwrap(), 0);
    assert_eq!(parse_duration("61:05").unwrap(), 3_665_000);
}

#[test]
fn parse_duration_rejects_garbage() {
    assert!(parse_duration("").is_err());
    assert!(parse_duration("150").is_err());
    assert!(parse_duration("a:b").is_err());
}

#[test]
fn parse_duration_rejects_overflowing_values() {
    assert!(matches!(
        parse_duration("999999999999999999:00"),
        Err(crate::error::Error::InvalidDuration { .. })
    ));
    assert!(parse_duration("0:9223372036854775807").is_err());
}

#[test]
fn tags_map_release_and_track_fields() {
    let (release, track) = test_release();
    let tags = track_tags(&release, &track).unwrap();
    assert_eq!(
        tags,
        TrackTags {
            track: "1".to_string(),
            title: "Test Track".to_string(),
            artist: "Test Artist".to_string(),
            album: "Test Album".to_string(),
            album_artist: "Test Artist".to_string(),
        }
    );
    let keys: Vec<&str> = tags.pairs().iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, ["track", "title", "artist", "album", "albumartist"]);
}

#[test]
fn export_path_joins_sanitized_name() {
    let (_, track) = test_release();
    let path = export_path(&track, Path::new("D")).unwrap();
    assert_eq!(path, Path::new("D").join("1 - Test Artist - Test Track.mp3"));
}

#[test]
fn sanitize_filename_strips_reserved_characters() {
    assert_eq!(
        sanitize_filename(r#"A1 - AC/DC - What? "Now" <live>: a*b|c\d.mp3"#),
        "A1 - ACDC - What Now live abcd.mp3"
    );
}
