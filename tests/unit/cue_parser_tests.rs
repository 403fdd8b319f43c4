/*!
 * Tests for cue and track parsing functionality
 */

use std::path::PathBuf;
use anyhow::Result;
use cuescore::cue_parser::{Cue, CueTrack};
use cuescore::errors::{CaptionError, ParseError};
use crate::common;

#[test]
fn test_parseTimestamp_withValidTimestamps_shouldConvertToSeconds() {
    assert_eq!(Cue::parse_timestamp("00:00:01.500").unwrap(), 1.5);
    assert_eq!(Cue::parse_timestamp("01:02:03.250").unwrap(), 3723.25);
    assert_eq!(Cue::parse_timestamp("00:10:00.000").unwrap(), 600.0);
}

#[test]
fn test_parseTimestamp_withCommaDecimal_shouldConvertToSeconds() {
    assert_eq!(Cue::parse_timestamp("00:00:20,000").unwrap(), 20.0);
    assert_eq!(Cue::parse_timestamp("00:00:01,500").unwrap(), 1.5);
}

#[test]
fn test_parseTimestamp_withUnnormalizedFields_shouldStillConvert() {
    // Components above their usual range are accepted and summed as-is
    assert_eq!(Cue::parse_timestamp("0:90:00.0").unwrap(), 5400.0);
}

#[test]
fn test_parseTimestamp_withSurroundingWhitespace_shouldTrim() {
    assert_eq!(Cue::parse_timestamp("  00:00:05.000 ").unwrap(), 5.0);
}

#[test]
fn test_parseTimestamp_withMalformedInput_shouldFail() {
    assert!(Cue::parse_timestamp("00:01").is_err());
    assert!(Cue::parse_timestamp("abc").is_err());
    assert!(Cue::parse_timestamp("aa:bb:cc").is_err());
    assert!(Cue::parse_timestamp("").is_err());
}

#[test]
fn test_parseTimestamp_withNegativeComponent_shouldFail() {
    let result = Cue::parse_timestamp("00:00:-5.0");
    assert!(result.is_err());

    let display = format!("{}", result.unwrap_err());
    assert!(display.contains("Invalid timestamp"));
    assert!(display.contains("00:00:-5.0"));
}

#[test]
fn test_newValidated_withValidInput_shouldCleanText() -> Result<()> {
    let cue = Cue::new_validated(1.0, 4.0, "<i>Hello</i>\n world".to_string())?;

    assert_eq!(cue.start, 1.0);
    assert_eq!(cue.end, 4.0);
    assert_eq!(cue.text, "Hello world");
    assert_eq!(cue.duration(), 3.0);
    Ok(())
}

#[test]
fn test_newValidated_withBadTimeRange_shouldFail() {
    assert!(matches!(
        Cue::new_validated(4.0, 4.0, "text".to_string()),
        Err(CaptionError::InvalidCue { .. })
    ));
    assert!(matches!(
        Cue::new_validated(5.0, 2.0, "text".to_string()),
        Err(CaptionError::InvalidCue { .. })
    ));
    assert!(matches!(
        Cue::new_validated(-1.0, 2.0, "text".to_string()),
        Err(CaptionError::InvalidCue { .. })
    ));
    assert!(matches!(
        Cue::new_validated(f64::NAN, 2.0, "text".to_string()),
        Err(CaptionError::InvalidCue { .. })
    ));
}

#[test]
fn test_newValidated_withOnlyMarkup_shouldFailAsEmptyText() {
    assert!(matches!(
        Cue::new_validated(0.0, 2.0, "<i></i>".to_string()),
        Err(CaptionError::EmptyCueText)
    ));
    assert!(matches!(
        Cue::new_validated(0.0, 2.0, "   ".to_string()),
        Err(CaptionError::EmptyCueText)
    ));
}

#[test]
fn test_parseVttString_withValidContent_shouldExtractCues() -> Result<()> {
    let content = "WEBVTT\n\n\
                   00:00:01.000 --> 00:00:04.000\n\
                   Hello there.\n\n\
                   00:00:05.000 --> 00:00:09.000\n\
                   General greeting.\n";

    let cues = CueTrack::parse_vtt_string(content)?;

    assert_eq!(cues.len(), 2);
    assert_eq!(cues[0].start, 1.0);
    assert_eq!(cues[0].end, 4.0);
    assert_eq!(cues[0].text, "Hello there.");
    assert_eq!(cues[1].start, 5.0);
    assert_eq!(cues[1].text, "General greeting.");
    Ok(())
}

#[test]
fn test_parseVttString_withMultiLineCue_shouldJoinLines() -> Result<()> {
    let content = "WEBVTT\n\n\
                   00:00:01.000 --> 00:00:04.000\n\
                   line one\n\
                   line two\n";

    let cues = CueTrack::parse_vtt_string(content)?;

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].text, "line one line two");
    Ok(())
}

#[test]
fn test_parseVttString_withMarkup_shouldStripIt() -> Result<()> {
    let content = "WEBVTT\n\n\
                   00:00:01.000 --> 00:00:04.000\n\
                   <c.yellow>Careful</c> with <i>that</i>\n";

    let cues = CueTrack::parse_vtt_string(content)?;

    assert_eq!(cues[0].text, "Careful with that");
    Ok(())
}

#[test]
fn test_parseVttString_withCueIdentifiers_shouldIgnoreThem() -> Result<()> {
    // SRT-style numbered blocks with comma decimals parse the same way
    let content = "1\n\
                   00:00:01,000 --> 00:00:04,000\n\
                   This is a test caption.\n\n\
                   2\n\
                   00:00:05,000 --> 00:00:09,000\n\
                   It contains multiple cues.\n";

    let cues = CueTrack::parse_vtt_string(content)?;

    assert_eq!(cues.len(), 2);
    assert_eq!(cues[0].text, "This is a test caption.");
    Ok(())
}

#[test]
fn test_parseVttString_withCueSettings_shouldIgnoreTrailer() -> Result<()> {
    let content = "WEBVTT\n\n\
                   00:00:01.000 --> 00:00:04.000 align:start position:10%\n\
                   Positioned text\n";

    let cues = CueTrack::parse_vtt_string(content)?;

    assert_eq!(cues[0].end, 4.0);
    assert_eq!(cues[0].text, "Positioned text");
    Ok(())
}

#[test]
fn test_parseVttString_withArrowInText_shouldKeepItAsText() -> Result<()> {
    let content = "WEBVTT\n\n\
                   00:00:01.000 --> 00:00:04.000\n\
                   go --> there\n";

    let cues = CueTrack::parse_vtt_string(content)?;

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].text, "go --> there");
    Ok(())
}

#[test]
fn test_parseVttString_withMalformedTimestamp_shouldDropThatBlockOnly() -> Result<()> {
    let content = "WEBVTT\n\n\
                   00:00:bad --> 00:00:05.000\n\
                   Broken block text\n\n\
                   00:00:06.000 --> 00:00:09.000\n\
                   Valid block text\n";

    let cues = CueTrack::parse_vtt_string(content)?;

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].text, "Valid block text");
    Ok(())
}

#[test]
fn test_parseVttString_withInvalidTimeRange_shouldSkipCue() -> Result<()> {
    let content = "WEBVTT\n\n\
                   00:00:05.000 --> 00:00:05.000\n\
                   Zero duration\n\n\
                   00:00:06.000 --> 00:00:09.000\n\
                   Fine cue\n";

    let cues = CueTrack::parse_vtt_string(content)?;

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].text, "Fine cue");
    Ok(())
}

#[test]
fn test_parseVttString_withOutOfOrderCues_shouldKeepSourceOrder() -> Result<()> {
    let content = "WEBVTT\n\n\
                   00:00:10.000 --> 00:00:12.000\n\
                   later start first\n\n\
                   00:00:01.000 --> 00:00:03.000\n\
                   earlier start second\n";

    let cues = CueTrack::parse_vtt_string(content)?;

    assert_eq!(cues[0].start, 10.0);
    assert_eq!(cues[1].start, 1.0);
    Ok(())
}

#[test]
fn test_parseVttString_withCrlfLineEndings_shouldParse() -> Result<()> {
    let content = "WEBVTT\r\n\r\n00:00:01.000 --> 00:00:04.000\r\nWindows line endings\r\n";

    let cues = CueTrack::parse_vtt_string(content)?;

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].text, "Windows line endings");
    Ok(())
}

#[test]
fn test_parseVttString_withEmptyContent_shouldFailAsEmptyTrack() {
    assert!(matches!(
        CueTrack::parse_vtt_string(""),
        Err(CaptionError::Parse(ParseError::EmptyTrack))
    ));
}

#[test]
fn test_parseVttString_withNoCueBlocks_shouldFailAsEmptyTrack() {
    let content = "WEBVTT\n\nNOTE this file carries no cues\n";

    assert!(matches!(
        CueTrack::parse_vtt_string(content),
        Err(CaptionError::Parse(ParseError::EmptyTrack))
    ));
}

#[test]
fn test_parseVttString_withOnlyMarkupCue_shouldFailAsEmptyTrack() {
    let content = "WEBVTT\n\n00:00:01.000 --> 00:00:04.000\n<i></i>\n";

    assert!(matches!(
        CueTrack::parse_vtt_string(content),
        Err(CaptionError::Parse(ParseError::EmptyTrack))
    ));
}

#[test]
fn test_fromFile_withTrackOnDisk_shouldLoadAndParse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let track_path = common::create_test_track(&temp_dir.path().to_path_buf(), "sample.vtt")?;

    let track = CueTrack::from_file(&track_path)?;

    assert_eq!(track.source_file, track_path);
    assert_eq!(track.cues.len(), 3);
    assert_eq!(track.word_count(), 12);
    Ok(())
}

#[test]
fn test_fromFile_withMissingFile_shouldFail() {
    let result = CueTrack::from_file(PathBuf::from("/nonexistent/missing.vtt"));
    assert!(result.is_err());
}

#[test]
fn test_cueTrack_display_shouldSummarizeTrack() {
    let mut track = CueTrack::new(PathBuf::from("sample.vtt"));
    track.cues.push(Cue::new(0.0, 2.0, "three word cue".to_string()));

    let display = format!("{}", track);

    assert!(display.contains("Cue Track"));
    assert!(display.contains("Cues: 1"));
    assert!(display.contains("Words: 3"));
}
