use anyhow::{Result, Context};
use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;
use crate::analysis;
use crate::app_config::Config;
use crate::cue_parser::CueTrack;
use crate::errors::{CaptionError, ParseError};
use crate::sidecar_writer;

// @module: Application controller for caption track analysis

/// Main application controller for track scoring
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let controller = Self { config };

        Ok(controller)
    }

    /// Run the analysis workflow for a single track file.
    ///
    /// Scored records go to stdout when `print_records` is set, otherwise
    /// they are merged into the sidecar document next to the track (or at
    /// `sidecar_override`). A track with no analyzable content is skipped
    /// with a warning rather than treated as a failure.
    pub fn run(
        &self,
        input_file: &Path,
        sidecar_override: Option<&Path>,
        print_records: bool,
    ) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        // Check if the input file exists
        if !input_file.exists() {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        let content = std::fs::read_to_string(input_file)
            .with_context(|| format!("Failed to read track file: {:?}", input_file))?;

        // Parse the track content into cues
        let cues = match CueTrack::parse_vtt_string(&content) {
            Ok(cues) => cues,
            Err(CaptionError::Parse(ParseError::EmptyTrack)) => {
                warn!("No analyzable content in {:?}, skipping", input_file);
                return Ok(());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to parse track file: {:?}", input_file));
            }
        };

        let track = CueTrack {
            source_file: input_file.to_path_buf(),
            cues,
        };
        debug!("{}", track);

        // Score every cue of the track
        let records = analysis::analyze_cues(&track.cues);
        info!("Scored {} cue(s) from {:?}", records.len(), input_file);

        if print_records {
            let json = serde_json::to_string_pretty(&records)
                .context("Failed to serialize records to JSON")?;
            println!("{}", json);
        } else {
            let sidecar_path = match sidecar_override {
                Some(path) => path.to_path_buf(),
                None => self.sidecar_path_for(input_file),
            };

            sidecar_writer::merge_into_sidecar(
                &sidecar_path,
                &self.config.sidecar_key,
                &records,
                self.config.pretty_sidecar,
            )
            .with_context(|| format!("Failed to update sidecar: {:?}", sidecar_path))?;

            info!("Success: {}", sidecar_path.display());
        }

        info!(
            "Analysis completed in {}",
            Self::format_duration(start_time.elapsed())
        );

        Ok(())
    }

    /// Run the workflow in folder mode, scoring all track files in a directory.
    /// Tracks that fail to read or parse are reported and skipped.
    pub fn run_folder(&self, input_dir: &Path) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        // Check if the input directory exists
        if !input_dir.exists() {
            return Err(anyhow::anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        // Find all track files in the directory (recursive)
        let track_files = self.find_track_files(input_dir)?;

        if track_files.is_empty() {
            warn!(
                "No .{} track files found in directory: {:?}",
                self.config.normalized_track_extension(),
                input_dir
            );
            return Ok(());
        }

        // Create a progress bar for folder processing
        let folder_pb = ProgressBar::new(track_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} tracks ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));
        folder_pb.set_message("Scoring tracks");

        // Track success and failure counts
        let mut success_count = 0;
        let mut error_count = 0;

        // Process each track file
        for track_file in track_files.iter() {
            // Get the file name for display
            let file_name = track_file
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());

            // Update the folder progress bar to show current file
            folder_pb.set_message(format!("Scoring: {}", file_name));

            // Run the analysis for this file
            match self.run(track_file, None, false) {
                Ok(_) => {
                    success_count += 1;
                }
                Err(e) => {
                    error!("Error processing track {}: {}", file_name, e);
                    error_count += 1;
                }
            }

            // Update the folder progress bar
            folder_pb.inc(1);
        }

        // Finish the folder progress bar
        folder_pb.finish_with_message("Folder processing complete");

        // Give summary results - important for batch operations
        info!(
            "Folder processing completed: {} scored, {} errors in {}",
            success_count,
            error_count,
            Self::format_duration(start_time.elapsed())
        );

        Ok(())
    }

    /// Default sidecar path for a track file, next to it with a .json extension
    pub fn sidecar_path_for(&self, input_file: &Path) -> PathBuf {
        input_file.with_extension("json")
    }

    /// Find files with the configured track extension in a directory
    fn find_track_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let wanted = self.config.normalized_track_extension();
        let mut result = Vec::new();

        for entry in WalkDir::new(dir).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(wanted) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        // Deterministic processing order for stable logs and tests
        result.sort();

        Ok(result)
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
