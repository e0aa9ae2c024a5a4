//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Pipeline step a puzzle file is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading the tile list
    Parsing,
    /// Indexing edges and placing tiles
    Assembling,
    /// Concatenating the placed tiles
    Stitching,
    /// Looking for the pattern in the stitched picture
    Scanning,
    /// Writing the PNG
    Exporting,
}

impl Stage {
    /// Number of stages a file goes through
    pub const COUNT: u64 = 5;

    /// Zero-based position of the stage in the pipeline
    pub const fn position(self) -> u64 {
        match self {
            Self::Parsing => 0,
            Self::Assembling => 1,
            Self::Stitching => 2,
            Self::Scanning => 3,
            Self::Exporting => 4,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Parsing => "parsing",
            Self::Assembling => "assembling",
            Self::Stitching => "stitching",
            Self::Scanning => "scanning",
            Self::Exporting => "exporting",
        };
        f.write_str(label)
    }
}

/// Coordinates progress display for batch operations
///
/// Shows one bar per file for the most recent files and adds a single batch
/// bar when there are more files than individual bars
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_count: usize,
    /// Stores (`filename`, `stage_position`, `status`) for rolling window display
    file_states: Vec<(String, u64, String)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:20} [{bar:20.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_count: 0,
            file_states: Vec::new(),
        }
    }

    /// Number of files announced to [`ProgressManager::initialize`]
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;

        // Switch to batch mode for large file sets to avoid terminal spam
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(Stage::COUNT);
            pb.set_style(PROGRESS_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Configure progress bar for a new file
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states
                .resize(index + 1, (String::new(), 0, String::new()));
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = (display_name, 0, Stage::Parsing.to_string());
        }
        self.update_bars();
    }

    /// Report the stage a file has reached
    pub fn set_stage(&mut self, index: usize, stage: Stage) {
        if let Some(state) = self.file_states.get_mut(index) {
            state.1 = stage.position();
            state.2 = stage.to_string();
        }
        self.update_bars();
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.file_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = Stage::COUNT;
            state.2 = format!("done in {elapsed:.1?}");
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update all progress bars to show the last N active files
    fn update_bars(&self) {
        let active_files: Vec<&(String, u64, String)> = self
            .file_states
            .iter()
            .filter(|(name, _, _)| !name.is_empty())
            .collect();

        let start_idx = active_files
            .len()
            .saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible_files = active_files.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (name, position, status)) in visible_files.iter().copied().enumerate() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_position(*position);
                bar.set_message(status.clone());
                bar.set_prefix(name.clone());
            }
        }

        // Clear any unused bars
        for bar_idx in visible_files.len()..self.file_bars.len() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
