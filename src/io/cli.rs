//! Command-line interface for reassembling one puzzle file or a directory of them

use crate::algorithm::executor::Reassembly;
use crate::algorithm::stitch::render;
use crate::analysis::monsters::{Pattern, scan};
use crate::io::configuration::{INPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{PuzzleError, Result, WithPath, invalid_parameter};
use crate::io::image::export_image_as_png;
use crate::io::parser::parse_tiles;
use crate::io::progress::{ProgressManager, Stage};
use clap::Parser;
use ndarray::Array2;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "tilestitch")]
#[command(
    author,
    version,
    about = "Reassemble scrambled square tiles into the picture they were cut from"
)]
/// Command-line arguments for the reassembly tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Puzzle file, or directory of `.txt` puzzle files, to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Print the product of the four corner tile ids
    #[arg(short, long)]
    pub checksum: bool,

    /// Print the filled pixels not covered by sea monsters
    #[arg(short, long)]
    pub roughness: bool,

    /// Print the arrangement of tile ids
    #[arg(short, long)]
    pub grid: bool,

    /// Print the stitched picture
    #[arg(short, long)]
    pub image: bool,

    /// Export the stitched picture as PNG next to each input
    #[arg(short, long)]
    pub png: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Overwrite PNG files that already exist
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing PNG outputs should be left alone
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if no query flag was given, in which case checksum and roughness are reported
    pub const fn uses_default_queries(&self) -> bool {
        !(self.checksum || self.roughness || self.grid || self.image || self.png)
    }

    const fn wants_checksum(&self) -> bool {
        self.checksum || self.uses_default_queries()
    }

    const fn wants_roughness(&self) -> bool {
        self.roughness || self.uses_default_queries()
    }

    const fn wants_image(&self) -> bool {
        self.image || self.png || self.wants_roughness()
    }
}

/// Orchestrates batch processing of puzzle files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments, writing the report to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if target validation fails, if any puzzle cannot be
    /// solved (wrapped with the file's path), or if writing fails
    pub fn process(&mut self, out: &mut impl Write) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let show_headers = files.len() > 1;
        for (index, file) in files.iter().enumerate() {
            if show_headers {
                writeln!(out, "== {} ==", file.display())?;
            }
            self.process_file(file, index, out).with_path(file)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            Ok(vec![target.clone()])
        } else if target.is_dir() {
            let mut files = Vec::new();
            let entries = std::fs::read_dir(target).map_err(|e| PuzzleError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;
            for entry in entries {
                let path = entry?.path();
                if path.is_file()
                    && path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a puzzle file or a directory",
            ))
        }
    }

    fn set_stage(&mut self, index: usize, stage: Stage) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.set_stage(index, stage);
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize, out: &mut impl Write) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let input = std::fs::read_to_string(input_path).map_err(|e| PuzzleError::FileSystem {
            path: input_path.to_path_buf(),
            operation: "read puzzle",
            source: e,
        })?;
        let tiles = parse_tiles(&input)?;

        self.set_stage(index, Stage::Assembling);
        let reassembly = Reassembly::solve(&tiles)?;

        if self.cli.wants_checksum() {
            writeln!(out, "checksum: {}", reassembly.corner_checksum()?)?;
        }
        if self.cli.grid {
            writeln!(out, "{}", reassembly.grid().display_ids())?;
        }

        if self.cli.wants_image() {
            self.set_stage(index, Stage::Stitching);
            let image = reassembly.stitched_image()?;

            self.set_stage(index, Stage::Scanning);
            let pattern_scan = scan(&image, &Pattern::sea_monster()?)?;
            if self.cli.wants_roughness() {
                writeln!(out, "roughness: {}", pattern_scan.roughness)?;
            }
            if self.cli.image {
                writeln!(out, "{}", render(&image))?;
            }

            if self.cli.png {
                self.set_stage(index, Stage::Exporting);
                self.export_png(input_path, &image, &pattern_scan.covered)?;
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(())
    }

    // Allow print for user feedback when an existing output is kept
    #[allow(clippy::print_stderr)]
    fn export_png(
        &self,
        input_path: &Path,
        image: &Array2<bool>,
        covered: &Array2<bool>,
    ) -> Result<()> {
        let output_path = Self::get_output_path(input_path);
        if self.cli.skip_existing() && output_path.exists() {
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", output_path.display());
            }
            return Ok(());
        }
        export_image_as_png(image, Some(covered), &output_path)
    }

    /// Path of the PNG exported for `input_path`
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
