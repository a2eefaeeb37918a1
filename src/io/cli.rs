//! Command-line interface for spelling words and rendering element tiles

use crate::catalog::loader::load_catalog;
use crate::io::configuration::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_ELEMENTS_FILE, DEFAULT_OUTPUT_FILE,
    DEFAULT_SEED, DEFAULT_WORDS_FILE, OUTPUT_EXTENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::RenderProgress;
use crate::io::words::WordList;
use crate::render::TileLayout;
use crate::render::canvas::render_to_file;
use crate::segmentation::Segmentation;
use crate::segmentation::Strategy;
use crate::segmentation::strategy::segment_words;
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "periodic-writer")]
#[command(
    author,
    version,
    about = "Spell words with periodic table symbols and render them as element tiles"
)]
/// Command-line arguments for the word speller
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Element catalog CSV (number, name, symbol, mass, ...)
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_ELEMENTS_FILE)]
    pub elements: PathBuf,

    /// Newline-delimited list of words to spell
    #[arg(short = 'l', long, value_name = "PATH", default_value = DEFAULT_WORDS_FILE)]
    pub words: PathBuf,

    /// Rendered image path
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Spell and render this word instead of reading the word list
    #[arg(long, conflicts_with_all = ["pick", "random", "all"])]
    pub word: Option<String>,

    /// Index of the word list entry to render
    #[arg(short, long, default_value_t = 0)]
    pub pick: usize,

    /// Render a randomly chosen word list entry
    #[arg(short, long, conflicts_with = "pick")]
    pub random: bool,

    /// Random seed for reproducible word choice
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Render every word into this directory as <word>.png
    #[arg(short, long, value_name = "DIR", conflicts_with_all = ["pick", "random"])]
    pub all: Option<PathBuf>,

    /// Re-render words whose output already exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Search for any valid spelling instead of the greedy one
    #[arg(short = 'x', long)]
    pub exhaustive: bool,

    /// Canvas width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub height: u32,

    /// Suppress progress output and the spelling listing
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if existing batch outputs should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress and listings should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Segmentation strategy selected by the flags
    pub const fn strategy(&self) -> Strategy {
        if self.exhaustive {
            Strategy::Exhaustive
        } else {
            Strategy::Greedy
        }
    }
}

/// Orchestrates catalog loading, segmentation and rendering
pub struct Writer {
    cli: Cli,
}

impl Writer {
    /// Create a writer for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load inputs, spell the words and render according to the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if an input cannot be read, a word cannot be spelled,
    /// the chosen word doesn't exist or rendering fails
    pub fn run(&self) -> Result<()> {
        let layout = TileLayout::with_canvas(self.cli.width, self.cli.height)?;
        let catalog = load_catalog(&self.cli.elements)?;
        let strategy = self.cli.strategy();

        if let Some(ref word) = self.cli.word {
            let segmentation = strategy.segment(&catalog, word)?;
            self.report(std::slice::from_ref(&segmentation));
            return render_to_file(&segmentation, &layout, &self.cli.output);
        }

        let words = WordList::load(&self.cli.words)?;
        let segmentations = segment_words(&catalog, &words, strategy)?;
        self.report(&segmentations);

        if let Some(ref directory) = self.cli.all {
            return self.render_all(&segmentations, &layout, directory);
        }

        let chosen = self.choose(&segmentations)?;
        render_to_file(chosen, &layout, &self.cli.output)
    }

    /// Pick the segmentation to render from a word list
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or the picked index is out of range
    pub fn choose<'s, 'a>(
        &self,
        segmentations: &'s [Segmentation<'a>],
    ) -> Result<&'s Segmentation<'a>> {
        if segmentations.is_empty() {
            return Err(invalid_parameter(
                "words",
                &self.cli.words.display(),
                &"word list contains no words",
            ));
        }

        let index = if self.cli.random {
            StdRng::seed_from_u64(self.cli.seed).random_range(0..segmentations.len())
        } else {
            self.cli.pick
        };

        segmentations.get(index).ok_or_else(|| {
            invalid_parameter(
                "pick",
                &index,
                &format!("word list has {} words", segmentations.len()),
            )
        })
    }

    fn render_all(
        &self,
        segmentations: &[Segmentation<'_>],
        layout: &TileLayout,
        directory: &Path,
    ) -> Result<()> {
        let distinct = distinct_words(segmentations);
        let mut progress = RenderProgress::new(distinct.len(), self.cli.should_show_progress());

        for segmentation in distinct {
            let output_path = Self::batch_output_path(directory, segmentation.word());
            progress.start_word(segmentation.word());

            if self.cli.skip_existing() && output_path.exists() {
                log::info!(
                    "Skipping '{}' (output exists at '{}')",
                    segmentation.word(),
                    output_path.display()
                );
                progress.skip_word();
                continue;
            }

            render_to_file(segmentation, layout, &output_path)?;
            progress.complete_word();
        }

        progress.finish();
        log::info!(
            "Batch complete: {} rendered, {} skipped",
            progress.rendered(),
            progress.skipped()
        );
        Ok(())
    }

    /// Output path of `word` in batch mode
    pub fn batch_output_path(directory: &Path, word: &str) -> PathBuf {
        directory.join(format!("{word}.{OUTPUT_EXTENSION}"))
    }

    // Allow print for the spelling listing, the tool's primary text output
    #[allow(clippy::print_stdout)]
    fn report(&self, segmentations: &[Segmentation<'_>]) {
        if !self.cli.should_show_progress() {
            return;
        }
        for segmentation in segmentations {
            println!("{segmentation}");
        }
    }
}

/// Keep the first segmentation of each word, in list order
///
/// Batch outputs are named after the word, so a repeated word would only
/// find its own earlier render and be counted as skipped.
pub fn distinct_words<'s, 'a>(
    segmentations: &'s [Segmentation<'a>],
) -> Vec<&'s Segmentation<'a>> {
    let mut seen = HashSet::with_capacity(segmentations.len());
    let mut distinct = Vec::with_capacity(segmentations.len());

    for segmentation in segmentations {
        if seen.insert(segmentation.word()) {
            distinct.push(segmentation);
        } else {
            log::info!("Ignoring repeated word '{}'", segmentation.word());
        }
    }

    distinct
}
