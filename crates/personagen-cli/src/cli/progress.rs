//! Terminal progress for a persona run.

use std::sync::Mutex;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use personagen_core::fetch::progress::FetchProgress;
use personagen_core::service::persona::RunObserver;
use personagen_types::record::RecordKind;

/// Progress bars per listing, then a spinner while the model runs.
///
/// Bars draw to stderr and hide themselves when it is not a terminal.
pub struct CliProgress {
    quiet: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            bar: Mutex::new(None),
        }
    }

    fn new_bar(&self, len: Option<u64>) -> ProgressBar {
        let bar = match len {
            Some(len) => ProgressBar::new(len),
            None => ProgressBar::new_spinner(),
        };
        if self.quiet {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        bar
    }

    fn replace(&self, bar: Option<ProgressBar>) {
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(old) = slot.take() {
                old.finish_and_clear();
            }
            *slot = bar;
        }
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(slot) = self.bar.lock() {
            if let Some(bar) = slot.as_ref() {
                f(bar);
            }
        }
    }

    /// Clear whatever is still on screen.
    pub fn clear(&self) {
        self.replace(None);
    }
}

impl FetchProgress for CliProgress {
    fn started(&self, kind: RecordKind, limit: usize) {
        let bar = self.new_bar(Some(limit as u64));
        bar.set_style(
            ProgressStyle::with_template("{msg:18} [{bar:30.cyan/blue}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        bar.set_message(kind.progress_label());
        self.replace(Some(bar));
    }

    fn advanced(&self, _kind: RecordKind, fetched: usize) {
        self.with_bar(|bar| bar.set_position(fetched as u64));
    }

    fn finished(&self, kind: RecordKind, fetched: usize) {
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(bar) = slot.take() {
                bar.finish_with_message(format!("{} ({fetched})", kind.progress_label()));
            }
        }
    }
}

impl RunObserver for CliProgress {
    fn generating(&self) {
        if !self.quiet {
            println!("Generating persona with LLM...");
        }

        let spinner = self.new_bar(None);
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(style("waiting for completion").dim().to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.replace(Some(spinner));
    }
}
