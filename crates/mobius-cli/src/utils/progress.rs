use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use mobiusview::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

/// Bar state for the render phase currently being drawn.
struct PhaseBar {
    bar: ProgressBar,
    phase: &'static str,
    warnings: usize,
}

impl PhaseBar {
    fn handle(&mut self, progress: Progress) {
        match progress {
            Progress::PhaseStart { name } => {
                self.phase = name;
                self.warnings = 0;
                self.bar.reset();
                self.bar.set_length(0);
                self.bar.set_style(spinner_style());
                self.bar.set_message(name);
                self.bar
                    .enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
            }
            Progress::TaskStart { total_steps } => {
                self.bar.disable_steady_tick();
                self.bar.reset();
                self.bar.set_style(bar_style());
                self.bar.set_length(total_steps);
                self.bar.set_message(self.phase);
            }
            Progress::TaskIncrement => self.bar.inc(1),
            Progress::TaskFinish => {
                let total = self.bar.length().unwrap_or(0);
                self.bar.set_position(total.max(self.bar.position()));
                self.bar.finish();
            }
            Progress::Warning(msg) => {
                self.warnings += 1;
                self.bar.println(format!("  ⚠ {}", msg));
            }
            Progress::Message(msg) => self.bar.println(format!("  {}", msg)),
            Progress::PhaseFinish => {
                self.bar.disable_steady_tick();
                self.bar.finish_with_message(self.summary());
            }
        }
    }

    fn summary(&self) -> String {
        match self.warnings {
            0 => format!("✓ {}", self.phase),
            1 => format!("⚠ {} (1 warning)", self.phase),
            n => format!("⚠ {} ({} warnings)", self.phase, n),
        }
    }
}

/// Draws one bar per render phase on stderr and tallies the degenerate
/// shapes reported along the way.
#[derive(Clone)]
pub struct CliProgressHandler {
    state: Arc<Mutex<PhaseBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// A handler whose bar is never drawn, for `--quiet` runs.
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target).with_style(spinner_style());
        bar.finish_and_clear();
        Self {
            state: Arc::new(Mutex::new(PhaseBar {
                bar,
                phase: "",
                warnings: 0,
            })),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let state = self.state.clone();
        Box::new(move |progress: Progress| match state.lock() {
            Ok(mut phase_bar) => phase_bar.handle(progress),
            Err(_) => warn!("Progress state mutex was poisoned; dropping update."),
        })
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg:<10} [{bar:32.cyan/blue}] {pos}/{len} shapes ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .with_key("eta", |state: &ProgressState, w: &mut dyn std::fmt::Write| {
            let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
        })
        .progress_chars("=> ")
}
