use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 80;

/// Spinner shown while a file is being read and parsed.
pub fn loading_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner()
        .with_style(spinner_style())
        .with_message(message.to_string());
    pb.set_draw_target(ProgressDrawTarget::stderr());
    pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
    pb
}

/// Bar advanced once per model during multi-model computations.
pub fn model_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total).with_style(bar_style());
    pb.set_draw_target(ProgressDrawTarget::stderr());
    pb
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg}")
        .expect("Failed to create spinner style template")
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} models {msg}")
        .expect("Failed to create bar style template")
}
