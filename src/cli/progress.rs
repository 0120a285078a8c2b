use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown on stderr while issues are submitted.
pub struct SubmitProgress {
    bar: ProgressBar,
}

impl SubmitProgress {
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.magenta} [{pos}/{len}] {msg}") {
            bar.set_style(style);
        }
        bar.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { bar }
    }

    pub fn set_title(&self, title: &str) {
        self.bar.set_message(format!("Reporting... [{}]", title));
    }

    pub fn inc(&self) {
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
