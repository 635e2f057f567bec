//! Progress reporting while waiting for the model

use indicatif::{ProgressBar, ProgressStyle};
use solar_application::TurnNotifier;
use solar_domain::Model;
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner for the duration of a model call
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnNotifier for ProgressReporter {
    fn on_model_call_start(&self, model: &Model) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("Asking {}...", model));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinner) = self.spinner.lock() {
            *spinner = Some(pb);
        }
    }

    fn on_model_call_end(&self, _model: &Model, _success: bool) {
        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(pb) = spinner.take()
        {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_model_call_start(&Model::Gemini15Pro);
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_model_call_end(&Model::Gemini15Pro, true);
        assert!(reporter.spinner.lock().unwrap().is_none());

        // A stray end without a start is harmless.
        reporter.on_model_call_end(&Model::Gemini15Pro, false);
    }
}
