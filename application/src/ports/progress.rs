//! Progress notification port
//!
//! Lets the presentation layer show activity while a model call is in flight.

use solar_domain::Model;

/// Callback for progress updates during turn processing
///
/// Implementations live in the presentation layer (spinner, plain text, ...).
pub trait TurnNotifier: Send + Sync {
    /// Called right before the model is contacted
    fn on_model_call_start(&self, model: &Model);

    /// Called when the model call returned or faulted
    fn on_model_call_end(&self, model: &Model, success: bool);
}

/// No-op notifier for when progress reporting is not needed
pub struct NoProgress;

impl TurnNotifier for NoProgress {
    fn on_model_call_start(&self, _model: &Model) {}
    fn on_model_call_end(&self, _model: &Model, _success: bool) {}
}
