use gloo::console::{log, warn};
use yew::Callback;

use crate::constraints::{self, ConstraintError};
use crate::draft::SubmissionDraft;

/// Where a finished draft goes. Nothing is sent anywhere yet; the default
/// sink just writes the record to the console.
pub fn log_sink() -> Callback<SubmissionDraft> {
    Callback::from(|draft: SubmissionDraft| {
        log!("Form submitted:", draft.to_json());
    })
}

/// Runs after the browser has accepted the form. The draft is handed over
/// as-is and the visible inputs are left alone.
pub fn submit(draft: &SubmissionDraft, sink: &Callback<SubmissionDraft>) -> Result<(), ConstraintError> {
    constraints::check(draft)?;
    sink.emit(draft.clone());
    Ok(())
}

/// Same as [`submit`], but a refused draft is only reported to the console.
pub fn submit_or_warn(draft: &SubmissionDraft, sink: &Callback<SubmissionDraft>) {
    if let Err(e) = submit(draft, sink) {
        warn!("Submission refused:", e.to_string());
    }
}
