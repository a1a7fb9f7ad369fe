use atelier_db::Database;
use atelier_mailer::Notifier;
use atelier_types::api::{ContactRequest, SubmissionOutcome};
use atelier_types::models::SERVICE_NOT_SPECIFIED;
use tracing::{error, warn};

/// Run one contact submission end to end: validate, persist, notify both
/// parties, classify. Blocking (SQLite + SMTP), so callers run it under
/// `spawn_blocking`. Never panics and never returns an error; every failure
/// downgrades to an outcome.
pub fn process_submission(
    db: &Database,
    notifier: &dyn Notifier,
    req: &ContactRequest,
) -> SubmissionOutcome {
    let name = req.name.trim();
    let email = req.email.trim();
    let message = req.message.trim();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return SubmissionOutcome::Rejected;
    }

    let service = match req.service.trim() {
        "" => SERVICE_NOT_SPECIFIED,
        trimmed => trimmed,
    };

    if let Err(err) = db.insert_submission(name, email, service, message) {
        error!("Failed to persist submission from {}: {}", email, err);
        return SubmissionOutcome::Failed;
    }

    // Both sends are attempted regardless of the other's outcome. The admin
    // notification is the priority signal; the confirmation is courtesy.
    let admin_ok = notifier.notify_admin(name, email, service, message);
    let submitter_ok = notifier.notify_submitter(name, email, service);

    match (admin_ok, submitter_ok) {
        (true, true) => SubmissionOutcome::Success,
        (true, false) => SubmissionOutcome::PartialSuccess,
        (false, _) => {
            warn!("Submission from {} saved but admin was not notified", email);
            SubmissionOutcome::SavedButNotified
        }
    }
}
