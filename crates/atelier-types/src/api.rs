use serde::Deserialize;

// -- Contact form --

/// Inbound contact form fields. Every field defaults to empty so a missing
/// field classifies as a rejection instead of a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub message: String,
}

// -- Outcome classification --

/// Terminal state of one contact submission. Carried back to the contact
/// page through the redirect's `status` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// A required field was empty; nothing was persisted, no mail attempted.
    Rejected,
    /// Persistence failed; no mail attempted.
    Failed,
    /// Row persisted, both notifications delivered.
    Success,
    /// Row persisted, admin notified, submitter confirmation failed.
    PartialSuccess,
    /// Row persisted but the admin notification failed.
    SavedButNotified,
}

impl SubmissionOutcome {
    /// Stable short code used in the redirect query string.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Rejected => "invalid",
            Self::Failed => "error",
            Self::Success => "success",
            Self::PartialSuccess => "partial",
            Self::SavedButNotified => "saved",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "invalid" => Some(Self::Rejected),
            "error" => Some(Self::Failed),
            "success" => Some(Self::Success),
            "partial" => Some(Self::PartialSuccess),
            "saved" => Some(Self::SavedButNotified),
            _ => None,
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Rejected => "Please fill all required fields",
            Self::Failed => "Something went wrong, please try again",
            Self::Success => "Message sent successfully!",
            Self::PartialSuccess => "Message sent, your confirmation email may be delayed",
            Self::SavedButNotified => "Message saved, email issue detected",
        }
    }

    /// Presentation class for the flash banner.
    pub fn severity(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::PartialSuccess | Self::SavedButNotified => "warning",
            Self::Rejected | Self::Failed => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for outcome in [
            SubmissionOutcome::Rejected,
            SubmissionOutcome::Failed,
            SubmissionOutcome::Success,
            SubmissionOutcome::PartialSuccess,
            SubmissionOutcome::SavedButNotified,
        ] {
            assert_eq!(SubmissionOutcome::from_code(outcome.code()), Some(outcome));
        }
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(SubmissionOutcome::from_code("bogus"), None);
    }
}
