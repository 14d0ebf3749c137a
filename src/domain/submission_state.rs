/// Lifecycle of one contact form instance.
///
/// ```text
/// Idle ──submit──> Sending ──succeed──> Succeeded ──reset──> Idle
///                  │   ^
///                fail  └──submit── Failed(reason)
///                  └──────────────> Failed(reason)
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed(String),
}

/// Which of the mutually exclusive contact views to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Form,
    Sending,
    Success,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("cannot {action} a submission that is {state}.")]
pub struct TransitionError {
    action: &'static str,
    state: &'static str,
}

impl SubmissionState {
    fn name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Sending => "sending",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed(_) => "failed",
        }
    }

    fn reject(&self, action: &'static str) -> TransitionError {
        TransitionError {
            action,
            state: self.name(),
        }
    }

    /// `Idle` or `Failed` (a retry) to `Sending`.
    pub fn submit(&mut self) -> Result<(), TransitionError> {
        match self {
            SubmissionState::Idle | SubmissionState::Failed(_) => {
                *self = SubmissionState::Sending;
                Ok(())
            }
            _ => Err(self.reject("submit")),
        }
    }

    pub fn succeed(&mut self) -> Result<(), TransitionError> {
        match self {
            SubmissionState::Sending => {
                *self = SubmissionState::Succeeded;
                Ok(())
            }
            _ => Err(self.reject("complete")),
        }
    }

    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), TransitionError> {
        match self {
            SubmissionState::Sending => {
                *self = SubmissionState::Failed(reason.into());
                Ok(())
            }
            _ => Err(self.reject("fail")),
        }
    }

    /// "Send another message". Idempotent.
    pub fn reset(&mut self) -> Result<(), TransitionError> {
        match self {
            SubmissionState::Succeeded | SubmissionState::Idle => {
                *self = SubmissionState::Idle;
                Ok(())
            }
            _ => Err(self.reject("reset")),
        }
    }

    pub fn view(&self) -> View {
        match self {
            SubmissionState::Idle | SubmissionState::Failed(_) => View::Form,
            SubmissionState::Sending => View::Sending,
            SubmissionState::Succeeded => View::Success,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(reason) => Some(reason.as_str()),
            _ => None,
        }
    }

    pub fn submit_disabled(&self) -> bool {
        matches!(self, SubmissionState::Sending)
    }
}
