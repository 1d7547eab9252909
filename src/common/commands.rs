use crate::common::types::Submission;

/// Commands the UI sends down to the relay task.
#[derive(Debug, Clone)]
pub enum RelayCommand {
    Submit(Submission),
}
