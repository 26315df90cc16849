//! Upload controller: selection plus submission state machine.
//!
//! ```text
//! Idle ──begin_submission──▶ Busy ──finish_submission──▶ Idle
//!   ▲
//!   └── precondition failure (no state change)
//! ```
//!
//! The controller owns no browser state, so every transition can be
//! exercised natively. Components hold it in a signal and perform the
//! side effects (alerts, requests, DOM updates) it asks for.

use std::fmt;

use crate::selection::{Candidate, SelectionError, SelectionSet};

/// Submission phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Busy,
}

/// Why a submission did not start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// A submission is already in flight.
    AlreadyBusy,
    /// Nothing staged.
    NoSelection,
    /// More files staged than the backend accepts at once.
    TooManyFiles { max: usize, selected: usize },
}

impl SubmitError {
    /// Whether the user should see a blocking notice for this error.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, SubmitError::AlreadyBusy)
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::AlreadyBusy => write!(f, "An upload is already in progress"),
            SubmitError::NoSelection => write!(f, "Please select PDF files to upload"),
            SubmitError::TooManyFiles { max, .. } => {
                write!(f, "Please upload maximum {} PDFs at a time for better performance", max)
            }
        }
    }
}

impl std::error::Error for SubmitError {}

/// How a submission ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

#[derive(Clone, Debug)]
pub struct UploadController<F> {
    selection: SelectionSet<F>,
    phase: Phase,
    max_files: usize,
}

impl<F: Candidate> UploadController<F> {
    pub fn new(max_files: usize) -> Self {
        Self {
            selection: SelectionSet::new(),
            phase: Phase::Idle,
            max_files,
        }
    }

    pub fn selection(&self) -> &SelectionSet<F> {
        &self.selection
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Busy
    }

    pub fn max_files(&self) -> usize {
        self.max_files
    }

    /// Submit control state: enabled iff something is staged and idle.
    pub fn can_submit(&self) -> bool {
        !self.selection.is_empty() && !self.is_busy()
    }

    /// Stage files from the picker or a drop.
    pub fn add_files<I>(&mut self, batch: I) -> Result<usize, SelectionError>
    where
        I: IntoIterator<Item = F>,
    {
        self.selection.add_batch(batch)
    }

    /// Unstage the file at `index`.
    pub fn remove_file(&mut self, index: usize) -> Option<F> {
        self.selection.remove(index)
    }

    /// Check preconditions and enter [`Phase::Busy`].
    ///
    /// Returns the files to upload. On error the controller is unchanged.
    pub fn begin_submission(&mut self) -> Result<Vec<F>, SubmitError> {
        if self.is_busy() {
            return Err(SubmitError::AlreadyBusy);
        }
        if self.selection.is_empty() {
            return Err(SubmitError::NoSelection);
        }
        if self.selection.len() > self.max_files {
            return Err(SubmitError::TooManyFiles {
                max: self.max_files,
                selected: self.selection.len(),
            });
        }

        self.phase = Phase::Busy;
        Ok(self.selection.files().to_vec())
    }

    /// Leave [`Phase::Busy`]. A successful upload clears the selection;
    /// a failed one keeps it for retry.
    pub fn finish_submission(&mut self, outcome: Outcome) {
        if outcome == Outcome::Success {
            self.selection.clear();
        }
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_FILES_PER_UPLOAD;
    use crate::selection::tests::{pdf, png, StubFile};

    fn controller_with(names: &[&'static str]) -> UploadController<StubFile> {
        let mut controller = UploadController::new(MAX_FILES_PER_UPLOAD);
        controller.add_files(names.iter().copied().map(pdf)).unwrap();
        controller
    }

    #[test]
    fn test_empty_submission_is_rejected() {
        let mut controller: UploadController<StubFile> = UploadController::new(MAX_FILES_PER_UPLOAD);

        assert_eq!(controller.begin_submission(), Err(SubmitError::NoSelection));
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(!controller.can_submit());
    }

    #[test]
    fn test_five_files_exceed_cap() {
        let mut controller = controller_with(&["1.pdf", "2.pdf", "3.pdf", "4.pdf", "5.pdf"]);

        let err = controller.begin_submission().unwrap_err();

        assert_eq!(err, SubmitError::TooManyFiles { max: 4, selected: 5 });
        assert_eq!(err.to_string(), "Please upload maximum 4 PDFs at a time for better performance");
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(controller.selection().len(), 5);
    }

    #[test]
    fn test_four_files_proceed() {
        let mut controller = controller_with(&["1.pdf", "2.pdf", "3.pdf", "4.pdf"]);

        let files = controller.begin_submission().unwrap();

        assert_eq!(files.len(), 4);
        assert!(controller.is_busy());
        assert!(!controller.can_submit());
    }

    #[test]
    fn test_busy_guard_blocks_reentry() {
        let mut controller = controller_with(&["a.pdf"]);
        controller.begin_submission().unwrap();

        let err = controller.begin_submission().unwrap_err();

        assert_eq!(err, SubmitError::AlreadyBusy);
        assert!(!err.is_user_facing());
    }

    #[test]
    fn test_success_clears_selection_and_disables_submit() {
        let mut controller = controller_with(&["a.pdf", "b.pdf"]);
        controller.begin_submission().unwrap();

        controller.finish_submission(Outcome::Success);

        assert_eq!(controller.phase(), Phase::Idle);
        assert!(controller.selection().is_empty());
        assert!(!controller.can_submit());
    }

    #[test]
    fn test_failure_keeps_selection_for_retry() {
        let mut controller = controller_with(&["a.pdf", "b.pdf"]);
        controller.begin_submission().unwrap();

        controller.finish_submission(Outcome::Failure);

        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(controller.selection().len(), 2);
        assert!(controller.can_submit());
        assert!(controller.begin_submission().is_ok());
    }

    #[test]
    fn test_non_pdf_intake_leaves_state_alone() {
        let mut controller = controller_with(&["a.pdf"]);

        assert_eq!(controller.add_files(vec![png("x.png")]), Err(SelectionError::NoPdf));
        assert_eq!(controller.selection().len(), 1);
        assert!(controller.can_submit());
    }

    #[test]
    fn test_removing_last_file_disables_submit() {
        let mut controller = controller_with(&["a.pdf"]);

        controller.remove_file(0);

        assert!(!controller.can_submit());
    }
}
