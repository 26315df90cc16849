//! UI Components for the Invoice QC application.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with backend status
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - PDF selection with drag & drop, submission
//! - [`FileList`] - Staged files with remove buttons
//! - [`ResultsSection`] - Validation report or error panel

mod file_list;
mod footer;
mod header;
mod hero;
mod report;
mod upload;

pub use file_list::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use report::*;
pub use upload::*;
