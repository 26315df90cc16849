//! Pure view models for the file list and the validation report.
//!
//! Components only turn these into DOM nodes, so everything that decides
//! *what* is shown lives here and is testable without a document.

use crate::selection::Candidate;
use crate::types::{QcReport, ValidationResult};

/// Shown in a card whose invoice has neither errors nor warnings.
pub const NO_ISSUES_TEXT: &str = "No issues found - Invoice passed all validation checks";

// =============================================================================
// File list
// =============================================================================

/// One staged file as displayed.
#[derive(Clone, Debug, PartialEq)]
pub struct FileRow {
    /// Current position in the selection, used by the remove button.
    pub index: usize,
    pub name: String,
    /// Size in megabytes, two decimals.
    pub size_label: String,
}

/// Format a byte count as `"x.xx MB"`.
pub fn format_megabytes(bytes: f64) -> String {
    format!("{:.2} MB", bytes / 1024.0 / 1024.0)
}

/// Build the rows for the current selection.
///
/// Indices come from the slice as it is now, never from a previous render.
pub fn file_rows<F: Candidate>(files: &[F]) -> Vec<FileRow> {
    files
        .iter()
        .enumerate()
        .map(|(index, file)| FileRow {
            index,
            name: file.name(),
            size_label: format_megabytes(file.size_bytes()),
        })
        .collect()
}

// =============================================================================
// Report
// =============================================================================

/// Validity badge of an invoice card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Valid => "VALID",
            Verdict::Invalid => "INVALID",
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            Verdict::Valid => "valid",
            Verdict::Invalid => "invalid",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Verdict::Valid => "✅",
            Verdict::Invalid => "❌",
        }
    }
}

/// Kind of issue section inside a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssueKind {
    Error,
    Warning,
}

impl IssueKind {
    pub fn title(&self) -> &'static str {
        match self {
            IssueKind::Error => "Errors",
            IssueKind::Warning => "Warnings",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            IssueKind::Error => "error",
            IssueKind::Warning => "warning",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            IssueKind::Error => "❌",
            IssueKind::Warning => "⚠️",
        }
    }
}

/// A non-empty list of errors or warnings.
#[derive(Clone, Debug, PartialEq)]
pub struct IssueSection {
    pub kind: IssueKind,
    pub items: Vec<String>,
}

impl IssueSection {
    fn from_items(kind: IssueKind, items: &[String]) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { kind, items: items.to_vec() })
        }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }
}

/// One invoice card.
#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceCard {
    pub invoice_number: String,
    pub verdict: Verdict,
    pub errors: Option<IssueSection>,
    pub warnings: Option<IssueSection>,
}

impl InvoiceCard {
    pub fn from_result(result: &ValidationResult) -> Self {
        Self {
            invoice_number: result.invoice_number.clone(),
            verdict: if result.is_valid { Verdict::Valid } else { Verdict::Invalid },
            errors: IssueSection::from_items(IssueKind::Error, &result.errors),
            warnings: IssueSection::from_items(IssueKind::Warning, &result.warnings),
        }
    }

    /// The "no issues" line shows only when both sections are absent.
    pub fn shows_no_issues(&self) -> bool {
        self.errors.is_none() && self.warnings.is_none()
    }
}

/// Summary block at the top of the report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl Summary {
    /// `"1 Invoice Processed"`, `"3 Invoices Processed"`.
    pub fn badge(&self) -> String {
        let plural = if self.total > 1 { "s" } else { "" };
        format!("{} Invoice{} Processed", self.total, plural)
    }
}

/// Everything the report area displays.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportView {
    pub summary: Summary,
    pub cards: Vec<InvoiceCard>,
}

/// Map a report to its view. Same report, same view.
pub fn build_report_view(report: &QcReport) -> ReportView {
    ReportView {
        summary: Summary {
            total: report.total_invoices,
            valid: report.valid_invoices,
            invalid: report.invalid_invoices,
        },
        cards: report.results.iter().map(InvoiceCard::from_result).collect(),
    }
}

/// Error panel content for a failed submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorPanel {
    pub message: String,
    pub api_url: String,
}

impl ErrorPanel {
    pub fn new(message: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self { message: message.into(), api_url: api_url.into() }
    }

    pub fn hint(&self) -> String {
        format!("Make sure the API server is running on {}", self.api_url)
    }
}

/// What the results area currently holds.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultsView {
    Report(ReportView),
    Failure(ErrorPanel),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::tests::{pdf, StubFile};

    fn sample_report() -> QcReport {
        serde_json::from_str(
            r#"{
                "total_invoices": 2,
                "valid_invoices": 1,
                "invalid_invoices": 1,
                "results": [
                    {"invoice_number": "INV-1", "is_valid": true, "errors": [], "warnings": []},
                    {"invoice_number": "INV-2", "is_valid": false, "errors": ["Total mismatch"], "warnings": []}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_sample_report_view() {
        let view = build_report_view(&sample_report());

        assert_eq!(view.summary, Summary { total: 2, valid: 1, invalid: 1 });
        assert_eq!(view.summary.badge(), "2 Invoices Processed");
        assert_eq!(view.cards.len(), 2);

        let first = &view.cards[0];
        assert_eq!(first.invoice_number, "INV-1");
        assert_eq!(first.verdict.label(), "VALID");
        assert!(first.shows_no_issues());

        let second = &view.cards[1];
        assert_eq!(second.verdict.label(), "INVALID");
        assert!(!second.shows_no_issues());
        let errors = second.errors.as_ref().unwrap();
        assert_eq!(errors.items, vec!["Total mismatch".to_string()]);
        assert_eq!(errors.count(), 1);
        assert!(second.warnings.is_none());
    }

    #[test]
    fn test_warnings_only_card() {
        let result = ValidationResult {
            invoice_number: "INV-3".into(),
            is_valid: true,
            errors: vec![],
            warnings: vec!["Line items sum mismatch".into()],
        };

        let card = InvoiceCard::from_result(&result);

        assert!(card.errors.is_none());
        assert_eq!(card.warnings.as_ref().map(|w| w.kind), Some(IssueKind::Warning));
        assert!(!card.shows_no_issues());
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let report = sample_report();
        assert_eq!(build_report_view(&report), build_report_view(&report));
    }

    #[test]
    fn test_single_invoice_badge_is_singular() {
        let summary = Summary { total: 1, valid: 1, invalid: 0 };
        assert_eq!(summary.badge(), "1 Invoice Processed");
    }

    #[test]
    fn test_file_rows_follow_current_order() {
        let files: Vec<StubFile> = vec![
            StubFile { name: "big.pdf", size: 3.0 * 1024.0 * 1024.0, media_type: "application/pdf" },
            pdf("small.pdf"),
        ];

        let rows = file_rows(&files);

        assert_eq!(rows[0], FileRow { index: 0, name: "big.pdf".into(), size_label: "3.00 MB".into() });
        assert_eq!(rows[1].index, 1);
        assert_eq!(rows[1].size_label, "0.00 MB");
    }

    #[test]
    fn test_error_panel_hint() {
        let panel = ErrorPanel::new("Upload failed", "http://localhost:8000");
        assert_eq!(panel.hint(), "Make sure the API server is running on http://localhost:8000");
    }
}
