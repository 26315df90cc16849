//! Staged files waiting to be uploaded.
//!
//! The selection keeps insertion order and never holds two files with the
//! same name. Only PDFs get in.

use std::fmt;

use crate::config::PDF_MEDIA_TYPE;

/// A user-supplied file, as far as the selection cares about it.
pub trait Candidate: Clone {
    /// File name, used as identity (case-sensitive).
    fn name(&self) -> String;
    /// Size in bytes.
    fn size_bytes(&self) -> f64;
    /// Declared media type (`File.type` in the browser).
    fn media_type(&self) -> String;

    fn is_pdf(&self) -> bool {
        self.media_type() == PDF_MEDIA_TYPE
    }
}

impl Candidate for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn size_bytes(&self) -> f64 {
        self.size()
    }

    fn media_type(&self) -> String {
        self.type_()
    }
}

/// Rejected intake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionError {
    /// The batch contained no PDF at all.
    NoPdf,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::NoPdf => write!(f, "Please select PDF files only"),
        }
    }
}

impl std::error::Error for SelectionError {}

/// Ordered, name-unique list of staged PDFs.
#[derive(Clone, Debug)]
pub struct SelectionSet<F> {
    files: Vec<F>,
}

impl<F> Default for SelectionSet<F> {
    fn default() -> Self {
        Self { files: Vec::new() }
    }
}

impl<F: Candidate> SelectionSet<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a batch of files.
    ///
    /// Non-PDFs are dropped. If nothing remains the selection is left
    /// untouched and [`SelectionError::NoPdf`] is returned. Names already
    /// staged (or repeated within the batch) are skipped silently.
    /// Returns how many files were actually appended.
    pub fn add_batch<I>(&mut self, batch: I) -> Result<usize, SelectionError>
    where
        I: IntoIterator<Item = F>,
    {
        let pdfs: Vec<F> = batch.into_iter().filter(|file| file.is_pdf()).collect();
        if pdfs.is_empty() {
            return Err(SelectionError::NoPdf);
        }

        let before = self.files.len();
        for file in pdfs {
            if !self.contains_name(&file.name()) {
                self.files.push(file);
            }
        }
        Ok(self.files.len() - before)
    }

    /// Remove the file at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<F> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.files.iter().any(|file| file.name() == name)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// In-memory stand-in for a browser `File`.
    #[derive(Clone, Debug, PartialEq)]
    pub struct StubFile {
        pub name: &'static str,
        pub size: f64,
        pub media_type: &'static str,
    }

    impl Candidate for StubFile {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn size_bytes(&self) -> f64 {
            self.size
        }

        fn media_type(&self) -> String {
            self.media_type.to_string()
        }
    }

    pub fn pdf(name: &'static str) -> StubFile {
        StubFile { name, size: 1024.0, media_type: "application/pdf" }
    }

    pub fn png(name: &'static str) -> StubFile {
        StubFile { name, size: 2048.0, media_type: "image/png" }
    }

    fn names(set: &SelectionSet<StubFile>) -> Vec<&'static str> {
        set.files().iter().map(|f| f.name).collect()
    }

    #[test]
    fn test_mixed_batch_keeps_only_pdfs() {
        let mut set = SelectionSet::new();
        let added = set.add_batch(vec![pdf("a.pdf"), png("logo.png"), pdf("b.pdf")]).unwrap();

        assert_eq!(added, 2);
        assert_eq!(names(&set), vec!["a.pdf", "b.pdf"]);
    }

    #[test]
    fn test_batch_without_pdf_leaves_selection_unchanged() {
        let mut set = SelectionSet::new();
        set.add_batch(vec![pdf("a.pdf")]).unwrap();

        let result = set.add_batch(vec![png("logo.png"), png("scan.png")]);

        assert_eq!(result, Err(SelectionError::NoPdf));
        assert_eq!(names(&set), vec!["a.pdf"]);
    }

    #[test]
    fn test_duplicate_names_are_skipped() {
        let mut set = SelectionSet::new();
        set.add_batch(vec![pdf("a.pdf"), pdf("b.pdf")]).unwrap();

        let added = set.add_batch(vec![pdf("b.pdf"), pdf("c.pdf")]).unwrap();

        assert_eq!(added, 1);
        assert_eq!(names(&set), vec!["a.pdf", "b.pdf", "c.pdf"]);
    }

    #[test]
    fn test_duplicate_only_batch_is_not_an_error() {
        let mut set = SelectionSet::new();
        set.add_batch(vec![pdf("a.pdf")]).unwrap();

        assert_eq!(set.add_batch(vec![pdf("a.pdf")]), Ok(0));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut set = SelectionSet::new();
        set.add_batch(vec![pdf("a.pdf"), pdf("A.pdf")]).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_repeated_name_within_batch_kept_once() {
        let mut set = SelectionSet::new();
        set.add_batch(vec![pdf("a.pdf"), pdf("a.pdf")]).unwrap();
        assert_eq!(names(&set), vec!["a.pdf"]);
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut set = SelectionSet::new();
        set.add_batch(vec![pdf("a.pdf"), pdf("b.pdf"), pdf("c.pdf"), pdf("d.pdf")]).unwrap();

        let removed = set.remove(1);

        assert_eq!(removed.map(|f| f.name), Some("b.pdf"));
        assert_eq!(names(&set), vec!["a.pdf", "c.pdf", "d.pdf"]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut set = SelectionSet::new();
        set.add_batch(vec![pdf("a.pdf")]).unwrap();

        assert!(set.remove(3).is_none());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_successive_removals_use_current_indices() {
        let mut set = SelectionSet::new();
        set.add_batch(vec![pdf("a.pdf"), pdf("b.pdf"), pdf("c.pdf")]).unwrap();

        set.remove(0);
        set.remove(0);

        assert_eq!(names(&set), vec!["c.pdf"]);
    }
}
