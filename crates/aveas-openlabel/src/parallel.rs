//! Bulk conformance checking
//!
//! Documents are independent, so each one is checked on its own rayon task.

use rayon::prelude::*;

use crate::document::Document;
use crate::error::DocumentError;

/// Check many documents concurrently
///
/// Results are returned in input order.
#[must_use]
pub fn check_documents(documents: &[Document]) -> Vec<Result<(), DocumentError>> {
    tracing::debug!(documents = documents.len(), "checking documents in parallel");
    documents
        .par_iter()
        .map(Document::check_conformance)
        .collect()
}

/// Indices of the documents that fail their check
#[must_use]
pub fn failing_documents(documents: &[Document]) -> Vec<usize> {
    check_documents(documents)
        .iter()
        .enumerate()
        .filter_map(|(index, result)| result.is_err().then_some(index))
        .collect()
}
