use crate::error::IndexError;
use crate::stopwords::StopWords;
use crate::DocId;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// In-memory TF-IDF index over a static corpus.
///
/// Stop words are configured first, then documents are ingested one at a time, then queries run
/// against the finished index (see [`SearchIndex::find_top_documents`]). Documents keep no text,
/// only the statistics derived from it.
#[derive(Debug, Default)]
pub struct SearchIndex {
    pub(crate) stop_words: StopWords,
    /// term -> ids of documents containing it at least once
    pub(crate) documents: HashMap<String, BTreeSet<DocId>>,
    /// term -> doc id -> occurrences / filtered document length
    pub(crate) term_freqs: HashMap<String, BTreeMap<DocId, f64>>,
    /// doc id -> token count after stop-word removal
    pub(crate) doc_lengths: BTreeMap<DocId, usize>,
    pub(crate) document_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub num_docs: u32,
    pub num_terms: usize,
    pub num_stop_words: usize,
    pub num_postings: usize,
    pub empty_docs: usize,
}

impl SearchIndex {
    pub fn new() -> Self { Self::default() }

    pub fn with_stop_words(text: &str) -> Self {
        Self { stop_words: StopWords::from_text(text), ..Self::default() }
    }

    /// Add every token of `text` to the stop-word set. Rejected once a document was ingested,
    /// since already indexed documents were filtered with the old set.
    pub fn set_stop_words(&mut self, text: &str) -> Result<(), IndexError> {
        if self.document_count > 0 {
            return Err(IndexError::StopWordsAfterIngest { documents: self.document_count });
        }
        self.stop_words.extend_from_text(text);
        Ok(())
    }

    pub fn stop_words(&self) -> &StopWords { &self.stop_words }

    /// Ingest a document under a caller-chosen id. Ids may only be used once.
    pub fn add_document(&mut self, id: DocId, text: &str) -> Result<(), IndexError> {
        if self.doc_lengths.contains_key(&id) {
            return Err(IndexError::DuplicateDocument(id));
        }
        self.ingest(id, text);
        Ok(())
    }

    /// Ingest a document under the next id: one past the largest id seen so far, 0 for an empty
    /// index. Fails once `DocId::MAX` is taken.
    pub fn push_document(&mut self, text: &str) -> Result<DocId, IndexError> {
        let id = self.next_doc_id()?;
        self.ingest(id, text);
        Ok(id)
    }

    fn next_doc_id(&self) -> Result<DocId, IndexError> {
        match self.doc_lengths.last_key_value() {
            None => Ok(0),
            Some((&last, _)) => last.checked_add(1).ok_or(IndexError::DocIdsExhausted),
        }
    }

    fn ingest(&mut self, id: DocId, text: &str) {
        self.document_count += 1;
        let words = self.stop_words.split_into_words_no_stop(text);
        self.doc_lengths.insert(id, words.len());
        if words.is_empty() {
            // No tokens left to divide by: the document only counts towards N in the IDF.
            tracing::warn!(doc_id = id, "document is empty after stop-word filtering");
            return;
        }

        let doc_len = words.len();
        let mut counts: HashMap<String, u32> = HashMap::new();
        for word in words {
            *counts.entry(word).or_insert(0) += 1;
        }
        let num_terms = counts.len();
        for (word, count) in counts {
            self.documents.entry(word.clone()).or_default().insert(id);
            let tf = count as f64 / doc_len as f64;
            *self.term_freqs.entry(word).or_default().entry(id).or_insert(0.0) += tf;
        }
        tracing::debug!(doc_id = id, doc_len, num_terms, "ingested document");
    }

    pub fn document_count(&self) -> u32 { self.document_count }

    pub fn term_count(&self) -> usize { self.documents.len() }

    pub fn contains_document(&self, id: DocId) -> bool { self.doc_lengths.contains_key(&id) }

    /// Token count of a document after stop-word removal.
    pub fn document_length(&self, id: DocId) -> Option<usize> { self.doc_lengths.get(&id).copied() }

    pub fn documents_with_term(&self, term: &str) -> Option<&BTreeSet<DocId>> {
        self.documents.get(term)
    }

    pub fn term_frequency(&self, term: &str, id: DocId) -> Option<f64> {
        self.term_freqs.get(term)?.get(&id).copied()
    }

    /// `ln(N / df)`. `None` for terms that were never indexed, so df is never zero here.
    pub fn inverse_document_frequency(&self, term: &str) -> Option<f64> {
        let df = self.term_freqs.get(term)?.len();
        if df == 0 {
            return None;
        }
        Some((self.document_count as f64 / df as f64).ln())
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            num_docs: self.document_count,
            num_terms: self.documents.len(),
            num_stop_words: self.stop_words.len(),
            num_postings: self.documents.values().map(BTreeSet::len).sum(),
            empty_docs: self.doc_lengths.values().filter(|&&len| len == 0).count(),
        }
    }
}
