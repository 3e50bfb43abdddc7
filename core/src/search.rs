use crate::index::SearchIndex;
use crate::query::Query;
use crate::DocId;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub relevance: f64,
}

impl SearchIndex {
    /// Rank documents for `raw_query` by summed TF-IDF over its plus-terms, drop documents holding
    /// any minus-term, and return at most [`MAX_RESULT_DOCUMENT_COUNT`] hits.
    pub fn find_top_documents(&self, raw_query: &str) -> Vec<SearchHit> {
        let query = Query::parse(raw_query, &self.stop_words);
        let mut hits = self.find_all_documents(&query);
        hits.truncate(MAX_RESULT_DOCUMENT_COUNT);
        hits
    }

    /// Every matching document, best first. Equal relevance falls back to ascending doc id.
    pub fn find_all_documents(&self, query: &Query) -> Vec<SearchHit> {
        let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();
        for term in &query.plus_terms {
            // Terms never ingested have no IDF and contribute nothing.
            let (Some(idf), Some(per_doc)) = (self.inverse_document_frequency(term), self.term_freqs.get(term)) else {
                continue;
            };
            for (&doc_id, &tf) in per_doc {
                *relevance.entry(doc_id).or_insert(0.0) += tf * idf;
            }
        }

        for term in &query.minus_terms {
            if let Some(doc_ids) = self.documents.get(term) {
                for doc_id in doc_ids {
                    relevance.remove(doc_id);
                }
            }
        }

        let mut hits: Vec<SearchHit> = relevance
            .into_iter()
            .map(|(doc_id, relevance)| SearchHit { doc_id, relevance })
            .collect();
        hits.sort_by(|a, b| {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.doc_id.cmp(&b.doc_id))
        });
        tracing::debug!(
            plus = query.plus_terms.len(),
            minus = query.minus_terms.len(),
            total_hits = hits.len(),
            "evaluated query"
        );
        hits
    }
}
