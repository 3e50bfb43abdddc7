use crate::stopwords::StopWords;
use std::collections::BTreeSet;

/// A parsed free-text query. Plus-terms score documents, minus-terms exclude them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_terms: BTreeSet<String>,
    pub minus_terms: BTreeSet<String>,
}

impl Query {
    /// Stop words are matched against the raw token, before a leading `-` is stripped, so `-the`
    /// survives as a minus-term even when `the` is a stop word. A lone `-` becomes the empty
    /// minus-term, which matches nothing.
    pub fn parse(raw_query: &str, stop_words: &StopWords) -> Self {
        let mut query = Query::default();
        for word in stop_words.split_into_words_no_stop(raw_query) {
            match word.strip_prefix('-') {
                Some(minus) => { query.minus_terms.insert(minus.to_string()); }
                None => { query.plus_terms.insert(word); }
            }
        }
        query
    }

    /// True when nothing could score: a query without plus-terms never returns results.
    pub fn is_empty(&self) -> bool { self.plus_terms.is_empty() }
}
