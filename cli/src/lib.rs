use anyhow::{Context, Result};
use clap::ValueEnum;
use search_core::{IndexStats, Query, SearchHit, SearchIndex, MAX_RESULT_DOCUMENT_COUNT};
use serde::Serialize;
use std::io::{BufRead, Lines, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `{ document_id = 0, relevance = 0.138629 }` per hit
    #[default]
    Text,
    /// One JSON object per query
    Json,
}

#[derive(Serialize)]
pub struct QueryResponse<'a> {
    pub query: &'a str,
    /// Matches before the result list was cut to the top hits.
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

/// Next line without its line terminator. A missing line reads as the empty string.
fn read_line<R: BufRead>(lines: &mut Lines<R>) -> Result<String> {
    match lines.next() {
        Some(line) => {
            let line = line.context("failed to read input line")?;
            Ok(line.strip_suffix('\r').map(str::to_string).unwrap_or(line))
        }
        None => Ok(String::new()),
    }
}

/// Read stop words, a document count and that many documents, in that order, one per line.
/// Documents get ids 0..count in input order. Input ending before `count` documents is an error.
pub fn load_index<R: BufRead>(lines: &mut Lines<R>) -> Result<SearchIndex> {
    let stop_words = read_line(lines)?;
    let count_line = read_line(lines)?;
    let count: u32 = count_line
        .trim()
        .parse()
        .with_context(|| format!("invalid document count: {count_line:?}"))?;

    let mut index = SearchIndex::new();
    index.set_stop_words(&stop_words)?;
    for read in 0..count {
        let line = lines
            .next()
            .with_context(|| format!("input ended after {read} of {count} documents"))?
            .context("failed to read document line")?;
        let text = line.strip_suffix('\r').unwrap_or(&line);
        index.push_document(text)?;
    }
    let stats = index.stats();
    tracing::info!(
        num_docs = stats.num_docs,
        num_terms = stats.num_terms,
        num_stop_words = stats.num_stop_words,
        "index loaded"
    );
    Ok(index)
}

/// Format like a default C++ output stream: six significant digits, fixed or scientific,
/// whichever `%g` picks, with trailing zeros removed.
pub fn format_relevance(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value.abs());
    }
    let sci = format!("{value:.5e}");
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };
    if (-4..6).contains(&exp) {
        trim_fraction(&format!("{:.*}", (5 - exp) as usize, value)).to_string()
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.') } else { s }
}

pub fn format_hit(hit: &SearchHit) -> String {
    format!("{{ document_id = {}, relevance = {} }}", hit.doc_id, format_relevance(hit.relevance))
}

/// Rank every match for `raw_query` and keep the top [`MAX_RESULT_DOCUMENT_COUNT`].
pub fn answer<'a>(index: &SearchIndex, raw_query: &'a str) -> QueryResponse<'a> {
    let mut results = index.find_all_documents(&Query::parse(raw_query, index.stop_words()));
    let total_hits = results.len();
    results.truncate(MAX_RESULT_DOCUMENT_COUNT);
    QueryResponse { query: raw_query, total_hits, results }
}

pub fn write_response<W: Write>(
    out: &mut W,
    response: &QueryResponse,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for hit in &response.results {
                writeln!(out, "{}", format_hit(hit))?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string(response)?)?;
        }
    }
    Ok(())
}

/// Load the corpus, then answer the next line as a query, or every remaining line when
/// `all_queries` is set.
pub fn run_queries<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    format: OutputFormat,
    all_queries: bool,
) -> Result<()> {
    let mut lines = input.lines();
    let index = load_index(&mut lines)?;
    if all_queries {
        for line in lines {
            let line = line.context("failed to read query line")?;
            let query = line.strip_suffix('\r').unwrap_or(&line);
            write_response(out, &answer(&index, query), format)?;
        }
    } else {
        let query = read_line(&mut lines)?;
        write_response(out, &answer(&index, &query), format)?;
    }
    Ok(())
}

pub fn run_stats<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<IndexStats> {
    let index = load_index(&mut input.lines())?;
    let stats = index.stats();
    writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relevance_uses_six_significant_digits() {
        assert_eq!(format_relevance(0.2 * 2f64.ln()), "0.138629");
        assert_eq!(format_relevance(0.5), "0.5");
        assert_eq!(format_relevance(0.0), "0");
        assert_eq!(format_relevance(1.0), "1");
        assert_eq!(format_relevance(123456.7), "123457");
        assert_eq!(format_relevance(1234567.0), "1.23457e+06");
        assert_eq!(format_relevance(0.0001), "0.0001");
        assert_eq!(format_relevance(0.00001234), "1.234e-05");
    }

    #[test]
    fn hit_line_format() {
        let hit = SearchHit { doc_id: 3, relevance: 0.25 };
        assert_eq!(format_hit(&hit), "{ document_id = 3, relevance = 0.25 }");
    }

    #[test]
    fn answer_counts_hits_beyond_the_cap() {
        let mut index = SearchIndex::new();
        for i in 0..7 {
            index.push_document(&format!("cat doc{i}")).unwrap();
        }
        index.push_document("dog").unwrap();
        let response = answer(&index, "cat");
        assert_eq!(response.total_hits, 7);
        assert_eq!(response.results.len(), MAX_RESULT_DOCUMENT_COUNT);
        assert_eq!(response.results, index.find_top_documents("cat"));
    }

    #[test]
    fn short_input_is_an_error() {
        let input = "in\n4000000000\ncat\ndog\n";
        let err = load_index(&mut input.as_bytes().lines()).unwrap_err();
        assert_eq!(err.to_string(), "input ended after 2 of 4000000000 documents");
    }

    #[test]
    fn bad_count_is_an_error() {
        let input = "in\nmany\ncat\n";
        let err = load_index(&mut input.as_bytes().lines()).unwrap_err();
        assert!(err.to_string().contains("invalid document count"));
    }
}
