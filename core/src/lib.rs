pub mod error;
pub mod index;
pub mod query;
pub mod search;
pub mod stopwords;
pub mod tokenizer;

pub use error::IndexError;
pub use index::{IndexStats, SearchIndex};
pub use query::Query;
pub use search::{SearchHit, MAX_RESULT_DOCUMENT_COUNT};
pub use stopwords::StopWords;

pub type DocId = u32;
