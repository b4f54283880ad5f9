pub mod config;
pub mod errors;
pub mod extract;
pub mod filters;
pub mod metrics;
pub mod report;
pub mod results;
pub mod search;
pub mod walk;

pub use config::SearchConfig;
pub use errors::{SearchError, SearchResult};
pub use extract::{LopdfExtractor, PageText, TextExtractor};
pub use report::{Reporter, SilentReporter};
pub use results::{RunSummary, SearchOutcome, SearchReport};
pub use search::{search, search_with};
pub use walk::find_pdfs;
