pub mod pipeline;
pub mod selection;
pub mod writer;

pub use pipeline::{run, RunSummary};
pub use selection::select_lowest;
pub use writer::{format_record, write_records, write_results};
