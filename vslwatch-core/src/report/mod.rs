mod histogram;
mod render;
mod stats;
mod types;


pub use histogram::Bucket;
pub use render::{
    RenderOptions, render_summary, render_summary_json, render_transaction,
    render_transaction_json,
};
pub use stats::{StatsAggregator, Summary};
pub use types::TransactionReport;
