mod dataset;
mod pipeline;

pub use dataset::{Dataset, RawRecord, load_embedded};
pub use pipeline::derive_working_set;
