//! Turning a template and a data record into HTML.
//!
//! The flow is data parsing, per-element namespace merging, template
//! expansion, and markdown conversion, composed by [`Pipeline`].

mod data;
mod loop_ctx;
mod markdown;
mod merge;
mod pipeline;
mod template;

pub use data::parse_record;
pub use pipeline::Pipeline;
