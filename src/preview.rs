//! Live preview: change sampling and the page it publishes.

mod coordinator;
mod page;

pub use coordinator::Coordinator;
pub use page::render_page;
