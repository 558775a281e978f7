// Report module - HTML rendering and persistence

pub mod html;
pub mod template;
pub mod writer;

pub use html::{RenderConfig, render};
pub use template::{Skeleton, escape_html, substitute};
pub use writer::write_report;
