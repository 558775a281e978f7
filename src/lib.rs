pub mod config;
pub mod error;
pub mod event;
pub mod exporter;
pub mod logging;
pub mod report;
pub mod state;

pub use config::ExporterConfig;
pub use error::ExportError;
pub use event::SessionEvent;
pub use exporter::{HtmlExporter, SessionHooks};
pub use report::{RenderConfig, render};
pub use state::{AssertionRecord, CaseAggregate, ReportTree, SuiteAggregate};
