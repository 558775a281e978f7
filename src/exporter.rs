// HTML exporter - routes session events into the report tree and drives
// the render/write pipeline on save. Strictly sequential: each event is
// handled to completion before the next, so the tree never sees
// concurrent mutation.

use crate::config::ExporterConfig;
use crate::error::ExportError;
use crate::event::SessionEvent;
use crate::report::{self, RenderConfig};
use crate::state::{AssertionRecord, ReportTree};
use anyhow::{Context, Result};
use std::fs;
use tracing::{debug, error, info, trace, warn};

/// Runner-facing hook surface: one handler per session lifecycle moment.
/// Handlers never fail; anything unexpected is logged and dropped so the
/// exporter cannot take the host session down.
pub trait SessionHooks {
    /// A suite is starting
    fn on_suite_start(&mut self, name: &str);

    /// A case (step) is starting
    fn on_case_start(&mut self, name: &str);

    /// An assertion passed
    fn on_assertion_pass(&mut self, source: &str, message: Option<&str>);

    /// An assertion failed
    fn on_assertion_fail(
        &mut self,
        source: &str,
        message: Option<&str>,
        standard_message: &str,
        kind: &str,
    );

    /// The current suite finished
    fn on_suite_done(&mut self);

    /// The session asked for the report to be saved
    fn on_session_save(&mut self);
}

/// HTML exporter for test results
pub struct HtmlExporter {
    config: ExporterConfig,
    tree: ReportTree,
    active: bool,
}

impl HtmlExporter {
    /// Create an exporter. Without a configured `file_path` the exporter is
    /// inert: hooks are accepted and ignored.
    pub fn new(config: ExporterConfig) -> Self {
        let active = config.is_active();
        if !active {
            debug!("no file_path configured, exporter stays inert");
        }
        Self {
            config,
            tree: ReportTree::new(),
            active,
        }
    }

    /// Whether this exporter will produce output at save time
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Read access to the aggregated report tree
    pub fn tree(&self) -> &ReportTree {
        &self.tree
    }

    /// Dispatch one session event to its handler
    pub fn handle(&mut self, event: &SessionEvent) {
        trace!("routing {}", event.label());
        match event {
            SessionEvent::SuiteStart { name } => self.on_suite_start(name),
            SessionEvent::CaseStart { name } => self.on_case_start(name),
            SessionEvent::AssertionPass { source, message } => {
                self.on_assertion_pass(source, message.as_deref());
            }
            SessionEvent::AssertionFail {
                source,
                message,
                standard_message,
                kind,
            } => {
                self.on_assertion_fail(source, message.as_deref(), standard_message, kind);
            }
            SessionEvent::SuiteDone => self.on_suite_done(),
            SessionEvent::SessionSave => self.on_session_save(),
        }
    }

    /// Render the current tree and persist it. Idempotent: calling it again
    /// with no intervening events rewrites the same bytes. An inert
    /// exporter returns Ok without touching the filesystem.
    pub fn save(&self) -> Result<(), ExportError> {
        let Some(path) = self.config.file_path.as_ref() else {
            return Ok(());
        };

        let render_config = self.render_config();
        let markup = report::render(&self.tree, &render_config);
        report::write_report(path, &markup)?;

        info!("result log stored in {}", path.display());
        Ok(())
    }

    /// Recovery path for sessions that end without suite-done/session-save:
    /// finalize whatever is still open, then save.
    pub fn flush(&mut self) -> Result<(), ExportError> {
        if self.tree.finalize_current() {
            debug!("finalized unfinished suite during flush");
        }
        self.save()
    }

    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            template_source: self.template_source(),
            css_refs: self.config.css_paths.clone(),
            js_refs: self.config.js_paths.clone(),
            project_label: self.config.project_label.clone().unwrap_or_default(),
            pass_icon: self.config.pass_icon.clone(),
            fail_icon: self.config.fail_icon.clone(),
            container_id: self.config.container_id.clone(),
        }
    }

    /// Read the configured template, falling back to the built-in skeleton
    /// on any read failure. The failure is surfaced as a diagnostic here,
    /// at the filesystem boundary; the renderer itself stays pure.
    fn template_source(&self) -> Option<String> {
        let path = self.config.template_path.as_ref()?;
        match read_template(path) {
            Ok(source) => Some(source),
            Err(err) => {
                warn!("{err:#}, falling back to built-in skeleton");
                None
            }
        }
    }
}

fn read_template(path: &std::path::Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("unable to read template from {}", path.display()))
}

impl SessionHooks for HtmlExporter {
    fn on_suite_start(&mut self, name: &str) {
        if !self.active {
            return;
        }
        // Finalizing here guards against a runner that never delivered
        // suite-done; the unfinished suite is kept, not dropped.
        if self.tree.open_suite(name) {
            warn!("suite-start with a suite still open, finalized the previous suite");
        }
        debug!("testsuite {name} added");
    }

    fn on_case_start(&mut self, name: &str) {
        if !self.active {
            return;
        }
        if self.tree.open_case(name) {
            debug!("testcase {name} added");
        } else {
            warn!("case-start \"{name}\" arrived with no suite open, dropped");
        }
    }

    fn on_assertion_pass(&mut self, source: &str, message: Option<&str>) {
        if !self.active {
            return;
        }
        let record = AssertionRecord::pass(source, message.map(str::to_string));
        if !self.tree.record(record) {
            warn!("passing assertion at {source} arrived with no case open, dropped");
        }
    }

    fn on_assertion_fail(
        &mut self,
        source: &str,
        message: Option<&str>,
        standard_message: &str,
        kind: &str,
    ) {
        if !self.active {
            return;
        }
        let record =
            AssertionRecord::fail(source, message.map(str::to_string), standard_message, kind);
        if !self.tree.record(record) {
            warn!("failing assertion at {source} arrived with no case open, dropped");
        }
    }

    fn on_suite_done(&mut self) {
        if !self.active {
            return;
        }
        if self.tree.finalize_current() {
            debug!("testsuite saved");
        } else {
            warn!("suite-done arrived with no suite open, dropped");
        }
    }

    fn on_session_save(&mut self) {
        if !self.active {
            return;
        }
        // A failed write must never escape into the host session; the tree
        // is intact and a later save can retry.
        if let Err(err) = self.save() {
            error!("{err}");
        }
    }
}
