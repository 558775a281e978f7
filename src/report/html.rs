// HTML renderer - pure function from report tree to a final document
// Fragment templates keep the placeholder vocabulary of the original
// report layouts ([testsuite_name], [testcase_pass_image], ...)

use crate::report::template::{Skeleton, escape_html, substitute};
use crate::state::{AssertionRecord, CaseAggregate, ReportTree, SuiteAggregate};

/// Rendering configuration, assembled by the exporter from its
/// `ExporterConfig` plus the already-read template source.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Template text, if one was configured and readable
    pub template_source: Option<String>,
    /// Stylesheet references for the document head, in order
    pub css_refs: Vec<String>,
    /// Script references for the end of the body, in order
    pub js_refs: Vec<String>,
    /// Project label for the title and suite block ids
    pub project_label: String,
    /// Icon reference for passing nodes
    pub pass_icon: String,
    /// Icon reference for failing nodes
    pub fail_icon: String,
    /// Id of the element receiving the suite blocks
    pub container_id: String,
}

const SUITE_TEMPLATE: &str = "<div id=\"[testsuites_name]_[testsuite_name]\" class=\"testsuite\">\n\
     <h2 class=\"testsuite_header\">[testsuite_name] <img class=\"test_pass\" src=\"[testsuite_pass_image]\"></h2>\n\
     <div class=\"testsuite_tests\">\n[testsuite_tests]</div>\n</div>\n";

const CASE_TEMPLATE: &str = "<div class=\"testcase\">\n\
     <h3 class=\"testcase_header\">[testcase_name] <img class=\"test_pass\" src=\"[testcase_pass_image]\"></h3>\n\
     <div class=\"testcase_tests\">\n[testcase_tests]</div>\n</div>\n";

const TEST_TEMPLATE: &str = "<div class=\"test\"><p class=\"test_description\">[test_description]</p> \
     <img class=\"test_pass\" src=\"[test_pass_image]\">[test_failure]</div>\n";

const FAILURE_TEMPLATE: &str =
    " <p class=\"test_message\">[test_message] <span class=\"test_kind\">[test_kind]</span></p>";

const NO_TESTS_TEMPLATE: &str =
    "<div class=\"no-tests\"><p>No tests were recorded for this session.</p></div>\n";

/// Render the report tree into a complete HTML document. Pure: the same
/// tree and configuration always produce the same string.
pub fn render(tree: &ReportTree, config: &RenderConfig) -> String {
    let mut skeleton = config
        .template_source
        .as_deref()
        .and_then(|source| Skeleton::parse(source, &config.container_id))
        .unwrap_or_else(|| Skeleton::builtin(&config.container_id, &config.project_label));

    let mut links = String::new();
    for css in &config.css_refs {
        links.push_str(&format!(
            "<link rel=\"stylesheet\" type=\"text/css\" href=\"{}\">\n",
            escape_html(css)
        ));
    }
    skeleton.push_head(&links);

    // Suite blocks are concatenated first and inserted in one shot so the
    // container keeps them in suite order.
    let blocks = if tree.is_empty() {
        NO_TESTS_TEMPLATE.to_string()
    } else {
        tree.suites()
            .iter()
            .map(|suite| render_suite(suite, config))
            .collect()
    };
    skeleton.push_container(&blocks);

    let mut scripts = String::new();
    for js in &config.js_refs {
        scripts.push_str(&format!(
            "<script type=\"text/javascript\" src=\"{}\"></script>\n",
            escape_html(js)
        ));
    }
    skeleton.push_body(&scripts);

    skeleton.into_string()
}

fn render_suite(suite: &SuiteAggregate, config: &RenderConfig) -> String {
    let cases: String = suite
        .cases()
        .iter()
        .map(|case| render_case(case, config))
        .collect();
    let icon = icon_for(suite.passed(), config);

    substitute(SUITE_TEMPLATE, &[
        ("testsuites_name", &escape_html(&config.project_label)),
        ("testsuite_name", &escape_html(suite.name())),
        ("testsuite_pass_image", &escape_html(icon)),
        ("testsuite_tests", &cases),
    ])
}

fn render_case(case: &CaseAggregate, config: &RenderConfig) -> String {
    let tests: String = case
        .assertions()
        .iter()
        .map(|assertion| render_assertion(assertion, config))
        .collect();
    let icon = icon_for(case.passed(), config);

    substitute(CASE_TEMPLATE, &[
        ("testcase_name", &escape_html(case.name())),
        ("testcase_pass_image", &escape_html(icon)),
        ("testcase_tests", &tests),
    ])
}

fn render_assertion(assertion: &AssertionRecord, config: &RenderConfig) -> String {
    let icon = icon_for(assertion.passed, config);

    // Failure details only show up for failing assertions.
    let failure = if assertion.passed {
        String::new()
    } else {
        substitute(FAILURE_TEMPLATE, &[
            (
                "test_message",
                &escape_html(assertion.message.as_deref().unwrap_or_default()),
            ),
            (
                "test_kind",
                &escape_html(assertion.kind.as_deref().unwrap_or_default()),
            ),
        ])
    };

    substitute(TEST_TEMPLATE, &[
        ("test_description", &escape_html(&assertion.description)),
        ("test_pass_image", &escape_html(icon)),
        ("test_failure", &failure),
    ])
}

fn icon_for(passed: bool, config: &RenderConfig) -> &str {
    if passed {
        &config.pass_icon
    } else {
        &config.fail_icon
    }
}
