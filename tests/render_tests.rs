// Tests for the HTML renderer - public API only

use reportify::report::{RenderConfig, render};
use reportify::state::{AssertionRecord, ReportTree};

fn base_config() -> RenderConfig {
    RenderConfig {
        template_source: None,
        css_refs: Vec::new(),
        js_refs: Vec::new(),
        project_label: "demo".to_string(),
        pass_icon: "icons/pass.png".to_string(),
        fail_icon: "icons/fail.png".to_string(),
        container_id: "uitests".to_string(),
    }
}

fn login_tree() -> ReportTree {
    let mut tree = ReportTree::new();
    tree.open_suite("Login");
    tree.open_case("submit form");
    tree.record(AssertionRecord::pass("login.rs:42", Some("ok".to_string())));
    tree.finalize_current();
    tree
}

#[test]
fn test_passing_report_references_pass_icon_only() {
    // Arrange
    let tree = login_tree();

    // Act
    let output = render(&tree, &base_config());

    // Assert
    assert!(output.contains("Login"));
    assert!(output.contains("submit form"));
    assert!(output.contains("icons/pass.png"));
    assert!(!output.contains("icons/fail.png"));
}

#[test]
fn test_failing_report_shows_failure_message() {
    // Arrange
    let mut tree = ReportTree::new();
    tree.open_suite("A");
    tree.open_case("x");
    tree.record(AssertionRecord::fail(
        "a.rs:7",
        Some("boom".to_string()),
        "assert failed",
        "AssertionError",
    ));
    tree.finalize_current();

    // Act
    let output = render(&tree, &base_config());

    // Assert
    assert!(output.contains("icons/fail.png"));
    assert!(output.contains("boom"));
    assert!(output.contains("AssertionError"));
}

#[test]
fn test_empty_tree_renders_explicit_placeholder() {
    // Arrange & Act
    let output = render(&ReportTree::new(), &base_config());

    // Assert: an explicit node, never a silently empty container.
    assert!(output.contains("no-tests"));
    assert!(output.contains("No tests were recorded"));
}

#[test]
fn test_css_and_js_references_keep_input_order() {
    // Arrange
    let mut config = base_config();
    config.css_refs = vec!["css/one.css".to_string(), "css/two.css".to_string()];
    config.js_refs = vec!["js/one.js".to_string(), "js/two.js".to_string()];

    // Act
    let output = render(&login_tree(), &config);

    // Assert
    let head_end = output.find("</head>").expect("head missing");
    let one_css = output.find("css/one.css").expect("one.css missing");
    let two_css = output.find("css/two.css").expect("two.css missing");
    assert!(one_css < two_css);
    assert!(two_css < head_end);
    assert!(output.contains("rel=\"stylesheet\""));

    let one_js = output.find("js/one.js").expect("one.js missing");
    let two_js = output.find("js/two.js").expect("two.js missing");
    let body_end = output.find("</body>").expect("body missing");
    assert!(one_js < two_js);
    assert!(two_js < body_end);
    // Scripts land after the rendered suites.
    assert!(output.find("Login").expect("suite missing") < one_js);
}

#[test]
fn test_suite_blocks_render_in_insertion_order() {
    // Arrange
    let mut tree = ReportTree::new();
    for name in ["alpha", "beta", "gamma"] {
        tree.open_suite(name);
        tree.finalize_current();
    }

    // Act
    let output = render(&tree, &base_config());

    // Assert
    let alpha = output.find("alpha").expect("alpha missing");
    let beta = output.find("beta").expect("beta missing");
    let gamma = output.find("gamma").expect("gamma missing");
    assert!(alpha < beta);
    assert!(beta < gamma);
}

#[test]
fn test_custom_template_receives_suites_in_container() {
    // Arrange
    let mut config = base_config();
    config.container_id = "results".to_string();
    config.template_source = Some(
        "<html><head><title>corp</title></head>\
         <body><nav>corp nav</nav><section id=\"results\"></section></body></html>"
            .to_string(),
    );

    // Act
    let output = render(&login_tree(), &config);

    // Assert
    assert!(output.contains("corp nav"));
    let container = output.find("id=\"results\"").expect("container missing");
    let suite = output.find("Login").expect("suite missing");
    assert!(container < suite);
}

#[test]
fn test_template_without_container_falls_back_to_builtin() {
    // Arrange
    let mut config = base_config();
    config.template_source = Some("<html><head></head><body></body></html>".to_string());

    // Act
    let output = render(&login_tree(), &config);

    // Assert: built-in skeleton carries the project label as title.
    assert!(output.contains("<title>demo</title>"));
    assert!(output.contains("id=\"uitests\""));
    assert!(output.contains("Login"));
}

#[test]
fn test_hostile_names_cannot_inject_markup_or_placeholders() {
    // Arrange
    let mut tree = ReportTree::new();
    tree.open_suite("<img src=x onerror=alert(1)>");
    tree.open_case("[testcase_pass_image]");
    tree.record(AssertionRecord::fail(
        "desc [test_description]",
        Some("<script>steal()</script>".to_string()),
        "assert failed",
        "unknown",
    ));
    tree.finalize_current();

    // Act
    let output = render(&tree, &base_config());

    // Assert
    assert!(!output.contains("<img src=x onerror"));
    assert!(!output.contains("<script>steal()"));
    // Placeholder syntax in user data stays literal data.
    assert!(output.contains("[testcase_pass_image]"));
    assert!(output.contains("desc [test_description]"));
}

#[test]
fn test_render_twice_is_byte_identical() {
    // Arrange
    let tree = login_tree();
    let config = base_config();

    // Act & Assert
    assert_eq!(render(&tree, &config), render(&tree, &config));
}
