//! Integration tests for breadcrumb derivation.

mod common;

use common::{assert_trail_invariants, init_logging, labels};
use gpui_site_nav::*;

#[test]
fn test_documented_git_workflow_trail() {
    let trail = build_breadcrumbs("/docs/guides/git-workflow", &BreadcrumbOptions::default());

    assert_eq!(labels(&trail), vec!["Home", "Documentation", "Guides", "Git Workflow"]);
    assert_eq!(trail[0].href.as_deref(), Some("/"));
    assert_eq!(trail[1].href.as_deref(), Some("/docs"));
    assert_eq!(trail[2].href.as_deref(), Some("/docs/guides"));
    assert_eq!(trail[3].href, None);
    assert!(trail[3].is_current);
}

#[test]
fn test_root_never_renders() {
    for show_home in [true, false] {
        let options = BreadcrumbOptions::default().with_show_home(show_home);
        assert!(build_breadcrumbs("/", &options).is_empty());
    }
}

#[test]
fn test_invariants_hold_across_site_routes() {
    init_logging();
    let routes = [
        "/docs",
        "/docs/api",
        "/docs/quickstart",
        "/docs/guides/deployment",
        "/docs/guides/testing/integration/fixtures",
        "/auth/login",
        "/auth/register",
        "/dashboard/api-keys/new",
        "/playground//users/",
        "weird--path/-/x",
    ];

    for options in [
        BreadcrumbOptions::default(),
        BreadcrumbOptions::default().with_show_home(false),
        BreadcrumbOptions::default().with_max_items(3),
        BreadcrumbOptions::default().with_max_items(10),
    ] {
        for route in routes {
            let trail = build_breadcrumbs(route, &options);
            assert!(trail.len() <= options.max_items, "{route} produced {} entries", trail.len());
            assert_trail_invariants(&trail);
        }
    }
}

#[test]
fn test_auth_routes_use_overrides() {
    let trail = build_breadcrumbs("/auth/register", &BreadcrumbOptions::default());
    assert_eq!(labels(&trail), vec!["Home", "Authentication", "Sign Up"]);
}

#[test]
fn test_truncation_keeps_first_and_tail() {
    let options = BreadcrumbOptions::default().with_max_items(4);
    let trail = build_breadcrumbs("/docs/guides/testing/integration/fixtures", &options);

    assert_eq!(labels(&trail), vec!["Home", ELLIPSIS_LABEL, "Integration", "Fixtures"]);
    assert!(trail[1].is_ellipsis());
    assert!(!trail[1].is_navigable());
    assert_eq!(
        trail[2].href.as_deref(),
        Some("/docs/guides/testing/integration")
    );
}

#[test]
fn test_custom_labels() {
    let labels_table = LabelTable::default()
        .with_home_label("ModernAPI")
        .with_section_override("docs", "ci-cd", "CI/CD Pipelines");
    let options = BreadcrumbOptions::default().with_labels(labels_table);

    let trail = build_breadcrumbs("/docs/ci-cd", &options);
    assert_eq!(labels(&trail), vec!["ModernAPI", "Documentation", "CI/CD Pipelines"]);
}

#[test]
fn test_docs_builder_without_section() {
    let trail = docs_breadcrumbs(&LabelTable::default(), "", "Intro");
    assert_eq!(labels(&trail), vec!["Home", "Documentation"]);
    assert_trail_invariants(&trail);

    let trail = docs_breadcrumbs(&LabelTable::default(), "/guides/", "Intro");
    assert_eq!(trail[2].href.as_deref(), Some("/docs/guides"));
    assert_trail_invariants(&trail);
}

#[test]
fn test_empty_home_label_is_rejected_and_ignored() {
    let options = BreadcrumbOptions::default().with_labels(LabelTable::default().with_home_label(""));
    assert!(options.validate().is_err());

    let trail = build_breadcrumbs("/docs/api", &options);
    assert_eq!(labels(&trail), vec!["Home", "Documentation", "API Reference"]);
    assert_trail_invariants(&trail);
}

#[test]
fn test_docs_builder_as_explicit_items() {
    let items = docs_breadcrumbs(&LabelTable::default(), "api", "Authentication Endpoints");
    let options = BreadcrumbOptions::default().with_items(items);

    let trail = build_breadcrumbs("/api-docs#auth", &options);
    assert_eq!(labels(&trail), vec!["Home", "Documentation", "API Reference", "Authentication Endpoints"]);
    assert_trail_invariants(&trail);
}
