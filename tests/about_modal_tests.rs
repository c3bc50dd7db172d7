//! Behavioural tests for the About dialog
//!
//! Exercises visibility, the close veto protocol and content composition
//! through the public API only.

use std::{cell::Cell, rc::Rc};

use about_modal::ui::components::{
    modals::about::{AboutModal, AboutModalProps, CloseOutcome, BLOCK_CLASS, VISIBLE_CLASS},
    Link, Modal, ModalResult, Node, NodeRef, Role,
};

/// Guard that records how often it ran and answers `allow`
fn counting_guard(allow: bool) -> (Rc<Cell<u32>>, impl FnMut() -> bool) {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    (calls, move || {
        counter.set(counter.get() + 1);
        allow
    })
}

#[test]
fn test_visible_class_iff_open() {
    for open in [true, false] {
        let modal = AboutModal::mount(AboutModalProps::new("Close").open(open));
        let root = modal.root_node();

        assert_eq!(root.has_class(VISIBLE_CLASS), open);
        assert!(root.has_class(BLOCK_CLASS));
        assert_eq!(root.role(), Some(Role::Presentation));
    }

    println!("✓ Visibility class follows open");
}

#[test]
fn test_hello_scenario() {
    let mut modal = AboutModal::mount(
        AboutModalProps::new("Close")
            .open(true)
            .content("Hello"),
    );

    let root = modal.root_node();
    assert_eq!(root.attribute("role").as_deref(), Some("presentation"));
    assert!(root.has_class(BLOCK_CLASS));
    assert!(root.has_class(VISIBLE_CLASS));
    assert!(root.find_by_text("Hello").is_some());
    assert!(root.find_by_label("Close").is_some());

    assert_eq!(modal.click_control("Close"), Some(CloseOutcome::Closed));
    assert!(!modal.root().has_class(VISIBLE_CLASS));
    assert!(modal.root().has_class(BLOCK_CLASS));

    println!("✓ Open, render and close without guard");
}

#[test]
fn test_guard_allowing_close_called_once() {
    let (calls, guard) = counting_guard(true);
    let mut modal = AboutModal::mount(AboutModalProps::new("Close").open(true).on_close(guard));

    assert_eq!(modal.click_control("Close"), Some(CloseOutcome::Closed));
    assert!(!modal.is_visible());
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_guard_veto_keeps_dialog_visible() {
    let (calls, guard) = counting_guard(false);
    let mut modal = AboutModal::mount(AboutModalProps::new("Close").open(true).on_close(guard));

    assert_eq!(modal.click_control("Close"), Some(CloseOutcome::Vetoed));
    assert!(modal.root().has_class(VISIBLE_CLASS));
    assert_eq!(calls.get(), 1);

    assert_eq!(modal.click_control("Close"), Some(CloseOutcome::Vetoed));
    assert!(modal.is_visible());
    assert_eq!(calls.get(), 2);

    println!("✓ Veto keeps the dialog open, one guard call per attempt");
}

#[test]
fn test_programmatic_close_respects_veto() {
    let (calls, guard) = counting_guard(false);
    let mut modal = AboutModal::mount(AboutModalProps::new("Close").open(true).on_close(guard));

    assert_eq!(Modal::close(&mut modal), ModalResult::Vetoed);
    assert!(modal.is_visible());
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_open_toggle_reuses_instance() {
    let node_ref = NodeRef::new();
    let mut modal = AboutModal::mount(AboutModalProps::new("Close").node_ref(node_ref.clone()));
    let id = modal.root().id();

    modal.set_open(true);
    assert!(modal.is_visible());
    assert_eq!(modal.root().id(), id);

    let handle = node_ref.get().expect("ref bound at mount");
    assert!(handle.same_as(modal.root()));
    assert!(handle.has_class(VISIBLE_CLASS));
}

#[test]
fn test_links_keep_order_and_targets() {
    let links = vec![
        Link::new("Carbon", "https://carbondesignsystem.com"),
        Link::new("GitHub", "https://github.com"),
        Link::new("Accessibility", "https://www.ibm.com/able"),
    ];
    let modal = AboutModal::mount(
        AboutModalProps::new("Close")
            .open(true)
            .links(links.clone()),
    );

    let root = modal.root_node();
    let rendered: Vec<(String, String)> = root
        .find_all_by_role(Role::Link)
        .into_iter()
        .map(|node| {
            (
                node.text().unwrap_or_default().to_string(),
                node.attribute("href").unwrap_or_default(),
            )
        })
        .collect();
    let expected: Vec<(String, String)> = links
        .iter()
        .map(|link| (link.label.clone(), link.href.clone()))
        .collect();

    assert_eq!(rendered, expected);
}

#[test]
fn test_general_text_independent_of_copyright() {
    for copyright in [None, Some("Copyright IBM Corp. 2024")] {
        let mut props = AboutModalProps::new("Close").open(true).general_text("Legal notice");
        if let Some(copyright) = copyright {
            props = props.copyright_text(copyright);
        }
        let root = AboutModal::mount(props).root_node();
        assert!(root.find_by_text("Legal notice").is_some());

        let mut props = AboutModalProps::new("Close").open(true);
        if let Some(copyright) = copyright {
            props = props.copyright_text(copyright);
        }
        let root = AboutModal::mount(props).root_node();
        assert!(root.find_by_text("Legal notice").is_none());
        assert!(root
            .find_by_class(&format!("{}__general-text", BLOCK_CLASS))
            .is_none());
    }
}

#[test]
fn test_additional_info_groups_in_order() {
    let modal = AboutModal::mount(
        AboutModalProps::new("Close")
            .open(true)
            .additional_info("APIs", "Watson Speech to Text")
            .additional_info("Libraries", "ratatui"),
    );

    let root = modal.root_node();
    let labels: Vec<&str> = root
        .find_all_by_role(Role::Group)
        .into_iter()
        .filter_map(Node::label)
        .collect();
    assert_eq!(labels, vec!["APIs", "Libraries"]);
}

#[test]
fn test_reference_handle_points_at_root() {
    let node_ref = NodeRef::new();
    let _modal = AboutModal::mount(AboutModalProps::new("Close").node_ref(node_ref.clone()));

    let handle = node_ref.get().expect("bound");
    assert!(handle.has_class(BLOCK_CLASS));
}

#[test]
fn test_pass_through_attributes_on_root() {
    let modal = AboutModal::mount(
        AboutModalProps::new("Close")
            .attribute("data-testid", "test-id")
            .attribute("role", "dialog")
            .attribute("class", "overridden")
            .class_name("custom-class"),
    );

    let root = modal.root();
    assert_eq!(root.attribute("data-testid").as_deref(), Some("test-id"));
    assert_eq!(root.role(), Some(Role::Presentation));
    assert!(root.has_class("custom-class"));
    assert!(!root.has_class("overridden"));
}

#[test]
fn test_unit_guard_allows_close() {
    let mut modal = AboutModal::mount(AboutModalProps::new("Close").open(true).on_close(|| ()));
    assert_eq!(modal.request_close(), CloseOutcome::Closed);
    assert!(!modal.is_visible());
}

#[test]
fn test_missing_close_label_leaves_control_unlabelled() {
    let mut modal = AboutModal::mount(AboutModalProps::new("").open(true));
    let root = modal.root_node();
    let button = root.find_by_role(Role::Button).expect("close control present");

    assert_eq!(button.label(), None);
    assert_eq!(modal.click_control(""), None);
    assert!(modal.is_visible());
}

#[test]
fn test_root_stays_modal_despite_caller_attribute() {
    let modal = AboutModal::mount(AboutModalProps::new("Close").attribute("aria-modal", "false"));

    let root = modal.root();
    assert_eq!(root.attribute("aria-modal").as_deref(), Some("true"));
    assert_eq!(root.role(), Some(Role::Presentation));
}
