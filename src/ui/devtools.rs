//! Developer tooling markers
//!
//! Tags a component's root node with its display name so inspection tools
//! can find it.

use tracing::debug;

use super::components::node::NodeRef;

/// Attribute carrying the component display name
pub const DEVTOOLS_ATTRIBUTE: &str = "data-devtools-id";

/// Tag the root bound to `node_ref`. Returns false if nothing is bound yet.
pub fn tag_root(node_ref: &NodeRef, display_name: &str) -> bool {
    let Some(root) = node_ref.get() else {
        debug!(display_name, "devtools tag skipped: node ref not bound");
        return false;
    };
    root.set_marker(DEVTOOLS_ATTRIBUTE, display_name);
    debug!(display_name, id = %root.id(), "devtools tag applied");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::modals::about::{AboutModal, AboutModalProps, DISPLAY_NAME};

    #[test]
    fn test_unbound_ref_is_not_tagged() {
        assert!(!tag_root(&NodeRef::new(), "AboutModal"));
    }

    #[test]
    fn test_tag_survives_visibility_changes() {
        let node_ref = NodeRef::new();
        let mut modal = AboutModal::mount(AboutModalProps::new("Close").node_ref(node_ref.clone()));

        assert!(tag_root(&node_ref, DISPLAY_NAME));
        modal.set_open(true);
        modal.request_close();

        assert_eq!(
            modal.root().attribute(DEVTOOLS_ATTRIBUTE).as_deref(),
            Some("AboutModal")
        );
    }
}
