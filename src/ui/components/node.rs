//! Presentation node tree
//!
//! Components describe what they show as a small tree of [`Node`]s next to
//! their terminal rendering. The tree carries roles, classes, labels and
//! free-form attributes so assistive tooling, tests and instrumentation can
//! locate parts of a component without knowing how it is drawn.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::Serialize;
use uuid::Uuid;

/// Attributes managed by the component itself. Caller-supplied attributes
/// with these names are dropped.
pub const RESERVED_ATTRIBUTES: [&str; 3] = ["role", "class", "aria-modal"];

/// Accessibility role of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Presentation,
    Button,
    Heading,
    Img,
    List,
    ListItem,
    Link,
    Group,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Presentation => "presentation",
            Role::Button => "button",
            Role::Heading => "heading",
            Role::Img => "img",
            Role::List => "list",
            Role::ListItem => "listitem",
            Role::Link => "link",
            Role::Group => "group",
        }
    }
}

/// A single node of the presentation tree
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Node {
    tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<Role>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    classes: Vec<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    attributes: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        for name in class.split_whitespace() {
            if !self.has_class(name) {
                self.classes.push(name.to_string());
            }
        }
    }

    /// Merge attributes that the node does not manage itself.
    ///
    /// Reserved names and names already present are skipped; returns the
    /// names that were rejected.
    pub fn merge_attributes<'a, I>(&mut self, attributes: I) -> Vec<String>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut rejected = Vec::new();
        for (name, value) in attributes {
            if RESERVED_ATTRIBUTES.contains(&name.as_str()) || self.attributes.contains_key(name) {
                rejected.push(name.clone());
                continue;
            }
            self.attributes.insert(name.clone(), value.clone());
        }
        rejected
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Attribute lookup; `role` and `class` resolve to the managed values.
    pub fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "role" => self.role.map(|role| role.as_str().to_string()),
            "class" if !self.classes.is_empty() => Some(self.classes.join(" ")),
            "class" => None,
            _ => self.attributes.get(name).cloned(),
        }
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// Accessible label (`aria-label`)
    pub fn label(&self) -> Option<&str> {
        self.attributes.get("aria-label").map(String::as_str)
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// All text of this node and its descendants, in document order
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        self.walk(&mut |node| {
            if let Some(text) = node.text() {
                parts.push(text.to_string());
            }
        });
        parts.join("\n")
    }

    /// Depth-first, pre-order traversal including `self`
    pub fn walk<'a, F: FnMut(&'a Node)>(&'a self, visit: &mut F) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    pub fn find_all<P: Fn(&Node) -> bool>(&self, predicate: P) -> Vec<&Node> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if predicate(node) {
                found.push(node);
            }
        });
        found
    }

    pub fn find<P: Fn(&Node) -> bool>(&self, predicate: P) -> Option<&Node> {
        self.find_all(predicate).into_iter().next()
    }

    pub fn find_by_role(&self, role: Role) -> Option<&Node> {
        self.find(|node| node.role == Some(role))
    }

    pub fn find_all_by_role(&self, role: Role) -> Vec<&Node> {
        self.find_all(|node| node.role == Some(role))
    }

    pub fn find_by_label(&self, label: &str) -> Option<&Node> {
        self.find(|node| node.label() == Some(label))
    }

    /// Exact text match
    pub fn find_by_text(&self, text: &str) -> Option<&Node> {
        self.find(|node| node.text() == Some(text))
    }

    pub fn find_by_class(&self, class: &str) -> Option<&Node> {
        self.find(|node| node.has_class(class))
    }
}

/// The long-lived root resource of a mounted component
#[derive(Debug)]
struct RootResource {
    id: Uuid,
    node: Node,
    markers: IndexMap<String, String>,
}

/// Shared handle to a component's root node.
///
/// The identity (`id`) is fixed when the component mounts; the node contents
/// are replaced in place on every re-render.
#[derive(Debug, Clone)]
pub struct RootHandle {
    inner: Arc<RwLock<RootResource>>,
}

impl RootHandle {
    pub(crate) fn new(node: Node) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RootResource {
                id: Uuid::new_v4(),
                node,
                markers: IndexMap::new(),
            })),
        }
    }

    pub fn id(&self) -> Uuid {
        self.inner.read().id
    }

    /// Copy of the current root node, markers included
    pub fn snapshot(&self) -> Node {
        self.inner.read().node.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.inner.read().node.role()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.inner.read().node.has_class(class)
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.inner.read().node.attribute(name)
    }

    /// Attach an external marker attribute (instrumentation, devtools).
    ///
    /// Markers survive re-rendering but never replace an attribute the
    /// component or its caller already set.
    pub fn set_marker(&self, name: impl Into<String>, value: impl Into<String>) {
        let mut resource = self.inner.write();
        let name = name.into();
        let value = value.into();
        let previous = resource.markers.insert(name.clone(), value.clone());
        if previous.is_some() && resource.node.attributes.get(&name) == previous.as_ref() {
            resource.node.attributes.insert(name, value);
        } else {
            let single = IndexMap::from([(name, value)]);
            resource.node.merge_attributes(&single);
        }
    }

    pub fn same_as(&self, other: &RootHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn replace(&self, mut node: Node) {
        let mut resource = self.inner.write();
        let markers = std::mem::take(&mut resource.markers);
        node.merge_attributes(&markers);
        resource.markers = markers;
        resource.node = node;
    }
}

/// Caller-owned slot that a component binds its root handle into at mount
#[derive(Debug, Clone, Default)]
pub struct NodeRef {
    slot: Arc<RwLock<Option<RootHandle>>>,
}

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bound root handle, if a component has mounted with this ref
    pub fn get(&self) -> Option<RootHandle> {
        self.slot.read().clone()
    }

    pub fn is_bound(&self) -> bool {
        self.slot.read().is_some()
    }

    pub(crate) fn bind(&self, handle: RootHandle) {
        *self.slot.write() = Some(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::new("div")
            .with_role(Role::Presentation)
            .with_class("root extra")
            .with_child(Node::new("h2").with_role(Role::Heading).with_text("Title"))
            .with_child(
                Node::new("button")
                    .with_role(Role::Button)
                    .with_attribute("aria-label", "Close"),
            )
    }

    #[test]
    fn test_class_attribute_is_managed() {
        let node = sample();
        assert!(node.has_class("root"));
        assert!(node.has_class("extra"));
        assert_eq!(node.attribute("class").as_deref(), Some("root extra"));
        assert_eq!(node.attribute("role").as_deref(), Some("presentation"));
    }

    #[test]
    fn test_merge_attributes_skips_reserved_and_existing() {
        let mut node = sample().with_attribute("data-x", "internal");
        let extra = IndexMap::from([
            ("role".to_string(), "dialog".to_string()),
            ("class".to_string(), "hijack".to_string()),
            ("data-x".to_string(), "caller".to_string()),
            ("data-testid".to_string(), "about".to_string()),
        ]);

        let rejected = node.merge_attributes(&extra);

        assert_eq!(rejected, vec!["role", "class", "data-x"]);
        assert_eq!(node.role(), Some(Role::Presentation));
        assert!(!node.has_class("hijack"));
        assert_eq!(node.attribute("data-x").as_deref(), Some("internal"));
        assert_eq!(node.attribute("data-testid").as_deref(), Some("about"));
    }

    #[test]
    fn test_queries() {
        let node = sample();
        assert_eq!(node.find_by_role(Role::Heading).and_then(Node::text), Some("Title"));
        assert!(node.find_by_label("Close").is_some());
        assert!(node.find_by_label("Dismiss").is_none());
        assert_eq!(node.text_content(), "Title");
    }

    #[test]
    fn test_markers_survive_replace() {
        let handle = RootHandle::new(sample());
        let id = handle.id();
        handle.set_marker("data-devtools-id", "AboutModal");
        handle.set_marker("role", "dialog");

        handle.replace(sample().with_class("is-visible"));

        assert_eq!(handle.id(), id);
        assert!(handle.has_class("is-visible"));
        assert_eq!(handle.attribute("data-devtools-id").as_deref(), Some("AboutModal"));
        assert_eq!(handle.role(), Some(Role::Presentation));
    }

    #[test]
    fn test_node_ref_binding() {
        let node_ref = NodeRef::new();
        assert!(!node_ref.is_bound());

        let handle = RootHandle::new(sample());
        node_ref.bind(handle.clone());

        let bound = node_ref.get().expect("bound");
        assert!(bound.same_as(&handle));
    }
}
