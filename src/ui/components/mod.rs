//! UI Components module
//!
//! Contains the reusable pieces of the terminal interface: the presentation
//! node tree, the link and logo primitives and the modal overlays.

pub mod link;
pub mod logo;
pub mod modals;
pub mod node;

pub use link::Link;
pub use logo::Logo;
pub use modals::*;
pub use node::{Node, NodeRef, Role, RootHandle};
