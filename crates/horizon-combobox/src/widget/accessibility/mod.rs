//! Accessibility support for the combobox.
//!
//! Two outputs are produced from the same state:
//!
//! - WAI-ARIA attribute sets ([`ComboboxAria`], [`ListboxAria`],
//!   [`OptionAria`]) for hosts that render markup.
//! - With the `accessibility` feature, [AccessKit](https://accesskit.dev/)
//!   nodes built through the [`Accessible`] trait, for hosts that publish to
//!   platform accessibility APIs directly.
//!
//! Node ids are derived from element ids, so a listbox option keeps the same
//! AccessKit id for as long as it keeps the same position.

mod aria;
mod node;
mod role;

pub use aria::{AriaAttributes, ComboboxAria, ElementIds, ListboxAria, OptionAria};
pub use node::{Accessible, LivePoliteness};
pub use role::AccessibleRole;

#[cfg(feature = "accessibility")]
use std::hash::{DefaultHasher, Hash, Hasher};

#[cfg(feature = "accessibility")]
use accesskit::NodeId as AccessKitNodeId;

/// Convert an element id to an AccessKit NodeId.
///
/// We hash the element id string for a stable identifier.
#[cfg(feature = "accessibility")]
pub fn node_id(element_id: &str) -> AccessKitNodeId {
    let mut hasher = DefaultHasher::new();
    element_id.hash(&mut hasher);
    AccessKitNodeId(hasher.finish())
}
