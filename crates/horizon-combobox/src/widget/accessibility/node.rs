//! The Accessible trait for combobox accessibility support.

#[cfg(feature = "accessibility")]
use accesskit::{AutoComplete, Invalid, Live, Node};

#[cfg(feature = "accessibility")]
use super::node_id;
use super::role::AccessibleRole;

/// Politeness of a live region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LivePoliteness {
    /// Announced when the user is idle.
    Polite,
    /// Announced immediately, interrupting speech.
    Assertive,
}

impl LivePoliteness {
    /// The value of the `aria-live` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            LivePoliteness::Polite => "polite",
            LivePoliteness::Assertive => "assertive",
        }
    }
}

/// Trait for elements that provide accessibility information.
///
/// Relationships (`labelled_by`, `controls`, active descendant) are
/// expressed as element ids, the same ids that appear in the rendered ARIA
/// attributes.
///
/// # Default Implementations
///
/// Most methods have sensible defaults:
/// - `accessible_role()` returns `AccessibleRole::Unknown`
/// - name, value and description return `None`
/// - state methods return `None` or `false`
/// - relationship methods return nothing
///
/// # Example
///
/// ```
/// use horizon_combobox::widget::accessibility::{Accessible, AccessibleRole};
///
/// struct Hint(String);
///
/// impl Accessible for Hint {
///     fn accessible_role(&self) -> AccessibleRole {
///         AccessibleRole::Label
///     }
///
///     fn accessible_name(&self) -> Option<String> {
///         Some(self.0.clone())
///     }
/// }
///
/// assert_eq!(Hint("City".into()).accessible_name().as_deref(), Some("City"));
/// ```
pub trait Accessible {
    /// Get the accessibility role of this element.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Unknown
    }

    /// Get the accessible name (the primary label screen readers announce).
    fn accessible_name(&self) -> Option<String> {
        None
    }

    /// Get the accessible description.
    fn accessible_description(&self) -> Option<String> {
        None
    }

    /// Get the accessible value as a string.
    fn accessible_value(&self) -> Option<String> {
        None
    }

    /// Get the placeholder text for input elements.
    fn accessible_placeholder(&self) -> Option<String> {
        None
    }

    /// Get the expanded state for elements that own a popup.
    fn is_accessible_expanded(&self) -> Option<bool> {
        None
    }

    /// Get the selected state for selectable elements.
    fn is_accessible_selected(&self) -> Option<bool> {
        None
    }

    /// Check if the element is waiting on content.
    fn is_accessible_busy(&self) -> bool {
        false
    }

    /// Check if the element is disabled.
    fn is_accessible_disabled(&self) -> bool {
        false
    }

    /// Check if the element has an error state.
    fn is_accessible_invalid(&self) -> bool {
        false
    }

    /// Whether the element offers a list of completions.
    fn has_accessible_autocomplete_list(&self) -> bool {
        false
    }

    /// Get the live-region politeness, if this element is a live region.
    fn accessible_live(&self) -> Option<LivePoliteness> {
        None
    }

    /// Whether a live region is announced as a whole.
    fn is_accessible_live_atomic(&self) -> bool {
        false
    }

    /// Get ids of elements that label this element.
    fn accessible_labelled_by(&self) -> Vec<String> {
        Vec::new()
    }

    /// Get ids of elements that describe this element.
    fn accessible_described_by(&self) -> Vec<String> {
        Vec::new()
    }

    /// Get ids of elements this element controls.
    fn accessible_controls(&self) -> Vec<String> {
        Vec::new()
    }

    /// Get the id of the active descendant for composite elements.
    fn accessible_active_descendant(&self) -> Option<String> {
        None
    }

    /// Get the position in set (1-indexed) for list items.
    fn accessible_position_in_set(&self) -> Option<usize> {
        None
    }

    /// Get the set size for list items.
    fn accessible_set_size(&self) -> Option<usize> {
        None
    }

    /// Build an AccessKit Node from this element's accessibility info.
    ///
    /// `children` are the element ids of child nodes.
    #[cfg(feature = "accessibility")]
    fn build_accessible_node(&self, children: &[String]) -> Node {
        let mut node = Node::new(self.accessible_role().to_accesskit_role());

        if let Some(name) = self.accessible_name() {
            node.set_label(name);
        }
        if let Some(desc) = self.accessible_description() {
            node.set_description(desc);
        }
        if let Some(value) = self.accessible_value() {
            node.set_value(value);
        }
        if let Some(placeholder) = self.accessible_placeholder() {
            node.set_placeholder(placeholder);
        }

        if let Some(expanded) = self.is_accessible_expanded() {
            node.set_expanded(expanded);
        }
        if let Some(selected) = self.is_accessible_selected() {
            node.set_selected(selected);
        }
        if self.is_accessible_busy() {
            node.set_busy();
        }
        if self.is_accessible_disabled() {
            node.set_disabled();
        }
        if self.is_accessible_invalid() {
            node.set_invalid(Invalid::True);
        }
        if self.has_accessible_autocomplete_list() {
            node.set_auto_complete(AutoComplete::List);
        }

        if let Some(live) = self.accessible_live() {
            node.set_live(match live {
                LivePoliteness::Polite => Live::Polite,
                LivePoliteness::Assertive => Live::Assertive,
            });
            if self.is_accessible_live_atomic() {
                node.set_live_atomic();
            }
        }

        let labelled_by: Vec<_> = self
            .accessible_labelled_by()
            .iter()
            .map(|id| node_id(id))
            .collect();
        if !labelled_by.is_empty() {
            node.set_labelled_by(labelled_by);
        }

        let described_by: Vec<_> = self
            .accessible_described_by()
            .iter()
            .map(|id| node_id(id))
            .collect();
        if !described_by.is_empty() {
            node.set_described_by(described_by);
        }

        let controls: Vec<_> = self
            .accessible_controls()
            .iter()
            .map(|id| node_id(id))
            .collect();
        if !controls.is_empty() {
            node.set_controls(controls);
        }

        if let Some(active) = self.accessible_active_descendant() {
            node.set_active_descendant(node_id(&active));
        }

        if let Some(pos) = self.accessible_position_in_set() {
            node.set_position_in_set(pos);
        }
        if let Some(size) = self.accessible_set_size() {
            node.set_size_of_set(size);
        }

        let child_ids: Vec<_> = children.iter().map(|id| node_id(id)).collect();
        if !child_ids.is_empty() {
            node.set_children(child_ids);
        }

        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestOption {
        label: String,
        selected: bool,
    }

    impl Accessible for TestOption {
        fn accessible_role(&self) -> AccessibleRole {
            AccessibleRole::ListBoxOption
        }

        fn accessible_name(&self) -> Option<String> {
            Some(self.label.clone())
        }

        fn is_accessible_selected(&self) -> Option<bool> {
            Some(self.selected)
        }

        fn accessible_position_in_set(&self) -> Option<usize> {
            Some(1)
        }
    }

    #[test]
    fn test_accessible_trait_defaults() {
        struct Minimal;
        impl Accessible for Minimal {}

        let element = Minimal;
        assert_eq!(element.accessible_role(), AccessibleRole::Unknown);
        assert!(element.accessible_name().is_none());
        assert!(element.is_accessible_expanded().is_none());
        assert!(!element.is_accessible_busy());
        assert!(element.accessible_live().is_none());
        assert!(element.accessible_labelled_by().is_empty());
    }

    #[test]
    fn test_live_politeness() {
        assert_eq!(LivePoliteness::Polite.as_str(), "polite");
        assert_eq!(LivePoliteness::Assertive.as_str(), "assertive");
    }

    #[cfg(feature = "accessibility")]
    #[test]
    fn test_build_accessible_node() {
        let option = TestOption {
            label: "Victoria".to_string(),
            selected: true,
        };

        let node = option.build_accessible_node(&[]);
        assert_eq!(node.role(), accesskit::Role::ListBoxOption);
        assert_eq!(node.label(), Some("Victoria"));
        assert_eq!(node.is_selected(), Some(true));
        assert!(node.children().is_empty());
    }
}
