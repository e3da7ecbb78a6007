/// High‑level semantic role of a view, similar to ARIA roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Text,
    Button,
    Container,
    /// Discrete multi-position selector that advances on activation.
    Dial,
}

/// Actions an assistive service can trigger on a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionId {
    Click,
    LongClick,
}

/// An action with a custom spoken prompt, e.g. “double tap to change”.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomAction {
    pub id: ActionId,
    pub label: String,
}

/// Semantics attached to a widget, used to build the accessibility tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Semantics {
    /// Primary role of this node (what kind of thing it is).
    pub role: Role,
    /// Human‑readable label for screen readers (the content description).
    pub label: Option<String>,
    /// Whether this node is actionable; disabled nodes remain in the tree
    /// but are marked not enabled.
    pub enabled: bool,
    /// At most one entry per `ActionId`.
    pub actions: Vec<CustomAction>,
}

impl Semantics {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            label: None,
            enabled: true,
            actions: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Adds `action`, replacing an existing action with the same id.
    pub fn with_action(mut self, id: ActionId, label: impl Into<String>) -> Self {
        let label = label.into();
        match self.actions.iter_mut().find(|a| a.id == id) {
            Some(existing) => existing.label = label,
            None => self.actions.push(CustomAction { id, label }),
        }
        self
    }

    pub fn action(&self, id: ActionId) -> Option<&CustomAction> {
        self.actions.iter().find(|a| a.id == id)
    }
}
