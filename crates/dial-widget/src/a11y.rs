use dial_core::{ActionId, Role, Semantics};

use crate::{DialPosition, DialStrings};

/// Prompt announced for the click action: what activating will do next.
pub fn action_label(position: DialPosition, strings: &DialStrings) -> String {
    if position.is_terminal() {
        strings.reset.clone()
    } else {
        strings.change.clone()
    }
}

pub fn dial_semantics(position: DialPosition, strings: &DialStrings) -> Semantics {
    Semantics::new(Role::Dial)
        .with_label(strings.label_for(position))
        .with_action(ActionId::Click, action_label(position, strings))
}
