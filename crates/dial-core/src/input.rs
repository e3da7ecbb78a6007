use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    Cancel,
    Leave,
}

/// Position is in the widget's local coordinates.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub event: PointerEventKind,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn touch(event: PointerEventKind, position: Vec2) -> Self {
        Self {
            id: PointerId(0),
            event,
            position,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool, // Cmd on Mac, Win key on Windows
}

impl Modifiers {
    pub fn is_empty(self) -> bool {
        !(self.ctrl || self.alt || self.meta)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Tab,
}

#[derive(Clone, Debug)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    pub is_repeat: bool,
}

impl KeyEvent {
    pub fn pressed(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
            is_repeat: false,
        }
    }
}
