use crate::{Color, Rect};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Renderable scene
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub clear_color: Color,
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Ellipse {
        rect: Rect,
        color: Color,
    },
    /// `rect` is anchored at the text origin; `align` says how the run sits
    /// horizontally around `rect.x`.
    Text {
        rect: Rect,
        text: String,
        color: Color,
        size: f32,
        align: TextAlign,
        weight: FontWeight,
    },
}
