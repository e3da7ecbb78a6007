use dial_core::*;

/// Drawing primitives a widget paints with. Coordinates are widget-local.
pub trait DrawSurface {
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size: f32,
    pub align: TextAlign,
    pub weight: FontWeight,
}

impl TextStyle {
    pub fn new(color: Color, size: f32) -> Self {
        Self {
            color,
            size,
            align: TextAlign::Start,
            weight: FontWeight::Normal,
        }
    }
    pub fn centered(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }
    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Ellipse {
        center: Vec2,
        rx: f32,
        ry: f32,
        color: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        style: TextStyle,
    },
}

/// Records draw calls in order so they can be inspected or replayed into a
/// `Scene` for a backend.
#[derive(Clone, Debug, Default)]
pub struct DrawScope {
    pub commands: Vec<DrawCommand>,
}

impl DrawScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_ellipse(&mut self, center: Vec2, rx: f32, ry: f32, color: Color) {
        self.commands.push(DrawCommand::Ellipse {
            center,
            rx: rx.max(0.0),
            ry: ry.max(0.0),
            color,
        });
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Appends the recorded commands to `scene`, offsetting them by `origin`.
    pub fn replay(&self, scene: &mut Scene, origin: Vec2) {
        for cmd in &self.commands {
            match cmd {
                DrawCommand::Ellipse {
                    center,
                    rx,
                    ry,
                    color,
                } => {
                    let r = Rect {
                        x: center.x - *rx,
                        y: center.y - *ry,
                        w: 2.0 * *rx,
                        h: 2.0 * *ry,
                    };
                    scene.nodes.push(SceneNode::Ellipse {
                        rect: r.translate(origin),
                        color: *color,
                    });
                }
                DrawCommand::Text { text, pos, style } => {
                    scene.nodes.push(SceneNode::Text {
                        rect: Rect {
                            x: origin.x + pos.x,
                            y: origin.y + pos.y,
                            w: 0.0,
                            h: style.size,
                        },
                        text: text.clone(),
                        color: style.color,
                        size: style.size,
                        align: style.align,
                        weight: style.weight,
                    });
                }
            }
        }
    }

    pub fn to_scene(&self, clear_color: Color) -> Scene {
        let mut scene = Scene {
            clear_color,
            nodes: Vec::with_capacity(self.commands.len()),
        };
        self.replay(&mut scene, Vec2::default());
        scene
    }
}

impl DrawSurface for DrawScope {
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.draw_ellipse(center, radius, radius, color);
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            style,
        });
    }
}
