use web_time::Instant;

use dial_core::{Color, FontWeight, Rect, Scene, SceneNode, Semantics, TextAlign};

pub struct Hud {
    pub enabled: bool,
    frame_count: u64,
    last_frame: Option<Instant>,
    fps_smooth: f32,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    pub fn new() -> Self {
        Self {
            enabled: false,
            frame_count: 0,
            last_frame: None,
            fps_smooth: 0.0,
        }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn overlay(&mut self, scene: &mut Scene) {
        self.frame_count += 1;
        let now = Instant::now();
        if let Some(prev) = self.last_frame.replace(now) {
            let dt = (now - prev).as_secs_f32();
            if dt > 0.0 {
                let fps = 1.0 / dt;
                // simple EMA
                let a = 0.2;
                self.fps_smooth = if self.fps_smooth == 0.0 {
                    fps
                } else {
                    (1.0 - a) * self.fps_smooth + a * fps
                };
            }
        }
        let text = format!(
            "frame: {}  |  fps: {:.1}  |  nodes: {}",
            self.frame_count,
            self.fps_smooth,
            scene.nodes.len()
        );
        scene.nodes.push(SceneNode::Text {
            rect: Rect {
                x: 8.0,
                y: 8.0,
                w: 200.0,
                h: 14.0,
            },
            text,
            color: Color::from_hex("#AAAAAA"),
            size: 14.0,
            align: TextAlign::Start,
            weight: FontWeight::Normal,
        });
    }
}

/// Text dumps of what a widget produced, for logs and headless hosts.
#[derive(Default)]
pub struct Inspector {
    pub hud: Hud,
}

impl Inspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&mut self, scene: &mut Scene) {
        if self.hud.enabled {
            self.hud.overlay(scene);
        }
        log::trace!("inspector frame with {} nodes", scene.nodes.len());
    }

    pub fn describe_scene(scene: &Scene) -> Vec<String> {
        scene.nodes.iter().map(describe_node).collect()
    }

    pub fn describe_semantics(semantics: &Semantics) -> String {
        let mut out = format!(
            "{:?} \"{}\"",
            semantics.role,
            semantics.label.as_deref().unwrap_or("")
        );
        for action in &semantics.actions {
            out.push_str(&format!(" [{:?}: {}]", action.id, action.label));
        }
        if !semantics.enabled {
            out.push_str(" (disabled)");
        }
        out
    }
}

fn describe_node(node: &SceneNode) -> String {
    match node {
        SceneNode::Ellipse { rect, color } => format!(
            "ellipse center=({:.1}, {:.1}) radius=({:.1}, {:.1}) color={}",
            rect.x + rect.w / 2.0,
            rect.y + rect.h / 2.0,
            rect.w / 2.0,
            rect.h / 2.0,
            color.to_hex()
        ),
        SceneNode::Text {
            rect,
            text,
            color,
            size,
            align,
            weight,
        } => format!(
            "text {text:?} at=({:.1}, {:.1}) size={size:.0} {align:?} {weight:?} color={}",
            rect.x,
            rect.y,
            color.to_hex()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dial_core::{ActionId, Role};

    #[test]
    fn describes_ellipse_by_center_and_radius() {
        let scene = Scene {
            clear_color: Color::BLACK,
            nodes: vec![SceneNode::Ellipse {
                rect: Rect {
                    x: 20.0,
                    y: 20.0,
                    w: 160.0,
                    h: 160.0,
                },
                color: Color::from_rgb(0, 0, 255),
            }],
        };
        assert_eq!(
            Inspector::describe_scene(&scene),
            ["ellipse center=(100.0, 100.0) radius=(80.0, 80.0) color=#0000FFFF"]
        );
    }

    #[test]
    fn describes_semantics_with_actions() {
        let s = Semantics::new(Role::Dial)
            .with_label("3")
            .with_action(ActionId::Click, "reset");
        assert_eq!(Inspector::describe_semantics(&s), "Dial \"3\" [Click: reset]");
    }

    #[test]
    fn hud_only_overlays_when_enabled() {
        let mut inspector = Inspector::new();
        let mut scene = Scene::default();
        inspector.frame(&mut scene);
        assert!(scene.nodes.is_empty());

        inspector.hud.toggle();
        inspector.frame(&mut scene);
        assert_eq!(scene.nodes.len(), 1);
        assert_eq!(inspector.hud.frame_count(), 1);
    }
}
