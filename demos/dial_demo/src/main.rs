//! Headless host for the dial: loads styled attributes, lays the widget
//! out, taps it a few times and prints every frame it paints.
//!
//! ```text
//! RUST_LOG=debug cargo run -p dial_demo -- demos/dial_demo/attributes.json 5
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use dial_canvas::DrawScope;
use dial_core::prelude::*;
use dial_devtools::Inspector;
use dial_widget::{DialAttributes, DialHost, DialStyle, DialView};

const WIDTH: f32 = 400.0;
const HEIGHT: f32 = 300.0;
const DEFAULT_TAPS: usize = 5;

#[derive(Default)]
struct HeadlessHost {
    redraw_requested: bool,
}

impl DialHost for HeadlessHost {
    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    fn set_content_description(&mut self, text: &str) {
        log::info!("content description: {text}");
    }

    fn update_semantics(&mut self, semantics: &Semantics) {
        log::info!("semantics: {}", Inspector::describe_semantics(semantics));
    }
}

struct TextBackend {
    inspector: Inspector,
    surface: (u32, u32),
}

impl RenderBackend for TextBackend {
    fn configure_surface(&mut self, width: u32, height: u32) {
        self.surface = (width, height);
    }

    fn frame(&mut self, scene: &Scene) {
        let mut scene = scene.clone();
        self.inspector.frame(&mut scene);
        println!(
            "-- frame {}x{} clear={}",
            self.surface.0,
            self.surface.1,
            scene.clear_color.to_hex()
        );
        for line in Inspector::describe_scene(&scene) {
            println!("   {line}");
        }
    }
}

fn default_attributes() -> DialAttributes {
    DialAttributes {
        color_off: Some("#9E9E9E".into()),
        color_low: Some("#2196F3".into()),
        color_medium: Some("#4CAF50".into()),
        color_high: Some("#F44336".into()),
        strings: None,
    }
}

fn load_style(path: Option<&Path>) -> Result<DialStyle> {
    let attrs = match path {
        Some(p) => {
            let raw = std::fs::read_to_string(p)
                .with_context(|| format!("reading attributes from {}", p.display()))?;
            serde_json::from_str::<DialAttributes>(&raw)
                .with_context(|| format!("parsing attributes in {}", p.display()))?
        }
        None => default_attributes(),
    };
    attrs.resolve().context("resolving dial attributes")
}

fn paint(dial: &DialView, scope: &mut DrawScope, backend: &mut TextBackend) {
    scope.clear();
    dial.render(scope);
    backend.frame(&scope.to_scene(Color::WHITE));
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next();
    let taps = match args.next() {
        Some(n) => n
            .parse::<usize>()
            .with_context(|| format!("tap count {n:?} is not a number"))?,
        None => DEFAULT_TAPS,
    };

    let style = load_style(path.as_deref().map(Path::new))?;
    let mut dial = DialView::new(style);
    let mut host = HeadlessHost::default();
    let mut backend = TextBackend {
        inspector: Inspector::new(),
        surface: (0, 0),
    };
    backend.inspector.hud.enabled = std::env::var_os("DIAL_HUD").is_some();

    backend.configure_surface(WIDTH as u32, HEIGHT as u32);
    dial.on_resize(WIDTH, HEIGHT);
    let mut scope = DrawScope::new();
    println!(
        "initial: {}",
        Inspector::describe_semantics(dial.semantics())
    );
    paint(&dial, &mut scope, &mut backend);

    let center = dial.center();
    for _ in 0..taps {
        let down = PointerEvent::touch(PointerEventKind::Down(PointerButton::Primary), center);
        let up = PointerEvent::touch(PointerEventKind::Up(PointerButton::Primary), center);
        dial.handle_pointer(&down, &mut host);
        dial.handle_pointer(&up, &mut host);

        if std::mem::take(&mut host.redraw_requested) {
            println!("position: {:?}", dial.position());
            paint(&dial, &mut scope, &mut backend);
        }
    }

    Ok(())
}
