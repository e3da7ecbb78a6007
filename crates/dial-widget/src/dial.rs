use dial_canvas::{DrawSurface, TextStyle};
use dial_core::*;

use crate::a11y::dial_semantics;
use crate::geometry::{
    INDICATOR_RADIUS_OFFSET, INDICATOR_SIZE_RATIO, LABEL_RADIUS_OFFSET, dial_radius,
    point_for_position,
};
use crate::{DialHost, DialPosition, DialStyle};

/// Label text size in px.
pub const LABEL_TEXT_SIZE: f32 = 55.0;
/// Color of the position indicator dot, independent of the dial color.
pub const INDICATOR_COLOR: Color = Color::BLACK;

/// A circular selector with four stops that advances on every activation.
pub struct DialView {
    style: DialStyle,
    position: Signal<DialPosition>,
    size: Size,
    radius: f32,
    content_description: String,
    semantics: Semantics,
    pressed: Option<PointerId>,
}

impl DialView {
    pub fn new(style: DialStyle) -> Self {
        let position = DialPosition::default();
        let content_description = style.strings.label_for(position).to_string();
        let semantics = dial_semantics(position, &style.strings);
        Self {
            style,
            position: signal(position),
            size: Size::default(),
            radius: 0.0,
            content_description,
            semantics,
            pressed: None,
        }
    }

    pub fn position(&self) -> DialPosition {
        self.position.get()
    }

    /// Shared handle for observers. Writing through it bypasses the
    /// activation protocol; embedders should only subscribe.
    pub fn position_signal(&self) -> Signal<DialPosition> {
        self.position.clone()
    }

    pub fn style(&self) -> &DialStyle {
        &self.style
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn center(&self) -> Vec2 {
        self.size.center()
    }

    pub fn content_description(&self) -> &str {
        &self.content_description
    }

    pub fn semantics(&self) -> &Semantics {
        &self.semantics
    }

    pub fn dial_color(&self) -> Color {
        self.style.colors.for_position(self.position())
    }

    pub fn marker_point(&self) -> Vec2 {
        point_for_position(
            self.position(),
            self.radius + INDICATOR_RADIUS_OFFSET,
            self.center(),
        )
    }

    pub fn label_point(&self, position: DialPosition) -> Vec2 {
        point_for_position(position, self.radius + LABEL_RADIUS_OFFSET, self.center())
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.size = Size::new(width, height);
        self.radius = dial_radius(self.size);
        log::trace!("dial resized to {width}x{height}, radius {}", self.radius);
    }

    /// Advances to the next position unless the host's own click handling
    /// consumed the event. Always reports the activation as handled.
    pub fn on_activate(&mut self, host: &mut (impl DialHost + ?Sized)) -> bool {
        if host.perform_default_click() {
            log::debug!("dial activation handled by host listener");
            return true;
        }

        let from = self.position();
        let to = from.next();
        log::debug!("dial {from:?} -> {to:?}");

        self.content_description = self.style.strings.label_for(to).to_string();
        host.set_content_description(&self.content_description);

        self.semantics = dial_semantics(to, &self.style.strings);
        host.update_semantics(&self.semantics);

        // Observers run here, after the accessibility state is current.
        self.position.set(to);
        host.request_redraw();
        true
    }

    /// Paints background disc, indicator dot, then labels, in that order.
    pub fn render(&self, surface: &mut (impl DrawSurface + ?Sized)) {
        let fill = self.dial_color();
        surface.draw_circle(self.center(), self.radius, fill);
        surface.draw_circle(
            self.marker_point(),
            self.radius * INDICATOR_SIZE_RATIO,
            INDICATOR_COLOR,
        );

        // Every label uses the current dial color.
        let label_style = TextStyle::new(fill, LABEL_TEXT_SIZE).centered().bold();
        for position in DialPosition::ALL {
            surface.draw_text(
                self.style.strings.label_for(position),
                self.label_point(position),
                label_style,
            );
        }
    }

    /// Press and release inside the widget bounds is one activation.
    pub fn handle_pointer(
        &mut self,
        event: &PointerEvent,
        host: &mut (impl DialHost + ?Sized),
    ) -> bool {
        let bounds = Rect::from_size(self.size);
        match event.event {
            PointerEventKind::Down(PointerButton::Primary) => {
                if bounds.contains(event.position) && self.pressed.is_none() {
                    self.pressed = Some(event.id);
                    true
                } else {
                    false
                }
            }
            PointerEventKind::Up(PointerButton::Primary) => {
                if self.pressed != Some(event.id) {
                    return false;
                }
                self.pressed = None;
                if bounds.contains(event.position) {
                    self.on_activate(host)
                } else {
                    false
                }
            }
            PointerEventKind::Cancel | PointerEventKind::Leave => {
                if self.pressed == Some(event.id) {
                    self.pressed = None;
                }
                false
            }
            _ => false,
        }
    }

    /// Unmodified Enter or Space activates; chords are left to the host.
    pub fn handle_key(&mut self, event: &KeyEvent, host: &mut (impl DialHost + ?Sized)) -> bool {
        if event.is_repeat || !event.modifiers.is_empty() {
            return false;
        }
        match event.key {
            Key::Enter | Key::Space => self.on_activate(host),
            _ => false,
        }
    }

    /// Entry point for assistive services triggering an action by id.
    pub fn perform_accessibility_action(
        &mut self,
        action: ActionId,
        host: &mut (impl DialHost + ?Sized),
    ) -> bool {
        match action {
            ActionId::Click => self.on_activate(host),
            _ => false,
        }
    }
}
