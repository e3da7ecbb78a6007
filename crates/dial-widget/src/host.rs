use dial_core::Semantics;

/// What the embedding toolkit provides to a `DialView`.
///
/// `on_resize`, `on_activate` and `render` are the entry points the host
/// calls; this trait is the way back out.
pub trait DialHost {
    /// Runs externally registered click listeners. Returning `true` means
    /// the click was fully handled and the dial must not advance.
    fn perform_default_click(&mut self) -> bool {
        false
    }

    /// Schedules a repaint. The host calls `render` later, never inside
    /// this call.
    fn request_redraw(&mut self);

    fn set_content_description(&mut self, _text: &str) {}

    fn update_semantics(&mut self, _semantics: &Semantics) {}
}
