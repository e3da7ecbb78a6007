//! A circular selector with four stops (off, low, medium, high).
//!
//! `DialView` owns the selector state and derived geometry. The embedding
//! toolkit drives it through three entry points and receives redraw
//! requests, content descriptions and accessibility semantics back through
//! [`DialHost`]:
//!
//! ```rust
//! use dial_canvas::DrawScope;
//! use dial_widget::*;
//!
//! struct Host;
//! impl DialHost for Host {
//!     fn request_redraw(&mut self) {}
//! }
//!
//! let mut dial = DialView::new(DialStyle::default());
//! dial.on_resize(200.0, 200.0);
//! dial.on_activate(&mut Host);
//! assert_eq!(dial.position(), DialPosition::Low);
//!
//! let mut scope = DrawScope::new();
//! dial.render(&mut scope);
//! ```

pub mod a11y;
pub mod dial;
pub mod geometry;
pub mod host;
pub mod position;
pub mod style;

pub use a11y::{action_label, dial_semantics};
pub use dial::{DialView, INDICATOR_COLOR, LABEL_TEXT_SIZE};
pub use host::DialHost;
pub use position::DialPosition;
pub use style::{DialAttributes, DialColors, DialStrings, DialStyle};
