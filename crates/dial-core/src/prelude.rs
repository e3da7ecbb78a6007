pub use crate::color::Color;
pub use crate::error::DialError;
pub use crate::geometry::{Rect, Size, Vec2};
pub use crate::input::*;
pub use crate::render_api::RenderBackend;
pub use crate::scene::{FontWeight, Scene, SceneNode, TextAlign};
pub use crate::semantics::{ActionId, CustomAction, Role, Semantics};
pub use crate::signal::{Signal, signal};
