//! # Core primitives
//!
//! Everything the dial widget and its embedders share:
//!
//! - `Color` and the `UNSET` sentinel used for missing theming input.
//! - `Vec2` / `Size` / `Rect` geometry.
//! - `Semantics`, the accessibility node a widget publishes.
//! - `Signal<T>`, an observable value.
//! - Pointer and key events delivered by the host.
//! - `Scene`, the retained output a `RenderBackend` consumes.
//!
//! ```rust
//! use dial_core::*;
//!
//! let position = signal(0u8);
//! position.update(|p| *p += 1);
//! assert_eq!(position.get(), 1);
//! ```

pub mod color;
pub mod error;
pub mod geometry;
pub mod input;
pub mod prelude;
pub mod render_api;
pub mod scene;
pub mod semantics;
pub mod signal;
pub mod tests;

pub use color::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use render_api::*;
pub use scene::*;
pub use semantics::*;
pub use signal::*;
