//! Headless host for the Orrery simulator.
//!
//! Paces simulation ticks against the wall clock, owns the renderer-side
//! overlay toggles, and hands positions and orbit traces to a [`RenderSink`].

pub mod bootstrap;
pub mod error;
pub mod overlay;
pub mod platform;
pub mod render;
pub mod session;
pub mod tick_loop;

pub use bootstrap::{ConfigOrigin, Startup};
pub use error::AppError;
pub use overlay::Overlay;
pub use platform::{PlatformDirs, PlatformError};
pub use render::{RenderSink, TracingRenderer};
pub use session::{Session, load_definitions};
pub use tick_loop::{DEFAULT_TICK_INTERVAL, MAX_FRAME_TIME, TickLoop};
