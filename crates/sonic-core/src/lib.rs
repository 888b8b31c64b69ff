pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod payload;
pub mod playback;
pub mod preview;
pub mod projection;
pub mod scene;
pub mod selection;
pub mod session;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use error::{Error, PlaybackError, Result};
pub use payload::*;
pub use playback::*;
pub use preview::*;
pub use projection::*;
pub use scene::*;
pub use selection::*;
pub use session::*;
