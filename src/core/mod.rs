pub mod celebration;
pub mod config;
pub mod constants;
pub mod cue;
pub mod dodge;
pub mod geometry;
pub mod particles;
pub mod persuasion;
pub mod placement;
pub mod sample;
pub mod session;
pub mod timeline;

pub use celebration::*;
pub use config::*;
pub use cue::*;
pub use dodge::*;
pub use geometry::*;
pub use particles::*;
pub use persuasion::*;
pub use placement::*;
pub use session::*;
pub use timeline::*;
