pub mod artifact;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod decoy;
pub mod drift;
pub mod geometry;
pub mod reveal;
pub mod session;

pub use artifact::*;
pub use catalog::*;
pub use config::*;
pub use decoy::*;
pub use drift::*;
pub use geometry::*;
pub use reveal::*;
pub use session::*;
