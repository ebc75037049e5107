pub mod config;
pub mod constants;
pub mod geo;
pub mod message;
pub mod note;
pub mod palette;
pub mod schedule;
pub mod store;
pub mod view;

pub use config::*;
pub use constants::*;
pub use geo::*;
pub use message::*;
pub use note::*;
pub use palette::*;
pub use schedule::*;
pub use store::*;
pub use view::*;
