pub mod config;
pub mod layout;

pub use config::*;
pub use layout::*;
