pub mod cluster;
pub mod spiderfier;
pub mod web;

pub use cluster::*;
pub use spiderfier::*;
pub use web::*;
