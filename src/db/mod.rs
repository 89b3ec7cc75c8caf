pub mod entities;
pub mod genres;
pub mod repositories;

pub use entities::*;
