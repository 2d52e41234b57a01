pub mod beets;
pub mod models;

pub use beets::*;
pub use models::*;
