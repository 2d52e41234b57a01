//! The components module contains the page's views.

mod app;
mod details;
mod icons;
mod player;
mod results;
mod search;

pub use app::*;
pub use details::*;
pub use icons::*;
pub use player::*;
pub use results::*;
pub use search::*;
