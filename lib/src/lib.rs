mod clues;
mod data;
mod engine;
mod results;
mod stats;

pub use clues::*;
pub use data::load_dictionary;
pub use data::LoadMode;
pub use data::WordList;
pub use engine::*;
pub use results::*;
pub use stats::*;
