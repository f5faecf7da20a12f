pub mod dijkstra;
pub mod path;
pub mod traits;
pub mod visitor;

pub use traits::{add, Combinator, Path, Weight};
