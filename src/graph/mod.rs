pub mod adjacency;
pub mod generators;
pub mod traits;
pub mod weights;

pub use adjacency::AdjacencyGraph;
pub use traits::{Graph, Vertex};
pub use weights::{validate_weight, EdgeWeights, UnitWeights, WeightError, WeightFn, WeightMap};
