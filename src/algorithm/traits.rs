use num_traits::{Bounded, Zero};
use std::fmt::Debug;
use std::ops::Sub;

/// Marker trait for edge weights and accumulated distances
///
/// Anything ordered and bounded with an additive zero qualifies: `f64`, unsigned and
/// signed integers, `OrderedFloat<f64>`. Negative values are rejected at lookup time.
pub trait Weight: Copy + PartialOrd + Zero + Bounded + Sub<Output = Self> + Debug {}

impl<T> Weight for T where T: Copy + PartialOrd + Zero + Bounded + Sub<Output = T> + Debug {}

/// Combinator signature: `(accumulated distance, edge weight) -> new distance`
pub type Combinator<W> = fn(W, W) -> W;

/// The default combinator, addition saturating at `W::max_value()`
///
/// Both arguments are non-negative, so `max_value() - accumulated` cannot overflow.
pub fn add<W: Weight>(accumulated: W, weight: W) -> W {
    if weight > W::max_value() - accumulated {
        W::max_value()
    } else {
        accumulated + weight
    }
}

/// A path from source to target, both inclusive
pub type Path<V> = Vec<V>;
