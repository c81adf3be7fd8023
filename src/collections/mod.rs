//! Generic containers used by the ranking stage

mod heap;

pub use heap::Heap;
