pub mod aggregator;
pub mod exclusion;
pub mod tree_walker;
