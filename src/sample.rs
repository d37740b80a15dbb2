//! Struct `Sample` represents a batch of categorical instances.

// Provides the set of target values.
pub(crate) mod target_values;
// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use sample_reader::SampleReader;
pub use sample_struct::Sample;
pub use target_values::TargetValues;
