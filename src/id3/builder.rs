use crate::Sample;
use super::id3_algorithm::ID3;


/// A struct that builds [`ID3`].
/// `ID3Builder` keeps parameters for constructing [`ID3`].
///
/// # Example
///
/// ```no_run
/// use miniid3::prelude::*;
///
/// let sample = Sample::from_csv("/path/to/zoo.csv", "name").unwrap();
/// let id3 = ID3Builder::new(&sample)
///     .verbose(true)
///     .build();
/// ```
#[derive(Clone)]
pub struct ID3Builder<'a> {
    sample: &'a Sample,
    verbose: bool,
}


impl<'a> ID3Builder<'a> {
    /// Construct a new instance of [`ID3Builder`].
    /// By default, [`ID3Builder`] sets the parameters as follows;
    /// ```text
    /// verbose: false,
    /// ```
    pub fn new(sample: &'a Sample) -> Self {
        Self { sample, verbose: false, }
    }


    /// Print a line for each split and leaf while growing the tree.
    /// Default value is `false`.
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Build an [`ID3`].
    /// This method consumes `self`.
    pub fn build(self) -> ID3<'a> {
        ID3::from_components(self.sample, self.verbose)
    }
}
