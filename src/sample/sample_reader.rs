use std::path::Path;
use std::fs::File;
use std::io::BufReader;

use crate::error::Result;
use super::sample_struct::Sample;


/// The delimiter set as default.
pub const DEFAULT_DELIMITER: char = ',';


/// A struct that returns [`Sample`].
/// Using this struct, one can read a delimited text file to [`Sample`].
/// The first line of the file must name every attribute.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use miniid3::prelude::*;
///
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::new()
///     .file(filename)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P, S> {
    file: Option<P>,
    target: Option<S>,
    delimiter: char,
}


impl<P, S> SampleReader<P, S> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            target: None,
            delimiter: DEFAULT_DELIMITER,
        }
    }


    /// Set the field delimiter.
    /// Default is `','`.
    /// Fields cannot contain the delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}


impl<P, S> Default for SampleReader<P, S> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for target label.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments,
    /// and returns `Result<Sample>`.
    /// This method consumes `self`.
    pub fn read(self) -> Result<Sample> {
        let file = self.file
            .expect("The file name is not set. Use `SampleReader::file`.");
        let target = self.target
            .expect(
                "Target (class) column is not specified. \
                Use `SampleReader::target_feature`."
            );

        let file = File::open(file)?;
        Sample::from_reader(BufReader::new(file), target, self.delimiter)
    }
}
