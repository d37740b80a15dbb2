use polars::prelude::*;

use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::collections::HashSet;
use std::ops::Index;

use crate::error::{Error, Result};
use super::target_values::TargetValues;


/// Struct `Sample` holds a batch of categorical instances.
/// Each instance is a row of string values, one per attribute,
/// including the target attribute.
/// Instances are never modified after construction.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) attributes: Vec<String>,
    pub(super) instances: Vec<Vec<String>>,
    pub(super) target: usize,
    pub(super) target_values: TargetValues,
}


impl Sample {
    /// Construct a new `Sample` from a header and rows.
    /// The attribute named `target` becomes the target attribute.
    ///
    /// Rows are numbered from `2` in the returned errors,
    /// as if the header were the first line of a file.
    pub fn new<S, T>(header: Vec<S>, rows: Vec<Vec<S>>, target: T)
        -> Result<Self>
        where S: Into<String>,
              T: AsRef<str>,
    {
        let attributes = header.into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();
        let width = attributes.len();

        let instances = rows.into_iter()
            .enumerate()
            .map(|(i, row)| -> Result<Vec<String>> {
                let row = row.into_iter()
                    .map(Into::into)
                    .collect::<Vec<String>>();
                check_width(&row, width, i + 2)?;
                Ok(row)
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_components(attributes, instances, target.as_ref())
    }


    /// Read a delimited text to `Sample`.
    /// The first non-blank line is the header.
    /// Blank lines are skipped and
    /// each field is trimmed of the surrounding white spaces.
    pub fn from_reader<R, T>(reader: R, target: T, delimiter: char)
        -> Result<Self>
        where R: BufRead,
              T: AsRef<str>,
    {
        let mut header: Option<Vec<String>> = None;
        let mut instances = Vec::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let fields = line.split(delimiter)
                .map(|x| x.trim().to_string())
                .collect::<Vec<_>>();

            match header {
                None => { header = Some(fields); },
                Some(ref attributes) => {
                    check_width(&fields, attributes.len(), i + 1)?;
                    instances.push(fields);
                },
            }
        }

        let attributes = header.unwrap_or_default();
        Self::from_components(attributes, instances, target.as_ref())
    }


    /// Read a CSV format file to `Sample` type.
    /// The file must have the header row.
    pub fn from_csv<P, T>(file: P, target: T) -> Result<Self>
        where P: AsRef<Path>,
              T: AsRef<str>,
    {
        let file = File::open(file)?;
        Self::from_reader(BufReader::new(file), target, ',')
    }


    /// Convert `polars::DataFrame` into `Sample`.
    /// Every column is cast to a string column,
    /// so numeric columns are treated as categorical ones.
    /// This method takes the ownership for the given `data`.
    pub fn from_dataframe<T>(data: DataFrame, target: T) -> Result<Self>
        where T: AsRef<str>
    {
        let (n_sample, n_attribute) = data.shape();
        let attributes = data.get_column_names()
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let mut instances = vec![Vec::with_capacity(n_attribute); n_sample];
        for series in data.get_columns() {
            let column = series.cast(&DataType::Utf8)?;
            let column = column.utf8()?;

            for (row, value) in column.into_iter().enumerate() {
                let value = value.ok_or_else(|| Error::MissingValue {
                    row,
                    attribute: series.name().to_string(),
                })?;
                instances[row].push(value.to_string());
            }
        }

        Self::from_components(attributes, instances, target.as_ref())
    }


    /// Validate the header and find the target attribute.
    fn from_components(
        attributes: Vec<String>,
        instances: Vec<Vec<String>>,
        target: &str,
    ) -> Result<Self>
    {
        let mut seen = HashSet::new();
        for name in attributes.iter() {
            if !seen.insert(name.clone()) {
                return Err(Error::DuplicateAttribute(name.clone()));
            }
        }

        let target = attributes.iter()
            .position(|name| name == target)
            .ok_or_else(|| Error::UnknownTarget(target.to_string()))?;

        let target_values = TargetValues::collect(&instances, target);

        let sample = Self { attributes, instances, target, target_values, };
        Ok(sample)
    }


    /// Returns the attribute names, including the target.
    #[inline]
    pub fn attributes(&self) -> &[String] {
        &self.attributes[..]
    }


    /// Returns the index of the target attribute.
    #[inline]
    pub fn target_index(&self) -> usize {
        self.target
    }


    /// Returns the name of the target attribute.
    #[inline]
    pub fn target_name(&self) -> &str {
        &self.attributes[self.target]
    }


    /// Returns the distinct values of the target attribute.
    #[inline]
    pub fn target_values(&self) -> &TargetValues {
        &self.target_values
    }


    /// Returns the instances.
    #[inline]
    pub fn instances(&self) -> &[Vec<String>] {
        &self.instances[..]
    }


    /// Returns the indices of the non-target attributes
    /// in ascending order.
    pub fn feature_indices(&self) -> Vec<usize> {
        (0..self.attributes.len())
            .filter(|&i| i != self.target)
            .collect()
    }


    /// Returns the value of attribute `attribute` at row `row`.
    #[inline]
    pub fn value(&self, row: usize, attribute: usize) -> &str {
        &self.instances[row][attribute]
    }


    /// Returns the target value at row `row`.
    #[inline]
    pub fn target_at(&self, row: usize) -> &str {
        self.value(row, self.target)
    }


    /// Returns the pair of the number of instances and
    /// the number of attributes (including the target).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.instances.len(), self.attributes.len())
    }


    /// Split `self` into a training sample and a test sample.
    /// The instances `ix[start..end]` form the test sample
    /// and the rest form the training sample.
    /// Each part recomputes its own target values.
    ///
    /// Panics if `start..end` is not a range within `ix`.
    pub fn split<T>(&self, ix: T, start: usize, end: usize)
        -> (Sample, Sample)
        where T: AsRef<[usize]>
    {
        let ix = ix.as_ref();
        assert!(
            start <= end && end <= ix.len(),
            "The test range `{start}..{end}` is out of `0..{}`.",
            ix.len()
        );

        let test = ix[start..end].iter()
            .map(|&i| self.instances[i].clone())
            .collect::<Vec<_>>();
        let train = ix[..start].iter()
            .chain(ix[end..].iter())
            .map(|&i| self.instances[i].clone())
            .collect::<Vec<_>>();

        (self.with_instances(train), self.with_instances(test))
    }


    fn with_instances(&self, instances: Vec<Vec<String>>) -> Self {
        let target_values = TargetValues::collect(&instances, self.target);
        Self {
            attributes: self.attributes.clone(),
            instances,
            target: self.target,
            target_values,
        }
    }
}


/// Checks that `row` has one field per attribute.
#[inline]
fn check_width(row: &[String], expected: usize, line: usize) -> Result<()> {
    let found = row.len();
    if found != expected {
        return Err(Error::MalformedRow { line, expected, found });
    }
    Ok(())
}


impl Index<usize> for Sample {
    type Output = [String];


    fn index(&self, row: usize) -> &Self::Output {
        &self.instances[row][..]
    }
}


impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Target attribute = {}", self.target_name())?;

        let others = self.feature_indices()
            .into_iter()
            .map(|i| self.attributes[i].as_str())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "Other attributes = {others}")
    }
}
