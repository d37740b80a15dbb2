//! Provides `Classifier` trait.
use crate::Sample;
use crate::error::{Error, Result};


/// A trait that defines the behavior of classifier.
/// An instance is a full row of the sample it is taken from,
/// one value per attribute.
/// The value at the target attribute is ignored.
pub trait Classifier {
    /// Predicts the class label of the given instance.
    fn predict<S>(&self, instance: &[S]) -> Result<&str>
        where S: AsRef<str>;


    /// Predicts the class labels of the instances in `sample`.
    /// Stops at the first instance that cannot be classified.
    fn predict_all<'a>(&'a self, sample: &Sample) -> Result<Vec<&'a str>> {
        sample.instances()
            .iter()
            .map(|instance| self.predict(&instance[..]))
            .collect()
    }


    /// Returns the ratio of instances in `sample`
    /// whose target value is predicted correctly.
    fn accuracy(&self, sample: &Sample) -> Result<f64> {
        let n_sample = sample.shape().0;
        if n_sample == 0 { return Err(Error::EmptySample); }

        let correct = self.predict_all(sample)?
            .into_iter()
            .enumerate()
            .filter(|&(i, label)| label == sample.target_at(i))
            .count();

        Ok(correct as f64 / n_sample as f64)
    }
}
