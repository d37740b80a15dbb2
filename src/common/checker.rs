//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::Sample;
use crate::error::{Error, Result};


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample) -> Result<()> {
    let (n_sample, _) = sample.shape();


    // `sample` must have at least one instance to label a leaf.
    if n_sample == 0 {
        return Err(Error::EmptySample);
    }

    Ok(())
}
