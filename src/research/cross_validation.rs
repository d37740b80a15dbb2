use rand::prelude::*;
use colored::Colorize;
use crate::Sample;


const WIDTH: usize = 9;

/// A struct that generates
/// pairs of training/test sample for cross validation.
/// The `i`th test sample is the `i`th of `n_folds` contiguous blocks
/// of the (optionally shuffled) instances;
/// the training sample is the rest.
/// # Example
/// ```no_run
/// use miniid3::prelude::*;
/// use miniid3::CrossValidation;
///
/// let sample = SampleReader::new()
///     .file("/path/to/zoo.csv")
///     .target_feature("type")
///     .read()
///     .unwrap();
/// let cv = CrossValidation::new(&sample)
///     .n_folds(5)
///     .verbose(true)
///     .seed(777)
///     .shuffle();
/// for (train, test) in cv {
///     let tree = ID3Builder::new(&train)
///         .build()
///         .fit()
///         .unwrap();
///
///     let train_acc = tree.accuracy(&train).unwrap();
///     // Unseen values make a test instance unclassifiable.
///     let test_acc = tree.accuracy(&test);
///     println!("[train: {train_acc}] [test: {test_acc:?}]");
/// }
/// ```
pub struct CrossValidation<'a> {
    current_fold: usize,
    n_folds: usize,
    seed: u64,
    sample: &'a Sample,
    ix: Vec<usize>,
    verbose: bool,
}


impl<'a> CrossValidation<'a> {
    /// Construct a new instance of `CrossValidation.`
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        let n_sample = sample.shape().0;
        let ix = (0..n_sample).collect::<Vec<_>>();
        Self {
            current_fold: 0,
            n_folds: 5,
            seed: 1234,
            verbose: false,
            sample,
            ix,
        }
    }


    /// Set the number of folds.
    /// Default value is `5.`
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        let n_sample = self.sample.shape().0;
        assert!(
            (2..=n_sample).contains(&n_folds),
            "The number of folds should be in `[2, {n_sample}]`."
        );
        self.n_folds = n_folds;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints some information
    /// when generating a train/test pair.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the training sample.
    /// By default, `CrossValidation` does not shuffle the sample.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }


    /// Returns the training/test sample for `i`th fold.
    #[inline]
    fn fold_at(&self, i: usize) -> (Sample, Sample) {
        let n_sample = self.ix.len();
        let start = i * n_sample / self.n_folds;
        let end = (i + 1) * n_sample / self.n_folds;
        self.sample.split(&self.ix, start, end)
    }
}


impl<'a> Iterator for CrossValidation<'a> {
    type Item = (Sample, Sample);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds { return None; }

        let output = self.fold_at(self.current_fold);
        self.current_fold += 1;

        if self.verbose {
            let train_size = output.0.shape().0;
            let test_size = output.1.shape().0;
            println!(
                "{}    {}    {}",
                format!("  [{: >3}'th fold]", self.current_fold).bold().red(),
                format!("[TRAIN {:>WIDTH$}]", train_size).bold().green(),
                format!("[TEST {:>WIDTH$}]", test_size).bold().yellow(),
            );
        }

        Some(output)
    }
}
