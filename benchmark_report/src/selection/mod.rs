//!
//! Selection of the largest run configuration.
//!

use std::cmp::Ordering;

use crate::error::Error;
use crate::model::suite::benchmark::run::config::RunConfig;
use crate::model::suite::benchmark::run::RunResult;


///
/// Orders run configurations from the largest to the smallest.
///
/// Returns [`Ordering::Less`] if `a` sorts before `b`, that is, if `a` has the
/// larger cluster size, or the same cluster size and the larger size, or the
/// same cluster size and size and the larger length. Configurations differing
/// only in the compilation cache flag are equal.
///
pub fn compare_configs(a: &RunConfig, b: &RunConfig) -> Ordering {
    a.compare(b)
}

///
/// Returns the result whose configuration sorts first under [`compare_configs`].
///
/// Among equal configurations the earliest result wins. The input is left untouched.
///
/// # Errors
///
/// If `results` is empty.
///
pub fn find_largest_config(results: &[RunResult]) -> Result<&RunResult, Error> {
    let mut sorted: Vec<&RunResult> = results.iter().collect();
    sorted.sort_by(|a, b| compare_configs(&a.run_config, &b.run_config));
    sorted.first().copied().ok_or(Error::EmptyRunResults)
}
