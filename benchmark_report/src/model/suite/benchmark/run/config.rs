//!
//! The benchmark run configuration.
//!

use std::cmp::Ordering;

///
/// The parameterization a benchmark was executed with.
///
/// Equality covers all four fields, while [`RunConfig::compare`] only looks at
/// the three size dimensions.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    /// The number of nodes in the cluster.
    pub cluster_size: u64,
    /// The data size.
    pub size: u64,
    /// The string length.
    pub length: u64,
    /// Whether the compilation cache was disabled.
    #[serde(default)]
    pub disable_compilation_cache: bool,
}

impl RunConfig {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(cluster_size: u64, size: u64, length: u64, disable_compilation_cache: bool) -> Self {
        Self {
            cluster_size,
            size,
            length,
            disable_compilation_cache,
        }
    }

    ///
    /// Orders configurations from the largest to the smallest.
    ///
    /// Compares the cluster size, then the size, then the length, each in
    /// descending order. The compilation cache flag does not take part.
    ///
    pub fn compare(&self, other: &Self) -> Ordering {
        other
            .cluster_size
            .cmp(&self.cluster_size)
            .then_with(|| other.size.cmp(&self.size))
            .then_with(|| other.length.cmp(&self.length))
    }
}

impl std::fmt::Display for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cluster {}, size {}, length {}",
            self.cluster_size, self.size, self.length
        )?;
        if self.disable_compilation_cache {
            write!(f, ", no compilation cache")?;
        }
        Ok(())
    }
}
