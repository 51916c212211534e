//!
//! The duration statistic displayed in charts.
//!

///
/// The duration statistic displayed in charts.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// The average.
    Avg,
    /// The minimum.
    Min,
    /// The maximum.
    Max,
    /// The median.
    #[default]
    Median,
    /// The 90th percentile.
    P90,
    /// The 95th percentile.
    P95,
    /// The 99th percentile.
    P99,
}

impl Metric {
    /// All metrics, in table column order.
    pub const ALL: [Self; 7] = [
        Self::Avg,
        Self::Min,
        Self::Max,
        Self::Median,
        Self::P90,
        Self::P95,
        Self::P99,
    ];

    ///
    /// Returns the table column caption.
    ///
    pub fn caption(&self) -> &'static str {
        match self {
            Self::Avg => "Avg",
            Self::Min => "Min",
            Self::Max => "Max",
            Self::Median => "Median",
            Self::P90 => "P90",
            Self::P95 => "P95",
            Self::P99 => "P99",
        }
    }
}

impl std::str::FromStr for Metric {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|metric| metric.to_string() == string)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown metric `{string}`. Supported metrics: {}",
                    Self::ALL
                        .into_iter()
                        .map(|metric| metric.to_string())
                        .collect::<Vec<String>>()
                        .join(", ")
                )
            })
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Avg => write!(f, "avg"),
            Self::Min => write!(f, "min"),
            Self::Max => write!(f, "max"),
            Self::Median => write!(f, "median"),
            Self::P90 => write!(f, "p90"),
            Self::P95 => write!(f, "p95"),
            Self::P99 => write!(f, "p99"),
        }
    }
}
