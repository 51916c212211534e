//!
//! Native JSON report format.
//!

use crate::report::Report;

///
/// Native JSON format that corresponds to the inner report model.
///
#[derive(Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl TryFrom<&Report> for Json {
    type Error = anyhow::Error;

    fn try_from(report: &Report) -> Result<Self, Self::Error> {
        let content = serde_json::to_string_pretty(report)
            .map_err(|error| anyhow::anyhow!("Report serialization: {error}"))?;
        Ok(Self { content })
    }
}
