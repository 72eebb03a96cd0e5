use serde::{Deserialize, Serialize};

use crate::recommendation::scoring::parse_required_interests;

/// A career profile from the catalog. `required_interests` is stored comma-joined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecord {
    pub name: String,
    pub description: String,
    pub required_interests: String,
    pub skills: String,
}

impl CareerRecord {
    /// Builds a record, joining the required interest labels with "," (no spaces).
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        required_interests: &[&str],
        skills: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required_interests: required_interests.join(","),
            skills: skills.into(),
        }
    }

    /// Required interest labels, trimmed, in stored order.
    pub fn required_interest_labels(&self) -> Vec<&str> {
        parse_required_interests(&self.required_interests)
    }
}
