use std::fmt;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Row key of a submission. Payloads carry either a numeric or a string id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmissionId {
    Number(u64),
    /// Negative or fractional ids.
    OtherNumber(serde_json::Number),
    Text(String),
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionId::Number(n) => write!(f, "{}", n),
            SubmissionId::OtherNumber(n) => write!(f, "{}", n),
            SubmissionId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for SubmissionId {
    fn from(value: u64) -> Self {
        SubmissionId::Number(value)
    }
}

impl From<&str> for SubmissionId {
    fn from(value: &str) -> Self {
        SubmissionId::Text(value.to_string())
    }
}

/// One prover's benchmark result for a problem.
///
/// Times are in seconds, `peak_memory` in megabytes and `proof_size` in
/// kilobytes. Values are shown exactly as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub prover_name: String,
    pub proof_system: String,
    pub algorithm: String,
    pub setup_time: f64,
    pub witness_generation_time: f64,
    pub proof_generation_time: f64,
    pub verify_time: f64,
    pub peak_memory: f64,
    pub proof_size: f64,
}

impl SubmissionRecord {
    /// Parse a JSON array of submissions.
    pub fn list_from_json(json: &str) -> Result<Vec<SubmissionRecord>> {
        let records: Vec<SubmissionRecord> = serde_json::from_str(json)?;
        tracing::debug!(count = records.len(), "parsed submissions");
        Ok(records)
    }

    pub fn list_from_reader<R: Read>(reader: R) -> Result<Vec<SubmissionRecord>> {
        let records: Vec<SubmissionRecord> = serde_json::from_reader(reader)?;
        tracing::debug!(count = records.len(), "read submissions");
        Ok(records)
    }
}
