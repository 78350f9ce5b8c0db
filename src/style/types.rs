use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Identifier of a stored report. The backend uses both integer and string
/// keys, so either form round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportId {
    Int(i64),
    Str(String),
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportId::Int(id) => write!(f, "{}", id),
            ReportId::Str(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for ReportId {
    type Err = anyhow::Error;

    /// Parsed ids are always kept verbatim as [`ReportId::Str`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            bail!("Report id must not be empty.")
        }
        Ok(ReportId::Str(s.to_string()))
    }
}

/// Source kinds the backend accepts for `input_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    /// Raw text supplied in `source_text`.
    Text,
    /// Text read from an uploaded file, also sent in `source_text`.
    File,
    /// A previously stored analysis referenced by `analysis_report_id`.
    Analysis,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::File => "file",
            InputType::Analysis => "analysis",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(InputType::Text),
            "file" => Ok(InputType::File),
            "analysis" => Ok(InputType::Analysis),
            other => bail!(
                "Invalid input type '{}'. Expected 'text', 'file' or 'analysis'.",
                other
            ),
        }
    }
}

/// Body of a style transfer submission.
///
/// Every field is always serialized; `analysis_report_id` goes out as `null`
/// when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleTransferPayload {
    pub input_type: String,
    pub new_theme: String,
    pub provider: String,
    pub model: String,
    pub source_text: String,
    pub analysis_report_id: Option<ReportId>,
}

/// Successful transfer response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferResponse {
    pub status: String,
    pub result: String,
}

impl TransferResponse {
    pub fn from_value(value: &Value) -> Result<Self> {
        TransferResponse::deserialize(value).context("Unexpected style transfer response shape")
    }
}
