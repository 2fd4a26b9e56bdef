use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use super::domain::{Claim, ClaimId, ClaimPriority, ClaimType};

/// Failure while reading a batch of claims for committee review.
#[derive(Debug)]
pub enum ClaimImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidDate { claim_id: String, value: String },
}

impl std::fmt::Display for ClaimImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClaimImportError::Io(err) => write!(f, "failed to read claim batch: {}", err),
            ClaimImportError::Csv(err) => write!(f, "invalid claim CSV data: {}", err),
            ClaimImportError::InvalidDate { claim_id, value } => write!(
                f,
                "claim {} has submission date '{}', expected YYYY-MM-DD",
                claim_id, value
            ),
        }
    }
}

impl std::error::Error for ClaimImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClaimImportError::Io(err) => Some(err),
            ClaimImportError::Csv(err) => Some(err),
            ClaimImportError::InvalidDate { .. } => None,
        }
    }
}

impl From<std::io::Error> for ClaimImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ClaimImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads claims from a CSV export with the columns
/// `id,type,district,priority,area,families,village,submittedDate`.
///
/// Blank `area`/`families` cells leave the measurement absent. The optional columns may be
/// omitted entirely.
pub struct ClaimImporter;

impl ClaimImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Claim>, ClaimImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Claim>, ClaimImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut claims = Vec::new();
        for row in csv_reader.deserialize::<ClaimRow>() {
            claims.push(row?.into_claim()?);
        }
        Ok(claims)
    }
}

#[derive(Debug, Deserialize)]
struct ClaimRow {
    id: String,
    #[serde(rename = "type")]
    claim_type: ClaimType,
    district: String,
    priority: ClaimPriority,
    #[serde(default, deserialize_with = "blank_as_none")]
    area: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    families: Option<u32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    village: Option<String>,
    #[serde(
        rename = "submittedDate",
        default,
        deserialize_with = "blank_as_none"
    )]
    submitted_date: Option<String>,
}

impl ClaimRow {
    fn into_claim(self) -> Result<Claim, ClaimImportError> {
        let submitted_on = match self.submitted_date {
            Some(raw) => Some(NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
                ClaimImportError::InvalidDate {
                    claim_id: self.id.clone(),
                    value: raw.clone(),
                }
            })?),
            None => None,
        };

        Ok(Claim {
            id: ClaimId(self.id),
            claim_type: self.claim_type,
            district: self.district,
            priority: self.priority,
            area: self.area,
            families: self.families,
            village: self.village,
            submitted_on,
        })
    }
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
