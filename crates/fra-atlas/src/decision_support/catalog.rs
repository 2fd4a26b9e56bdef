use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::{ClaimPriority, ClaimType};

/// Identifier wrapper for schemes, e.g. `sch-education`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemeId(pub String);

impl SchemeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SchemeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Targeting rules for a scheme. Every field is optional; an absent rule scores nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemeCriteria {
    pub claim_types: Vec<ClaimType>,
    pub min_families: Option<u32>,
    /// Hectares.
    pub min_area: Option<f64>,
    pub districts_priority: Vec<String>,
    pub priority_boost: BTreeMap<ClaimPriority, u32>,
}

/// Centrally sponsored scheme with its display hints, targeting rules and benefits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeDefinition {
    pub id: SchemeId,
    pub name: String,
    pub category: String,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub criteria: SchemeCriteria,
    #[serde(default)]
    pub benefits: Vec<String>,
}

impl SchemeDefinition {
    pub fn summary(&self) -> SchemeSummary {
        SchemeSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            icon: self.icon.clone(),
            color: self.color.clone(),
            category: self.category.clone(),
        }
    }
}

/// Read-only projection used to populate scheme pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeSummary {
    pub id: SchemeId,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub category: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read scheme catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid scheme catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("scheme catalog contains no schemes")]
    Empty,
    #[error("scheme id '{0}' appears more than once")]
    DuplicateScheme(SchemeId),
    #[error("scheme at position {0} has a blank id")]
    BlankId(usize),
    #[error("scheme '{0}' has a blank display name")]
    BlankName(SchemeId),
}

/// Immutable, ordered set of scheme definitions. Declaration order is the tie-break order
/// for equal recommendation scores.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemeCatalog {
    schemes: Vec<SchemeDefinition>,
}

impl SchemeCatalog {
    pub fn new(schemes: Vec<SchemeDefinition>) -> Result<Self, CatalogError> {
        if schemes.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for (position, scheme) in schemes.iter().enumerate() {
            if scheme.id.0.trim().is_empty() {
                return Err(CatalogError::BlankId(position));
            }
            if scheme.name.trim().is_empty() {
                return Err(CatalogError::BlankName(scheme.id.clone()));
            }
            if !seen.insert(&scheme.id) {
                return Err(CatalogError::DuplicateScheme(scheme.id.clone()));
            }
        }

        Ok(Self { schemes })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let schemes: Vec<SchemeDefinition> = serde_json::from_reader(reader)?;
        Self::new(schemes)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// The four schemes the atlas ships with.
    pub fn standard() -> Self {
        Self {
            schemes: standard_schemes(),
        }
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    pub fn get(&self, id: &SchemeId) -> Option<&SchemeDefinition> {
        self.schemes.iter().find(|scheme| &scheme.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemeDefinition> {
        self.schemes.iter()
    }

    pub fn summaries(&self) -> Vec<SchemeSummary> {
        self.schemes.iter().map(SchemeDefinition::summary).collect()
    }
}

impl Default for SchemeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn boosts(high: u32, medium: u32, low: u32) -> BTreeMap<ClaimPriority, u32> {
    BTreeMap::from([
        (ClaimPriority::High, high),
        (ClaimPriority::Medium, medium),
        (ClaimPriority::Low, low),
    ])
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn standard_schemes() -> Vec<SchemeDefinition> {
    let forest_rights = vec![
        ClaimType::CommunityForestRights,
        ClaimType::IndividualForestRights,
    ];

    vec![
        SchemeDefinition {
            id: SchemeId::from("sch-education"),
            name: "Educational Support".to_string(),
            category: "Human Development".to_string(),
            icon: "GraduationCap".to_string(),
            color: "#2563eb".to_string(),
            criteria: SchemeCriteria {
                claim_types: forest_rights.clone(),
                min_families: Some(1),
                min_area: None,
                districts_priority: strings(&["Barwani", "Jhabua", "Dhar"]),
                priority_boost: boosts(15, 8, 0),
            },
            benefits: strings(&[
                "Scholarships for ST students",
                "Residential hostels near schools",
                "Digital access & remote learning centers",
            ]),
        },
        SchemeDefinition {
            id: SchemeId::from("sch-health"),
            name: "Healthcare Access".to_string(),
            category: "Human Development".to_string(),
            icon: "Stethoscope".to_string(),
            color: "#16a34a".to_string(),
            criteria: SchemeCriteria {
                claim_types: forest_rights.clone(),
                min_families: None,
                min_area: Some(2.0),
                districts_priority: strings(&["Khandwa", "Barwani"]),
                priority_boost: boosts(12, 6, 0),
            },
            benefits: strings(&[
                "Mobile clinics and telemedicine",
                "Maternal and child health programs",
                "Health camps for seasonal outbreaks",
            ]),
        },
        SchemeDefinition {
            id: SchemeId::from("sch-livelihood"),
            name: "Livelihood Mission".to_string(),
            category: "Economic Empowerment".to_string(),
            icon: "Briefcase".to_string(),
            color: "#ea580c".to_string(),
            criteria: SchemeCriteria {
                claim_types: forest_rights,
                min_families: Some(1),
                min_area: Some(1.0),
                districts_priority: strings(&["Dhar", "Jhabua"]),
                priority_boost: boosts(10, 5, 0),
            },
            benefits: strings(&[
                "Minor forest produce value chains",
                "SHG formation and market linkages",
                "Skill development & entrepreneurship",
            ]),
        },
        SchemeDefinition {
            id: SchemeId::from("sch-infra"),
            name: "Rural Infrastructure".to_string(),
            category: "Connectivity".to_string(),
            icon: "Building2".to_string(),
            color: "#9333ea".to_string(),
            criteria: SchemeCriteria {
                claim_types: vec![ClaimType::CommunityForestRights],
                min_families: Some(10),
                min_area: Some(5.0),
                districts_priority: strings(&["Barwani", "Khandwa", "Jhabua"]),
                priority_boost: boosts(8, 4, 0),
            },
            benefits: strings(&[
                "All-weather roads and bridges",
                "Rural housing upgrades",
                "Last-mile digital connectivity",
            ]),
        },
    ]
}
