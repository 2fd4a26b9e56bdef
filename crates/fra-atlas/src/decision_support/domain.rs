use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for forest-rights claims.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(pub String);

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rights recognised under the Forest Rights Act, labelled the way claim forms print them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimType {
    #[serde(rename = "Individual Forest Rights")]
    IndividualForestRights,
    #[serde(rename = "Community Rights")]
    CommunityRights,
    #[serde(rename = "Community Forest Rights")]
    CommunityForestRights,
}

impl ClaimType {
    pub fn label(&self) -> &'static str {
        match self {
            ClaimType::IndividualForestRights => "Individual Forest Rights",
            ClaimType::CommunityRights => "Community Rights",
            ClaimType::CommunityForestRights => "Community Forest Rights",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Review priority assigned to a claim by the district committee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClaimPriority {
    High,
    Medium,
    Low,
}

impl ClaimPriority {
    pub fn label(&self) -> &'static str {
        match self {
            ClaimPriority::High => "High",
            ClaimPriority::Medium => "Medium",
            ClaimPriority::Low => "Low",
        }
    }
}

impl fmt::Display for ClaimPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A forest-rights claim under evaluation.
///
/// `area` and `families` are optional: an absent value never satisfies a threshold, which is
/// not the same as a recorded zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: ClaimId,
    #[serde(rename = "type")]
    pub claim_type: ClaimType,
    pub district: String,
    pub priority: ClaimPriority,
    /// Claimed area in hectares.
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub families: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
    #[serde(
        default,
        rename = "submittedDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub submitted_on: Option<NaiveDate>,
}

impl Claim {
    pub fn new(
        id: impl Into<String>,
        claim_type: ClaimType,
        district: impl Into<String>,
        priority: ClaimPriority,
    ) -> Self {
        Self {
            id: ClaimId(id.into()),
            claim_type,
            district: district.into(),
            priority,
            area: None,
            families: None,
            village: None,
            submitted_on: None,
        }
    }

    pub fn with_area(mut self, hectares: f64) -> Self {
        self.area = Some(hectares);
        self
    }

    pub fn with_families(mut self, families: u32) -> Self {
        self.families = Some(families);
        self
    }

    /// Days between submission and `today`, if the submission date is known.
    pub fn days_pending(&self, today: NaiveDate) -> Option<i64> {
        self.submitted_on
            .map(|submitted| (today - submitted).num_days().max(0))
    }
}

/// Situational conditions observed on the map around a claim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContextSignals {
    pub near_protected_area: bool,
    pub has_wildlife_corridor: bool,
    pub low_connectivity: bool,
    pub health_risk_season: bool,
}

impl ContextSignals {
    pub fn all() -> Self {
        Self {
            near_protected_area: true,
            has_wildlife_corridor: true,
            low_connectivity: true,
            health_risk_season: true,
        }
    }

    pub fn is_set(&self, signal: ContextSignal) -> bool {
        match signal {
            ContextSignal::NearProtectedArea => self.near_protected_area,
            ContextSignal::WildlifeCorridor => self.has_wildlife_corridor,
            ContextSignal::LowConnectivity => self.low_connectivity,
            ContextSignal::HealthRiskSeason => self.health_risk_season,
        }
    }

    /// Raised signals in declaration order.
    pub fn active(&self) -> impl Iterator<Item = ContextSignal> + '_ {
        ContextSignal::ALL
            .into_iter()
            .filter(move |signal| self.is_set(*signal))
    }
}

/// One context flag together with its fixed weight and explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextSignal {
    NearProtectedArea,
    WildlifeCorridor,
    LowConnectivity,
    HealthRiskSeason,
}

impl ContextSignal {
    pub const ALL: [ContextSignal; 4] = [
        ContextSignal::NearProtectedArea,
        ContextSignal::WildlifeCorridor,
        ContextSignal::LowConnectivity,
        ContextSignal::HealthRiskSeason,
    ];

    pub fn weight(&self) -> u32 {
        match self {
            ContextSignal::NearProtectedArea => 6,
            ContextSignal::WildlifeCorridor => 5,
            ContextSignal::LowConnectivity => 8,
            ContextSignal::HealthRiskSeason => 6,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            ContextSignal::NearProtectedArea => "Near protected area",
            ContextSignal::WildlifeCorridor => "Wildlife corridor overlap",
            ContextSignal::LowConnectivity => "Poor last-mile connectivity",
            ContextSignal::HealthRiskSeason => "Seasonal health risks",
        }
    }
}
