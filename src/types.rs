use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tools::names::{to_display_form, to_url_form};

/// Shown in place of an image credit that could not be resolved.
pub const CREDIT_UNAVAILABLE: &str = "N.A.";

/// Display names accepted by the web form and the `states` command.
pub const US_STATES: [&str; 50] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

/// A state as typed by the user plus the identifier used in page URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateQuery {
    pub display_name: String,
    pub identifier: String,
}

impl StateQuery {
    /// Build from a display name such as `"New York"`.
    pub fn from_display(name: &str) -> Self {
        Self {
            display_name: name.to_string(),
            identifier: to_url_form(name),
        }
    }

    /// Build from a page identifier such as `"New_York_(state)"`.
    pub fn from_identifier(identifier: &str) -> Self {
        Self {
            display_name: to_display_form(identifier),
            identifier: identifier.to_string(),
        }
    }
}

/// Which group of facts a lookup produces.
///
/// Serialized with the same `type1`/`type2` values the web form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InformationType {
    /// Population, flag, seal and image credits.
    #[serde(rename = "type1")]
    Symbols,
    /// Capital and governor.
    #[default]
    #[serde(rename = "type2")]
    Facts,
}

impl InformationType {
    /// Map the `InformationType` query value; only `type1` selects symbols.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("type1") => Self::Symbols,
            _ => Self::Facts,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Symbols => "type1",
            Self::Facts => "type2",
        }
    }
}

/// Flat set of facts about one state; every field may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StateFacts {
    #[serde(rename = "statePopulation")]
    pub population: Option<String>,
    #[serde(rename = "stateFlag")]
    pub flag_url: Option<String>,
    #[serde(rename = "stateFlagCredit")]
    pub flag_credit: Option<String>,
    #[serde(rename = "stateSeal")]
    pub seal_url: Option<String>,
    #[serde(rename = "stateSealCredit")]
    pub seal_credit: Option<String>,
    #[serde(rename = "stateCapital")]
    pub capital: Option<String>,
    #[serde(rename = "stateGovernor")]
    pub governor: Option<String>,
}

/// Result of one lookup, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactSheet {
    pub information_type: InformationType,
    pub state: String,
    #[serde(flatten)]
    pub facts: StateFacts,
    pub fetched_at: DateTime<Utc>,
}

impl FactSheet {
    pub fn new(information_type: InformationType, state: &str, facts: StateFacts) -> Self {
        Self {
            information_type,
            state: state.to_string(),
            facts,
            fetched_at: Utc::now(),
        }
    }

    /// Template variables for this sheet, in render order.
    pub fn template_vars(&self) -> Vec<(&'static str, Option<&str>)> {
        let f = &self.facts;
        let mut vars = vec![("state", Some(self.state.as_str()))];
        match self.information_type {
            InformationType::Symbols => {
                vars.push(("statePopulation", f.population.as_deref()));
                vars.push(("stateFlag", f.flag_url.as_deref()));
                vars.push(("stateFlagCredit", f.flag_credit.as_deref()));
                vars.push(("stateSeal", f.seal_url.as_deref()));
                vars.push(("stateSealCredit", f.seal_credit.as_deref()));
            }
            InformationType::Facts => {
                vars.push(("stateCapital", f.capital.as_deref()));
                vars.push(("stateGovernor", f.governor.as_deref()));
            }
        }
        vars
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}
