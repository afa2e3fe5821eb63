//! Concrete resource kinds served by the hospital API.
//!
//! Field names follow the API's JSON exactly (`newsTitle`, `CHospitalName`,
//! ...). Each resource pairs a record type with the field subset that create
//! and update requests send.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::state::Record;
use crate::store::ListResourceStore;
use crate::transport::Transport;
use crate::validate::{self, ValidationError};

const NEWS_TITLE_MAX: usize = 255;
const HOSPITAL_NAME_MAX: usize = 50;

// =============================================================================
// NEWS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: u64,
    pub news_title: String,
    pub news_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_date: Option<String>,
}

impl Record for News {
    type Id = u64;

    fn id(&self) -> &u64 {
        &self.id
    }
}

/// Body of news create/update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsFields {
    pub news_title: String,
    pub news_link: String,
}

impl NewsFields {
    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::require("newsTitle", Some(self.news_title.as_str()), "news title is required")?;
        validate::max_length(
            "newsTitle",
            Some(self.news_title.as_str()),
            NEWS_TITLE_MAX,
            "news title must be at most 255 characters",
        )?;
        validate::require("newsLink", Some(self.news_link.as_str()), "news link is required")
    }
}

pub type NewsStore = ListResourceStore<News>;

#[must_use]
pub fn news_store(config: &ApiConfig, transport: Arc<dyn Transport>) -> NewsStore {
    ListResourceStore::new("news", config.news_path.clone(), transport)
}

// =============================================================================
// COOPERATION HOSPITAL
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CooperationHospital {
    pub id: u64,
    #[serde(rename = "CHospitalArea", default)]
    pub area: String,
    #[serde(rename = "CHospitalIntroduction", default)]
    pub introduction: String,
    #[serde(rename = "CHospitalAddress", default)]
    pub address: String,
    #[serde(rename = "CHospitalTel", default)]
    pub tel: String,
    #[serde(rename = "CHospitalName")]
    pub name: String,
    #[serde(rename = "CMedicalDepartment", default)]
    pub medical_department: String,
    #[serde(rename = "regDate", default, skip_serializing_if = "Option::is_none")]
    pub reg_date: Option<String>,
    #[serde(rename = "editDate", default, skip_serializing_if = "Option::is_none")]
    pub edit_date: Option<String>,
}

impl Record for CooperationHospital {
    type Id = u64;

    fn id(&self) -> &u64 {
        &self.id
    }
}

/// Body of cooperating-hospital create/update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CooperationHospitalFields {
    #[serde(rename = "CHospitalArea")]
    pub area: String,
    #[serde(rename = "CHospitalIntroduction")]
    pub introduction: String,
    #[serde(rename = "CHospitalAddress")]
    pub address: String,
    #[serde(rename = "CHospitalTel")]
    pub tel: String,
    #[serde(rename = "CHospitalName")]
    pub name: String,
    #[serde(rename = "CMedicalDepartment")]
    pub medical_department: String,
    #[serde(rename = "regDate", skip_serializing_if = "Option::is_none")]
    pub reg_date: Option<String>,
    #[serde(rename = "editDate", skip_serializing_if = "Option::is_none")]
    pub edit_date: Option<String>,
}

impl CooperationHospitalFields {
    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::require("CHospitalName", Some(self.name.as_str()), "hospital name is required")?;
        validate::max_length(
            "CHospitalName",
            Some(self.name.as_str()),
            HOSPITAL_NAME_MAX,
            "hospital name must be at most 50 characters",
        )?;
        let tel = Some(self.tel.as_str()).filter(|t| !t.is_empty());
        validate::phone("CHospitalTel", tel, "hospital telephone must be digits and dashes")
    }
}

pub type CooperationHospitalStore = ListResourceStore<CooperationHospital>;

#[must_use]
pub fn cooperation_hospital_store(config: &ApiConfig, transport: Arc<dyn Transport>) -> CooperationHospitalStore {
    ListResourceStore::new("cooperation_hospital", config.cooperation_hospital_path.clone(), transport)
}
