use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::api::retell_dtos::DynamicVariables;
use crate::utils::json_text::truthy_text;

pub const DEFAULT_INDUSTRY: &str = "General Inquiry";
pub const DEFAULT_SOURCE: &str = "forsythe-landing";

fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(truthy_text(&Value::deserialize(deserializer)?))
}

// Anything but an object carries no attribution.
fn loose_utm<'de, D>(deserializer: D) -> Result<Option<Utm>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Utm::deserialize(Value::Object(map))
            .map(Some)
            .map_err(<D::Error as serde::de::Error>::custom),
        _ => Ok(None),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Utm {
    #[serde(default, deserialize_with = "loose_text")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub campaign: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LeadSubmission {
    #[serde(default, deserialize_with = "loose_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "loose_utm")]
    pub utm: Option<Utm>,
    /// Logged, never forwarded.
    #[serde(default)]
    pub session_id: Option<Value>,
}

impl LeadSubmission {
    /// `(name, phone)` when both are present.
    pub fn contact(&self) -> Option<(&str, &str)> {
        Some((self.name.as_deref()?, self.phone.as_deref()?))
    }

    pub fn industry_or_default(&self) -> &str {
        self.industry
            .as_deref()
            .or(self.company.as_deref())
            .unwrap_or(DEFAULT_INDUSTRY)
    }

    /// Every default for the provider's variable block lives here.
    pub fn dynamic_variables(&self, lead_name: &str) -> DynamicVariables {
        let utm = self.utm.as_ref();
        DynamicVariables {
            lead_name: lead_name.to_string(),
            industry: self.industry_or_default().to_string(),
            email: self.email.clone().unwrap_or_default(),
            source: self.source.clone().unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            utm_source: Some(utm.and_then(|u| u.source.clone()).unwrap_or_default()),
            utm_campaign: Some(utm.and_then(|u| u.campaign.clone()).unwrap_or_default()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TestCallRequest {
    #[serde(default, deserialize_with = "loose_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub phone: Option<String>,
}

impl TestCallRequest {
    pub fn contact(&self) -> Option<(&str, &str)> {
        Some((self.name.as_deref()?, self.phone.as_deref()?))
    }

    pub fn dynamic_variables(lead_name: &str) -> DynamicVariables {
        DynamicVariables {
            lead_name: lead_name.to_string(),
            industry: "Test Call".to_string(),
            email: "test@example.com".to_string(),
            source: "manual-test".to_string(),
            utm_source: None,
            utm_campaign: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadAcceptedResponse {
    pub success: bool,
    pub retell_response: Value,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct TestCallResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_id: Option<Value>,
    pub message: String,
}
