use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::utils::json_text::truthy_text;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DynamicVariables {
    pub lead_name: String,
    pub industry: String,
    pub email: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
}

/// Body of `POST /v2/create-phone-call`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePhoneCallRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_number: Option<String>,
    pub to_number: String,
    pub retell_llm_dynamic_variables: DynamicVariables,
}

/// Whatever the provider answered, successful or not.
#[derive(Debug, Clone)]
pub struct ProviderReply {
    pub status: StatusCode,
    pub body: Value,
}

impl ProviderReply {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// `message`, then `error`, then a generic fallback.
    pub fn error_detail(&self) -> String {
        field_text(&self.body, "message")
            .or_else(|| field_text(&self.body, "error"))
            .unwrap_or_else(|| "Unknown error".to_string())
    }

    /// Only `message` is looked at, the test-call endpoint never read `error`.
    pub fn message_detail(&self) -> String {
        field_text(&self.body, "message").unwrap_or_else(|| "Unknown error".to_string())
    }

    pub fn call_id(&self) -> Option<Value> {
        self.body.get("call_id").cloned()
    }
}

fn field_text(body: &Value, key: &str) -> Option<String> {
    truthy_text(body.get(key)?)
}
