use axum::{body::Bytes, extract::State, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::api::retell_dtos::CreatePhoneCallRequest;
use crate::error::AppError;
use crate::handlers::lead_dtos::{
    LeadAcceptedResponse, LeadSubmission, TestCallRequest, TestCallResponse,
};
use crate::utils::phone_format;
use crate::AppState;

pub const LEAD_FIELDS_REQUIRED: &str = "Phone number and name are required";
pub const TEST_CALL_FIELDS_REQUIRED: &str = "Phone and name are required";
pub const CALLBACK_MESSAGE: &str = "AI agent will call within 2-5 minutes";

// The body is parsed by hand so that malformed JSON gets the same
// `{ success: false, error }` envelope as every other failure.
pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<LeadAcceptedResponse>, AppError> {
    let lead: LeadSubmission = serde_json::from_slice(&body)?;

    tracing::info!(
        lead_name = ?lead.name,
        phone = ?lead.phone,
        email = ?lead.email,
        industry = ?lead.industry,
        session_id = ?lead.session_id,
        timestamp = %Utc::now().to_rfc3339(),
        "Lead received"
    );

    let (name, phone) = lead
        .contact()
        .ok_or(AppError::MissingFields(LEAD_FIELDS_REQUIRED))?;

    let details = phone_format::describe(phone);
    tracing::info!(
        original = %details.original,
        formatted = %details.formatted,
        rule = ?details.rule,
        length = details.length,
        starts_with_plus = details.starts_with_plus,
        digits_only = %details.digits_only,
        digits_length = details.digits_length,
        "Phone formatting"
    );

    let payload = CreatePhoneCallRequest {
        from_number: state.from_number.clone(),
        to_number: details.formatted,
        retell_llm_dynamic_variables: lead.dynamic_variables(name),
    };
    tracing::info!("Retell AI payload: {:?}", payload);

    let reply = state.dispatcher.create_phone_call(payload.clone()).await?;

    if !reply.is_success() {
        tracing::error!(
            status = %reply.status,
            error = %reply.body,
            payload = ?payload,
            "Retell AI error"
        );
        return Err(AppError::Provider {
            status: reply.status.as_u16(),
            message: reply.error_detail(),
        });
    }

    tracing::info!("Retell AI success: {}", reply.body);

    Ok(Json(LeadAcceptedResponse {
        success: true,
        retell_response: reply.body,
        message: CALLBACK_MESSAGE.to_string(),
    }))
}

pub async fn trigger_test_call(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<TestCallResponse>, AppError> {
    let request: TestCallRequest = serde_json::from_slice(&body)?;

    let (name, phone) = request
        .contact()
        .ok_or(AppError::MissingFields(TEST_CALL_FIELDS_REQUIRED))?;

    let formatted = phone_format::format_phone_number(phone);
    tracing::info!("Test call for {}: {} -> {}", name, phone, formatted);

    let payload = CreatePhoneCallRequest {
        from_number: state.from_number.clone(),
        to_number: formatted.clone(),
        retell_llm_dynamic_variables: TestCallRequest::dynamic_variables(name),
    };

    let reply = state.dispatcher.create_phone_call(payload).await?;

    if !reply.is_success() {
        tracing::error!("Test call error: {} {}", reply.status, reply.body);
        return Err(AppError::Provider {
            status: reply.status.as_u16(),
            message: reply.message_detail(),
        });
    }

    tracing::info!("Test call success: {}", reply.body);

    Ok(Json(TestCallResponse {
        success: true,
        call_id: reply.call_id(),
        message: format!("Test call initiated to {}. Check your phone!", formatted),
    }))
}
