//! HTTP request handlers for the finance calculation API.
//!
//! Every handler follows the same shape: tag the request with a correlation
//! ID, turn body rejections into structured 400 responses, run the engine,
//! and render the result through the presentation types in
//! [`super::response`].

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    compare_deductions, compound_interest, compute_amortization, compute_slab_tax, estimate_tax,
    project_retirement, project_sip, yearly_projection,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{CompoundInterestTerms, ItemizedDeductionInputs, RetirementPlan, SipPlan};

use super::request::{
    BracketQuery, CompoundInterestRequest, DeductionsRequest, LoanRequest, RetirementRequest,
    SipRequest, SlabTaxRequest, TaxEstimateRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, BracketTableResponse, CompoundInterestResponse,
    DeductionsResponse, LoanResponse, RetirementResponse, ServiceInfo, SipResponse,
    SlabTaxResponse, TaxEstimateResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_info_handler))
        .route("/tax/estimate", post(tax_estimate_handler))
        .route("/tax/brackets", get(tax_brackets_handler))
        .route("/tax/deductions", post(deductions_handler))
        .route("/tax/slab", post(slab_tax_handler))
        .route("/calculator/loan", post(loan_handler))
        .route(
            "/calculator/compound-interest",
            post(compound_interest_handler),
        )
        .route("/calculator/sip", post(sip_handler))
        .route("/calculator/retirement", post(retirement_handler))
        .with_state(state)
}

/// Handler for GET / endpoint.
async fn service_info_handler(State(state): State<AppState>) -> Response {
    let tax_year = state.config().tax_year();
    json_response(
        StatusCode::OK,
        ServiceInfo {
            message: "Finance calculation engine is running".to_string(),
            tables: tax_year.code.clone(),
            tax_year: tax_year.tax_year,
        },
    )
}

/// Handler for POST /tax/estimate endpoint.
async fn tax_estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxEstimateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing tax estimate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let status = request.filing_status();
    let start_time = Instant::now();
    let result = estimate_tax(
        request.income,
        status,
        request.deductions,
        state.config().config().brackets(),
    )
    .and_then(|estimate| TaxEstimateResponse::from_estimate(status, &estimate));

    respond(correlation_id, "Tax estimate", start_time, result)
}

/// Handler for GET /tax/brackets endpoint.
async fn tax_brackets_handler(
    State(state): State<AppState>,
    Query(query): Query<BracketQuery>,
) -> Response {
    let status = query.filing_status();
    let config = state.config();
    json_response(
        StatusCode::OK,
        BracketTableResponse {
            filing_status: status,
            tax_year: config.tax_year().tax_year,
            brackets: config.bracket_table(status).brackets().to_vec(),
        },
    )
}

/// Handler for POST /tax/deductions endpoint.
async fn deductions_handler(
    State(state): State<AppState>,
    payload: Result<Json<DeductionsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing deductions request");

    let inputs: ItemizedDeductionInputs = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = compare_deductions(&inputs, state.config().deduction_rules())
        .and_then(|summary| DeductionsResponse::from_summary(&summary));

    respond(correlation_id, "Deduction comparison", start_time, result)
}

/// Handler for POST /tax/slab endpoint.
async fn slab_tax_handler(
    State(state): State<AppState>,
    payload: Result<Json<SlabTaxRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing slab tax request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let schedule = state.config().slab_schedule();
    let start_time = Instant::now();
    let result = compute_slab_tax(request.income, request.deductions, &schedule.slabs)
        .and_then(|estimate| SlabTaxResponse::from_estimate(schedule, &estimate));

    respond(correlation_id, "Slab tax", start_time, result)
}

/// Handler for POST /calculator/loan endpoint.
async fn loan_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoanRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing loan request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let schedule_years = request
        .schedule_years
        .unwrap_or(state.config().defaults().amortization_schedule_years);
    let start_time = Instant::now();
    let result = compute_amortization(&request.terms(), request.down_payment, schedule_years)
        .and_then(|amortization| {
            LoanResponse::from_result(
                &amortization,
                request.rate,
                request.term,
                request.loan_type.clone(),
            )
        });

    respond(correlation_id, "Loan amortization", start_time, result)
}

/// Handler for POST /calculator/compound-interest endpoint.
async fn compound_interest_handler(
    payload: Result<Json<CompoundInterestRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing compound interest request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let terms = CompoundInterestTerms::from(&request);
    let start_time = Instant::now();
    let result = compound_interest(&terms).and_then(|growth| {
        CompoundInterestResponse::from_result(
            terms.principal,
            terms.annual_rate_percent,
            terms.years,
            terms.compounding_frequency_per_year,
            &growth,
        )
    });

    respond(correlation_id, "Compound interest", start_time, result)
}

/// Handler for POST /calculator/sip endpoint.
async fn sip_handler(payload: Result<Json<SipRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing SIP request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let plan = SipPlan::from(&request);
    let start_time = Instant::now();
    let result = sip_with_projection(&plan);

    respond(correlation_id, "SIP projection", start_time, result)
}

fn sip_with_projection(plan: &SipPlan) -> EngineResult<SipResponse> {
    let summary = project_sip(plan)?;
    SipResponse::from_result(&summary, yearly_projection(plan)?)
}

/// Handler for POST /calculator/retirement endpoint.
async fn retirement_handler(
    payload: Result<Json<RetirementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing retirement request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let plan = RetirementPlan::from(&request);
    let start_time = Instant::now();
    let result = project_retirement(&plan).and_then(|projection| {
        RetirementResponse::from_projection(
            &projection,
            plan.expected_annual_return_percent,
            plan.inflation_rate_percent,
        )
    });

    respond(correlation_id, "Retirement projection", start_time, result)
}

/// Renders a calculation outcome, logging how it went.
fn respond<T: Serialize>(
    correlation_id: Uuid,
    operation: &str,
    start_time: Instant,
    result: EngineResult<T>,
) -> Response {
    match result {
        Ok(body) => {
            info!(
                correlation_id = %correlation_id,
                operation,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, body)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                operation,
                error = %err,
                "Calculation failed"
            );
            error_response(err)
        }
    }
}

/// Maps a JSON body rejection to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn error_response(err: EngineError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
