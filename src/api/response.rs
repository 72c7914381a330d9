//! Response types for the finance calculation API.
//!
//! The engine works in full-precision `f64`. This module is the presentation
//! boundary: every monetary amount is converted to a [`Decimal`] rounded to
//! two places (midpoint away from zero) and serialized as a string. It also
//! defines the error body and the mapping from [`EngineError`] to HTTP
//! status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::SlabSchedule;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AmortizationResult, BracketSlice, CompoundInterestResult, DeductionSummary, FilingStatus,
    RetirementProjection, SipProjectionPoint, SipResult, TaxBracket, TaxEstimate,
};

/// Converts an amount to a two-decimal [`Decimal`], rounding half away from zero.
///
/// # Errors
///
/// Returns `ResultOutOfRange` if the value is not finite or exceeds the
/// decimal range.
///
/// # Example
///
/// ```
/// use finance_engine::api::money;
///
/// assert_eq!(money("total", 2603.4697).unwrap().to_string(), "2603.47");
/// assert_eq!(money("total", 8507.5).unwrap().to_string(), "8507.50");
/// assert_eq!(money("total", 0.125).unwrap().to_string(), "0.13");
/// ```
pub fn money(field: &str, value: f64) -> EngineResult<Decimal> {
    let mut amount = Decimal::from_f64(value)
        .ok_or_else(|| EngineError::ResultOutOfRange {
            field: field.to_string(),
            value,
        })?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    amount.rescale(2);
    Ok(amount)
}

/// One taxed bracket in a tax response.
#[derive(Debug, Clone, Serialize)]
pub struct BracketSliceResponse {
    /// Marginal rate as a percentage.
    pub rate: f64,
    /// Lower bound of the bracket.
    pub lower: Decimal,
    /// Upper bound of the bracket, absent when unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper: Option<Decimal>,
    /// Income taxed in this bracket.
    pub taxable_amount: Decimal,
    /// Tax owed on this bracket.
    pub tax: Decimal,
}

impl BracketSliceResponse {
    fn from_slice(slice: &BracketSlice) -> EngineResult<Self> {
        Ok(Self {
            rate: slice.rate,
            lower: money("lower", slice.lower)?,
            upper: slice.upper.map(|u| money("upper", u)).transpose()?,
            taxable_amount: money("taxable_amount", slice.taxable_amount)?,
            tax: money("tax", slice.tax)?,
        })
    }
}

fn slices(slices: &[BracketSlice]) -> EngineResult<Vec<BracketSliceResponse>> {
    slices.iter().map(BracketSliceResponse::from_slice).collect()
}

/// Response body for `POST /tax/estimate`.
#[derive(Debug, Clone, Serialize)]
pub struct TaxEstimateResponse {
    /// Filing status whose table was applied.
    pub filing_status: FilingStatus,
    /// Income before deductions.
    pub gross_income: Decimal,
    /// Income after deductions, floored at zero.
    pub taxable_income: Decimal,
    /// Total tax owed.
    pub total_tax: Decimal,
    /// Total tax as a percentage of gross income.
    pub effective_rate_percent: Decimal,
    /// Gross income less total tax.
    pub take_home_pay: Decimal,
    /// Per-bracket breakdown.
    pub brackets: Vec<BracketSliceResponse>,
}

impl TaxEstimateResponse {
    /// Renders an estimate for presentation.
    pub fn from_estimate(status: FilingStatus, estimate: &TaxEstimate) -> EngineResult<Self> {
        Ok(Self {
            filing_status: status,
            gross_income: money("gross_income", estimate.gross_income)?,
            taxable_income: money("taxable_income", estimate.taxable_income)?,
            total_tax: money("total_tax", estimate.total_tax)?,
            effective_rate_percent: money(
                "effective_rate_percent",
                estimate.effective_rate_percent,
            )?,
            take_home_pay: money("take_home_pay", estimate.take_home_pay)?,
            brackets: slices(&estimate.slices)?,
        })
    }
}

/// Response body for `GET /tax/brackets`.
#[derive(Debug, Clone, Serialize)]
pub struct BracketTableResponse {
    /// Filing status of the table.
    pub filing_status: FilingStatus,
    /// Tax year the table applies to.
    pub tax_year: i32,
    /// The brackets, ascending.
    pub brackets: Vec<TaxBracket>,
}

/// Response body for `POST /tax/slab`.
#[derive(Debug, Clone, Serialize)]
pub struct SlabTaxResponse {
    /// Name of the slab schedule.
    pub schedule: String,
    /// Currency of the schedule.
    pub currency: String,
    /// Income after deductions, floored at zero.
    pub taxable_income: Decimal,
    /// Total tax owed.
    pub total_tax: Decimal,
    /// Total tax as a percentage of gross income.
    pub effective_rate_percent: Decimal,
    /// Per-slab breakdown.
    pub slabs: Vec<BracketSliceResponse>,
}

impl SlabTaxResponse {
    /// Renders a slab tax result for presentation.
    pub fn from_estimate(schedule: &SlabSchedule, estimate: &TaxEstimate) -> EngineResult<Self> {
        Ok(Self {
            schedule: schedule.name.clone(),
            currency: schedule.currency.clone(),
            taxable_income: money("taxable_income", estimate.taxable_income)?,
            total_tax: money("total_tax", estimate.total_tax)?,
            effective_rate_percent: money(
                "effective_rate_percent",
                estimate.effective_rate_percent,
            )?,
            slabs: slices(&estimate.slices)?,
        })
    }
}

/// Itemized amounts in a deductions response.
#[derive(Debug, Clone, Serialize)]
pub struct ItemizedDeductionsResponse {
    /// Mortgage interest.
    pub mortgage_interest: Decimal,
    /// Property tax after the SALT cap.
    pub property_tax: Decimal,
    /// Charitable contributions.
    pub charitable_contributions: Decimal,
    /// Student loan interest after its cap.
    pub student_loan_interest: Decimal,
    /// Healthcare costs above the AGI floor.
    pub healthcare_costs: Decimal,
}

/// Response body for `POST /tax/deductions`.
#[derive(Debug, Clone, Serialize)]
pub struct DeductionsResponse {
    /// Capped itemized amounts.
    pub itemized_deductions: ItemizedDeductionsResponse,
    /// Sum of the itemized amounts.
    pub total_itemized: Decimal,
    /// Standard deduction for the filing status.
    pub standard_deduction: Decimal,
    /// The larger of the two.
    pub recommended_deduction: Decimal,
    /// Retirement contributions, echoed.
    pub retirement_contributions: Decimal,
}

impl DeductionsResponse {
    /// Renders a deduction summary for presentation.
    pub fn from_summary(summary: &DeductionSummary) -> EngineResult<Self> {
        let itemized = &summary.itemized;
        Ok(Self {
            itemized_deductions: ItemizedDeductionsResponse {
                mortgage_interest: money("mortgage_interest", itemized.mortgage_interest)?,
                property_tax: money("property_tax", itemized.property_tax)?,
                charitable_contributions: money(
                    "charitable_contributions",
                    itemized.charitable_contributions,
                )?,
                student_loan_interest: money(
                    "student_loan_interest",
                    itemized.student_loan_interest,
                )?,
                healthcare_costs: money("healthcare_costs", itemized.healthcare_costs)?,
            },
            total_itemized: money("total_itemized", summary.total_itemized)?,
            standard_deduction: money("standard_deduction", summary.standard_deduction)?,
            recommended_deduction: money(
                "recommended_deduction",
                summary.recommended_deduction,
            )?,
            retirement_contributions: money(
                "retirement_contributions",
                summary.retirement_contributions,
            )?,
        })
    }
}

/// One schedule row in a loan response.
#[derive(Debug, Clone, Serialize)]
pub struct LoanScheduleRow {
    /// Zero-based year index.
    pub year: u32,
    /// Principal repaid during the year.
    pub principal: Decimal,
    /// Interest paid during the year.
    pub interest: Decimal,
}

/// Response body for `POST /calculator/loan`.
#[derive(Debug, Clone, Serialize)]
pub struct LoanResponse {
    /// Principal less down payment.
    pub loan_amount: Decimal,
    /// Fixed monthly installment.
    pub monthly_payment: Decimal,
    /// Sum of all installments.
    pub total_payment: Decimal,
    /// Total payment less loan amount.
    pub total_interest: Decimal,
    /// Annual rate as submitted.
    pub annual_rate: f64,
    /// Term as submitted.
    pub term_in_years: f64,
    /// Loan label as submitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_type: Option<String>,
    /// Yearly principal/interest split.
    pub schedule: Vec<LoanScheduleRow>,
}

impl LoanResponse {
    /// Renders an amortization result for presentation.
    pub fn from_result(
        result: &AmortizationResult,
        annual_rate: f64,
        term_in_years: f64,
        loan_type: Option<String>,
    ) -> EngineResult<Self> {
        let schedule = result
            .schedule
            .iter()
            .map(|row| {
                Ok(LoanScheduleRow {
                    year: row.year,
                    principal: money("principal", row.principal_paid)?,
                    interest: money("interest", row.interest_paid)?,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(Self {
            loan_amount: money("loan_amount", result.loan_amount)?,
            monthly_payment: money("monthly_payment", result.periodic_payment)?,
            total_payment: money("total_payment", result.total_payment)?,
            total_interest: money("total_interest", result.total_interest)?,
            annual_rate,
            term_in_years,
            loan_type,
            schedule,
        })
    }
}

/// Response body for `POST /calculator/compound-interest`.
#[derive(Debug, Clone, Serialize)]
pub struct CompoundInterestResponse {
    /// Principal as submitted.
    pub principal: Decimal,
    /// Principal plus interest.
    pub total_amount: Decimal,
    /// Interest earned.
    pub interest_earned: Decimal,
    /// Annual rate as submitted.
    pub annual_rate: f64,
    /// Horizon as submitted.
    pub time_in_years: f64,
    /// Compounding periods per year actually applied.
    pub compounding_frequency: u32,
}

impl CompoundInterestResponse {
    /// Renders a compound interest result for presentation.
    pub fn from_result(
        principal: f64,
        annual_rate: f64,
        time_in_years: f64,
        compounding_frequency: u32,
        result: &CompoundInterestResult,
    ) -> EngineResult<Self> {
        Ok(Self {
            principal: money("principal", principal)?,
            total_amount: money("total_amount", result.total_amount)?,
            interest_earned: money("interest_earned", result.interest_earned)?,
            annual_rate,
            time_in_years,
            compounding_frequency,
        })
    }
}

/// One year of a SIP projection response.
#[derive(Debug, Clone, Serialize)]
pub struct SipPointResponse {
    /// Year index.
    pub year: u32,
    /// Contributions so far.
    pub invested: Decimal,
    /// Projected value.
    pub value: Decimal,
}

/// Response body for `POST /calculator/sip`.
#[derive(Debug, Clone, Serialize)]
pub struct SipResponse {
    /// Value at the end of the plan.
    pub future_value: Decimal,
    /// Sum of contributions.
    pub total_investment: Decimal,
    /// Growth on top of contributions.
    pub total_returns: Decimal,
    /// Year-by-year projection from year 0.
    pub projection: Vec<SipPointResponse>,
}

impl SipResponse {
    /// Renders a SIP result and its projection for presentation.
    pub fn from_result<I>(result: &SipResult, projection: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = SipProjectionPoint>,
    {
        let projection = projection
            .into_iter()
            .map(|point| {
                Ok(SipPointResponse {
                    year: point.year,
                    invested: money("invested", point.invested)?,
                    value: money("value", point.value)?,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(Self {
            future_value: money("future_value", result.future_value)?,
            total_investment: money("total_investment", result.total_investment)?,
            total_returns: money("total_returns", result.total_returns)?,
            projection,
        })
    }
}

/// Response body for `POST /calculator/retirement`.
#[derive(Debug, Clone, Serialize)]
pub struct RetirementResponse {
    /// Nominal balance at retirement.
    pub future_value: Decimal,
    /// Balance in today's purchasing power.
    pub real_value: Decimal,
    /// Years until retirement.
    pub years_to_retirement: f64,
    /// Current savings plus all contributions.
    pub total_contributions: Decimal,
    /// Expected return as submitted.
    pub expected_return: f64,
    /// Inflation rate applied.
    pub inflation_adjusted: f64,
}

impl RetirementResponse {
    /// Renders a retirement projection for presentation.
    pub fn from_projection(
        projection: &RetirementProjection,
        expected_return: f64,
        inflation_rate: f64,
    ) -> EngineResult<Self> {
        Ok(Self {
            future_value: money("future_value", projection.future_value)?,
            real_value: money("real_value", projection.real_value)?,
            years_to_retirement: projection.years_to_retirement,
            total_contributions: money("total_contributions", projection.total_contributions)?,
            expected_return,
            inflation_adjusted: inflation_rate,
        })
    }
}

/// Response body for `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Status message.
    pub message: String,
    /// Code of the loaded tax tables.
    pub tables: String,
    /// Tax year of the loaded tables.
    pub tax_year: i32,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid parameter error response.
    pub fn invalid_parameter(field: &str, message: &str) -> Self {
        Self::with_details(
            "INVALID_PARAMETER",
            format!("Invalid parameter '{}': {}", field, message),
            format!("The value supplied for '{}' cannot be used in this calculation", field),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidBracketTable { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_BRACKET_TABLE",
                    format!("Invalid bracket table: {}", message),
                    "The bracket table violates its ordering invariants",
                ),
            },
            EngineError::InvalidParameter { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_parameter(&field, &message),
            },
            EngineError::ResultOutOfRange { field, value } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "RESULT_OUT_OF_RANGE",
                    format!("Result '{}' is out of range", field),
                    format!("Computed value {} cannot be represented", value),
                ),
            },
        }
    }
}
