use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Trademark
// ---------------------------------------------------------------------------

#[napi]
pub fn trademark_renewal_fees(input_json: String) -> NapiResult<String> {
    let input: renewal_fees_core::trademark::TrademarkRenewalInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = renewal_fees_core::trademark::calculate_trademark_renewal_fees(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Patent
// ---------------------------------------------------------------------------

#[napi]
pub fn patent_renewal_fees(input_json: String) -> NapiResult<String> {
    let input: renewal_fees_core::patent::PatentRenewalInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = renewal_fees_core::patent::calculate_patent_renewal_fees(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[napi]
pub fn format_breakdown(breakdown_json: String) -> NapiResult<String> {
    let breakdown: renewal_fees_core::FeeBreakdown =
        serde_json::from_str(&breakdown_json).map_err(to_napi_error)?;
    Ok(renewal_fees_core::format_fee_breakdown(&breakdown))
}
