//! WASM bindings for the biomaterial explorer
//!
//! Every entry point takes and returns JSON strings so the browser client can
//! call the same pure functions the server uses without a round trip.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::prelude::*;

// Use wee_alloc for smaller WASM binary
#[cfg(feature = "wasm")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

// ========================
// Request / Response Types
// ========================

#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    pub materials: Vec<MaterialRecord>,
    #[serde(default)]
    pub constraints: PropertyFilter,
}

#[derive(Debug, Deserialize)]
pub struct DeviationRequest {
    pub materials: Vec<MaterialRecord>,
    pub property: Property,
}

#[derive(Debug, Deserialize)]
pub struct CurveRequest {
    pub input: StressStrainInput,
    #[serde(default)]
    pub options: CurveOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ms_elapsed: Option<u64>,
}

// ========================
// Entry Points
// ========================

/// Parse the property table text into records
#[wasm_bindgen]
pub fn parse_materials(csv: &str) -> String {
    let start = now_ms();
    let records = parse_materials_csv(csv);
    encode(Ok(records), start)
}

/// Filter records by property ranges
///
/// Request: `{"materials": [...], "constraints": {"hardness": [20, 60]}}`
#[wasm_bindgen]
pub fn filter_materials(request_json: &str) -> String {
    let start = now_ms();
    let result = decode::<FilterRequest>(request_json).map(|request| {
        request
            .constraints
            .apply(&request.materials)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });
    encode(result, start)
}

/// Deviation of each record from the property mean
#[wasm_bindgen]
pub fn deviation_analysis(request_json: &str) -> String {
    let start = now_ms();
    let result = decode::<DeviationRequest>(request_json)
        .map(|request| deviation(&request.materials, request.property));
    encode(result, start)
}

/// Generate a stress-strain curve
///
/// Request: `{"input": {"yieldStr": .., "ultStr": .., "elasticMod": .., "pctElong": ..}, "options": {..}}`
#[wasm_bindgen]
pub fn generate_curve(request_json: &str) -> String {
    let start = now_ms();
    let result =
        decode::<CurveRequest>(request_json).and_then(|request| generate(&request.input, &request.options));
    encode(result, start)
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn decode<T: for<'de> Deserialize<'de>>(json: &str) -> MaterialsResult<T> {
    Ok(serde_json::from_str(json)?)
}

fn encode<T: Serialize>(result: MaterialsResult<T>, start: f64) -> String {
    let response = match result {
        Ok(results) => Response {
            success: true,
            error: None,
            results: Some(results),
            ms_elapsed: Some(elapsed_ms(start)),
        },
        Err(e) => Response {
            success: false,
            error: Some(e.to_string()),
            results: None,
            ms_elapsed: Some(elapsed_ms(start)),
        },
    };

    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(r#"{{"success":false,"error":"Serialization failed: {}"}}"#, e)
    })
}

/// Current time in milliseconds
fn now_ms() -> f64 {
    #[cfg(feature = "wasm")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "wasm"))]
    {
        0.0
    }
}

fn elapsed_ms(start: f64) -> u64 {
    #[cfg(feature = "wasm")]
    {
        (js_sys::Date::now() - start) as u64
    }
    #[cfg(not(feature = "wasm"))]
    {
        let _ = start;
        0
    }
}
