//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use assist_core::{
    ApiError, AssistClient, ErrorKind, HttpMethod, HttpResponse, TemplateFilter, TranslationRequest,
    TranslationResponse,
};

const BASE_URL: &str = "http://localhost:8000";

fn client() -> AssistClient {
    AssistClient::new(BASE_URL)
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

fn parse_kind(s: &str) -> ErrorKind {
    match s {
        "PayloadTooLarge" => ErrorKind::PayloadTooLarge,
        "BadRequest" => ErrorKind::BadRequest,
        "ServerError" => ErrorKind::ServerError,
        "Timeout" => ErrorKind::Timeout,
        "Unknown" => ErrorKind::Unknown,
        other => panic!("unknown error kind: {other}"),
    }
}

fn simulated(case: &serde_json::Value) -> HttpResponse {
    HttpResponse {
        status: case["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: case["body"].as_str().unwrap().to_string(),
    }
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

#[test]
fn error_mapping_vectors() {
    let raw = include_str!("../../test-vectors/error_mapping.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        // Any parser applies the same status handling.
        let failure = c.parse_categories(simulated(case)).unwrap_err();
        let err = ApiError::from(failure);

        assert_eq!(err.kind(), parse_kind(case["expected_kind"].as_str().unwrap()), "{name}: kind");
        assert_eq!(err.to_string(), case["expected_message"].as_str().unwrap(), "{name}: message");
    }
}

// ---------------------------------------------------------------------------
// Templates query
// ---------------------------------------------------------------------------

#[test]
fn templates_query_vectors() {
    let raw = include_str!("../../test-vectors/templates_query.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];
        let filter = TemplateFilter {
            country: input["country"].as_str().map(str::to_string),
            category: input["category"].as_str().map(str::to_string),
            language: input["language"].as_str().map(str::to_string),
        };

        let req = c.build_get_templates(&filter);
        assert_eq!(req.method, HttpMethod::Get, "{name}: method");
        assert_eq!(
            req.path,
            format!("{BASE_URL}{}", case["expected_path"].as_str().unwrap()),
            "{name}: path"
        );
        assert!(req.body.is_none(), "{name}: body should be None");
    }
}

// ---------------------------------------------------------------------------
// Translate text
// ---------------------------------------------------------------------------

#[test]
fn translate_text_vectors() {
    let raw = include_str!("../../test-vectors/translate_text.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: TranslationRequest = serde_json::from_value(case["input"].clone()).unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_translate_text(&input).unwrap();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        let json = req.body.as_ref().and_then(|b| b.as_json()).unwrap();
        let req_body: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(req_body, expected_req["body"], "{name}: body");

        // Verify parse
        let translation = c.parse_translation(simulated(&case["simulated_response"])).unwrap();
        let expected: TranslationResponse = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(translation, expected, "{name}: parsed result");
    }
}
