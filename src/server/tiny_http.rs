//! tiny_http server adapter
//!
//! Handles routing, body parsing, and response conversion for tiny_http.

use std::io::{Cursor, Read as _};

use log::{debug, error, info, warn};
use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use cosmic_truth::api::{self, ApiError, ApiResponse, ApiState, ClassifyRequest, SubmitClaimRequest};
use cosmic_truth::config::AppConfig;
use cosmic_truth::core::models::UserId;

// =============================================================================
// SERVER LOOP
// =============================================================================

/// Bind and serve requests until the process is stopped
pub fn serve(config: &AppConfig) -> anyhow::Result<()> {
    let addr = config.server.bind_addr();
    let server =
        Server::http(&addr).map_err(|e| anyhow::anyhow!("Failed to start server on {addr}: {e}"))?;
    let state = config.api_state();

    info!(
        "cosmic v{} listening on http://{addr} (storage: {})",
        cosmic_truth::VERSION,
        config.storage.backend
    );
    if config.auth.tokens.is_empty() {
        warn!("no auth tokens configured; claim submission will be rejected");
    }

    for mut request in server.incoming_requests() {
        let response = handle_api_request(&state, &mut request);
        if let Err(e) = request.respond(response) {
            warn!("failed to send response: {e}");
        }
    }

    Ok(())
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// A routed response before conversion to tiny_http types
#[derive(Debug)]
pub struct Reply {
    /// HTTP status
    pub status: u16,
    /// JSON body
    pub body: String,
}

/// Handle an API request and return a response
pub fn handle_api_request(state: &ApiState, request: &mut Request) -> Response<Cursor<Vec<u8>>> {
    let url = request.url().to_string();
    let method = request.method().clone();
    let authorization = request
        .headers()
        .iter()
        .find(|h| h.field.equiv("Authorization"))
        .map(|h| h.value.as_str().to_string());

    let mut body = String::new();
    if matches!(method, Method::Post | Method::Put | Method::Patch)
        && let Err(e) = request.as_reader().read_to_string(&mut body)
    {
        let reply = error_reply(&ApiError::bad_request(format!("Failed to read request body: {e}")));
        return into_response(reply);
    }

    let reply = dispatch(state, &method, &url, authorization.as_deref(), &body);
    debug!("{method} {url} -> {}", reply.status);
    into_response(reply)
}

/// Route a request to its handler
///
/// This is the main routing function that maps URL paths to handlers.
pub fn dispatch(
    state: &ApiState,
    method: &Method,
    url: &str,
    authorization: Option<&str>,
    body: &str,
) -> Reply {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));

    // Supports both /api/v1/... (versioned) and /api/... (unversioned)
    let Some(api_path) = path.strip_prefix("/api/v1").or_else(|| path.strip_prefix("/api")) else {
        return not_found_reply(&format!("Not found: {method} {path}"));
    };
    let api_path = api_path.trim_end_matches('/');

    let caller: Option<UserId> = state.authenticate(authorization);
    let caller = caller.as_ref();
    let mut rng = fastrand::Rng::new();

    match (method, api_path) {
        (&Method::Get, "/status") => handle_result(api::get_status(state)),
        (&Method::Get, "/examples") => handle_result(api::list_examples()),

        // Facts
        (&Method::Get, "/facts") => {
            handle_result(api::list_facts(query_param(query, "category").as_deref()))
        },
        (&Method::Get, "/facts/random") => handle_result(api::random_fact(&mut rng)),

        // Classification without persistence
        (&Method::Post, "/classify") => match parse_json::<ClassifyRequest>(body) {
            Ok(req) => handle_result(api::classify_text(&req, &mut rng)),
            Err(e) => error_reply(&e),
        },

        // Claims
        (&Method::Get, "/claims") => handle_result(api::list_claims(state, caller)),
        (&Method::Get, "/claims/recent") => handle_result(api::recent_claims(state)),
        (&Method::Post, "/claims") => match parse_json::<SubmitClaimRequest>(body) {
            Ok(req) => handle_result(api::submit_claim(state, caller, &req, &mut rng)),
            Err(e) => error_reply(&e),
        },

        // Claim detail: GET /claims/{id}
        _ if *method == Method::Get && api_path.starts_with("/claims/") => {
            match claim_id_segment(api_path) {
                Some(id) => handle_result(api::get_claim(state, caller, id)),
                None => not_found_reply(&format!("API endpoint not found: {method} {api_path}")),
            }
        },

        // Claim delete: DELETE /claims/{id}
        _ if *method == Method::Delete && api_path.starts_with("/claims/") => {
            match claim_id_segment(api_path) {
                Some(id) => handle_result(api::delete_claim(state, caller, id)),
                None => not_found_reply(&format!("API endpoint not found: {method} {api_path}")),
            }
        },

        // 404 for unknown API routes
        _ => not_found_reply(&format!("API endpoint not found: {method} {api_path}")),
    }
}

/// Extract `{id}` from `/claims/{id}`, rejecting nested paths
fn claim_id_segment(api_path: &str) -> Option<&str> {
    api_path
        .strip_prefix("/claims/")
        .filter(|id| !id.is_empty() && !id.contains('/'))
}

/// Look up a query parameter (`+` decodes to a space)
fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.replace('+', " "))
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Parse a JSON request body
fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to a reply
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Reply {
    match result {
        Ok(data) => json_reply(&ApiResponse::success(data), 200),
        Err(e) => error_reply(&e),
    }
}

/// Create an error reply with the appropriate status code
fn error_reply(error: &ApiError) -> Reply {
    if error.status_code() >= 500 {
        error!("{error}");
    } else {
        warn!("{error}");
    }
    let response = ApiResponse::<()>::error(error.code.as_str(), &error.message);
    json_reply(&response, error.status_code())
}

/// Create a 404 not found reply
fn not_found_reply(message: &str) -> Reply {
    let response = ApiResponse::<()>::error("NOT_FOUND", message);
    json_reply(&response, 404)
}

/// Serialize data to a JSON reply with status code
fn json_reply<T: Serialize>(data: &T, status: u16) -> Reply {
    let body = serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    Reply { status, body }
}

fn into_response(reply: Reply) -> Response<Cursor<Vec<u8>>> {
    let mut response =
        Response::from_data(reply.body.into_bytes()).with_status_code(StatusCode(reply.status));
    if let Ok(header) = Header::from_bytes("Content-Type", "application/json") {
        response.add_header(header);
    }
    response
}
