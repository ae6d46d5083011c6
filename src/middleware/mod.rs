// ABOUTME: HTTP middleware for request tracing, request IDs and cross-origin access
// ABOUTME: Provides request ID generation, span creation and CORS configuration

/// CORS layer construction
pub mod cors;
/// Request IDs and request spans
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing and correlation
pub use self::tracing::{create_request_span, request_id_layers, trace_layer, REQUEST_ID_HEADER};
