//! Request identification.
//!
//! # Responsibilities
//! - Generate a unique UUID v4 request ID as early as possible
//! - Propagate the ID onto the response for log correlation
//!
//! # Design Decisions
//! - Uses the standard `x-request-id` header so the browser console and
//!   the service logs can be matched one-to-one

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Assigns a fresh UUID v4 to every incoming request.
#[derive(Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}
