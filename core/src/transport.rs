//! The boundary to whatever actually performs HTTP.
//!
//! # Design
//! The core never opens a socket. A `Transport` executes one `HttpRequest` and
//! returns the raw `HttpResponse`; connection handling, TLS, signing and
//! timeouts all live on the other side of this trait. Non-2xx responses are
//! turned into `TransportError::Status` here, in one place, so every call path
//! treats them the same way.

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

/// Execute `request` and return the body of a 2xx response.
pub fn execute_for_body<T: Transport + ?Sized>(
    transport: &T,
    request: &HttpRequest,
) -> Result<String, TransportError> {
    tracing::debug!(method = request.method.as_str(), path = %request.path, "dispatching request");
    let response = transport.execute(request)?;
    check_status(response)
}

fn check_status(response: HttpResponse) -> Result<String, TransportError> {
    if response.is_success() {
        return Ok(response.body);
    }
    Err(TransportError::Status {
        status: response.status,
        body: response.body,
    })
}
