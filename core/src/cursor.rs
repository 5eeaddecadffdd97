//! Cursor pagination.
//!
//! # Design
//! Cursored endpoints return one page of ids plus the cursor of the next page.
//! `CursorAccessor` starts at cursor `-1`, appends `cursor=<n>` to a copy of
//! the request template for every page, and stops when the server answers with
//! next cursor `0`.
//!
//! A next cursor that was already requested during the same walk means the
//! server is cycling; the walk stops with `ApiError::CursorLoop`.
//!
//! The result is all-or-nothing: any failure on any page drops the ids gathered
//! so far and returns the error. Pages are fetched strictly one after another,
//! since the next cursor is only known once the current page is decoded.

use std::collections::HashSet;

use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::transport::{execute_for_body, Transport};
use crate::types::IdsCursorPage;

/// Cursor value that requests the first page.
pub const INITIAL_CURSOR: i64 = -1;

/// Next-cursor value marking the last page.
pub const TERMINAL_CURSOR: i64 = 0;

#[derive(Debug, Clone, Copy, Default)]
pub struct CursorAccessor;

impl CursorAccessor {
    pub fn new() -> Self {
        Self
    }

    /// Walk every page of `template` and return the concatenated ids in the
    /// order they were served.
    pub fn collect_ids<T: Transport + ?Sized>(
        &self,
        transport: &T,
        template: &HttpRequest,
    ) -> Result<Vec<u64>, ApiError> {
        let mut ids = Vec::new();
        let mut cursor = INITIAL_CURSOR;
        let mut requested = HashSet::from([INITIAL_CURSOR]);

        loop {
            let page = self.fetch_page(transport, template, cursor)?;
            tracing::debug!(
                path = %template.path,
                cursor,
                next_cursor = page.next_cursor,
                received = page.ids.len(),
                "fetched cursor page"
            );
            ids.extend(page.ids);

            if page.next_cursor == TERMINAL_CURSOR {
                return Ok(ids);
            }
            if !requested.insert(page.next_cursor) {
                tracing::warn!(
                    path = %template.path,
                    cursor,
                    next_cursor = page.next_cursor,
                    "cursor already requested"
                );
                return Err(ApiError::CursorLoop(page.next_cursor));
            }
            cursor = page.next_cursor;
        }
    }

    fn fetch_page<T: Transport + ?Sized>(
        &self,
        transport: &T,
        template: &HttpRequest,
        cursor: i64,
    ) -> Result<IdsCursorPage, ApiError> {
        let request = template.clone().with_param("cursor", cursor);
        let body = execute_for_body(transport, &request)?;
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}
