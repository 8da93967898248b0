//! API endpoint modules organized by resource category.
//!
//! Each module provides typed methods for a group of related endpoints.
//! Methods accept parameter structs mirroring the documented fields, fail
//! locally with a validation error when a required field is absent, and
//! return the server's JSON payload verbatim.

use serde::Serialize;

use sc_core::constants;

pub mod account;
pub mod campaigns;
pub mod channels;
pub mod domains;
pub mod links;
pub mod overlays;
pub mod pixels;
pub mod qr;
pub mod splash;

/// Query parameters shared by all paginated list endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ListQuery {
    /// Maximum number of results per page.
    pub limit: u32,
    /// Page number, starting at 1.
    pub page: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: constants::DEFAULT_PAGE_LIMIT,
            page: constants::DEFAULT_PAGE,
        }
    }
}
