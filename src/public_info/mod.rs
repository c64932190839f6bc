//! Tracking of public-information requests filed with the ministry.
//!
//! The feed is fetched from the national transparency portal, filtered to one
//! institution and cached in memory. A background task refreshes the cache on
//! a fixed cadence; readers always see one complete snapshot.

pub mod scheduler;
pub mod tracker;
pub mod types;

use std::fmt;

pub use scheduler::{spawn_refresh_loop, RefreshHandle};
pub use tracker::{PublicInfoTracker, TrackerState};
pub use types::PublicInfoRequest;

/// Only requests addressed to this institution are kept.
pub const INSTITUTION_ID: i64 = 924;

/// State name the portal uses for requests that have been answered.
pub const ANSWERED_STATE: &str = "RESPONDIDO";

/// Why a refresh did not replace the cached snapshot.
#[derive(Debug)]
pub enum FetchError {
    Http(reqwest::Error),
    Status(u16),
    EmptyBody,
    Parse(serde_json::Error),
    NoRequests,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http(e) if e.is_timeout() => write!(f, "Feed request timed out: {e}"),
            FetchError::Http(e) => write!(f, "Feed request failed: {e}"),
            FetchError::Status(code) => write!(f, "Feed returned HTTP {code}"),
            FetchError::EmptyBody => write!(f, "Feed returned an empty body"),
            FetchError::Parse(e) => write!(f, "Feed body is not a request list: {e}"),
            FetchError::NoRequests => write!(f, "No requests found"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Http(e) => Some(e),
            FetchError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Http(e)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e)
    }
}
