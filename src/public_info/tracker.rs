use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};

use super::types::{filter_requests, FeedRequest, PublicInfoRequest};
use super::FetchError;
use crate::config::TrackerConfig;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Cached feed state. Cloning only bumps the snapshot's reference count.
#[derive(Debug, Clone, Default)]
pub enum TrackerState {
    /// No refresh has succeeded yet.
    #[default]
    Empty,
    Populated {
        requests: Arc<Vec<PublicInfoRequest>>,
        refreshed_at: DateTime<Utc>,
    },
}

/// Owns the periodically refreshed snapshot of the institution's requests.
#[derive(Debug)]
pub struct PublicInfoTracker {
    client: reqwest::Client,
    url: String,
    state: RwLock<TrackerState>,
}

impl PublicInfoTracker {
    /// Build an Empty tracker. No request is made.
    pub fn new(config: &TrackerConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(config.fetch_timeout))
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
            state: RwLock::new(TrackerState::Empty),
        })
    }

    /// Build a tracker and try one refresh so the first read has data.
    /// A failed refresh is logged and the tracker stays Empty.
    pub async fn init(config: &TrackerConfig) -> Result<Self, FetchError> {
        let tracker = Self::new(config)?;
        match tracker.refresh().await {
            Ok(kept) => log::info!("Public info tracker primed with {kept} request(s)"),
            Err(e) => log::warn!("Initial public info refresh failed, starting empty: {e}"),
        }
        Ok(tracker)
    }

    /// Fetch the feed and, on success, replace the whole snapshot.
    ///
    /// On any failure the previous snapshot is left untouched. An empty feed
    /// is a failure; a feed with no request for the institution is not.
    /// Returns the number of requests kept.
    pub async fn refresh(&self) -> Result<usize, FetchError> {
        let raw = self.fetch().await?;
        let total = raw.len();
        let requests = filter_requests(raw);
        let kept = requests.len();

        self.replace(requests);
        log::info!("Public info refresh kept {kept} of {total} request(s)");
        Ok(kept)
    }

    /// Current snapshot; empty when never populated.
    pub fn snapshot(&self) -> Arc<Vec<PublicInfoRequest>> {
        match self.state() {
            TrackerState::Empty => Arc::default(),
            TrackerState::Populated { requests, .. } => requests,
        }
    }

    pub fn state(&self) -> TrackerState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        match self.state() {
            TrackerState::Empty => None,
            TrackerState::Populated { refreshed_at, .. } => Some(refreshed_at),
        }
    }

    async fn fetch(&self) -> Result<Vec<FeedRequest>, FetchError> {
        let resp = self.client.get(&self.url).send().await?;
        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status().as_u16()));
        }

        let body = resp.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(FetchError::EmptyBody);
        }

        let raw: Vec<FeedRequest> = serde_json::from_slice(&body)?;
        if raw.is_empty() {
            return Err(FetchError::NoRequests);
        }
        Ok(raw)
    }

    fn replace(&self, requests: Vec<PublicInfoRequest>) {
        let next = TrackerState::Populated {
            requests: Arc::new(requests),
            refreshed_at: Utc::now(),
        };
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = next;
    }
}
