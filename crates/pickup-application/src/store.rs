//! The session store.
//!
//! `SessionStore` is the single process-wide state container: it owns the
//! session, both order sequences, and the theme preference behind one mutex,
//! seeds itself from the durable storage mirror at construction, and mirrors
//! committed fields back after every mutation. All mutation goes through the
//! pure reducer on `StoreState`; persistence is a separate step applied after
//! the commit.
//!
//! Every operation catches failures at its boundary and returns a normalized
//! result struct. Mutations committed by a single operation are atomic from
//! the caller's perspective; nothing is guaranteed about the ordering of two
//! overlapping operations, and overlapping page fetches for the same feed may
//! commit out of order. Accepted limitation.

use std::sync::Arc;

use pickup_core::api::{BackendApi, LoginRequest, VerificationCodeRequest};
use pickup_core::order::{Order, OrderFeed, PAGE_SIZE};
use pickup_core::route::{self, NavigationDecision, Route};
use pickup_core::state::StoreState;
use pickup_core::storage::{KeyValueStore, keys};
use pickup_core::theme::{self, ColorSchemeProbe, ResolvedTheme, Theme};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::outcome::{ActionResult, PageRequest, PageStatus};

pub struct SessionStore {
    state: Arc<Mutex<StoreState>>,
    api: Arc<dyn BackendApi>,
    storage: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Creates the store, seeding initial state from the storage mirror.
    ///
    /// Storage reads are best-effort: a failing mirror seeds the same state
    /// as an empty one. Corrupt persisted user info is dropped with a
    /// warning.
    pub fn new(api: Arc<dyn BackendApi>, storage: Arc<dyn KeyValueStore>) -> Self {
        let mut state = StoreState::default();
        state.session.authorization =
            read_key(storage.as_ref(), keys::AUTHORIZATION).unwrap_or_default();
        state.session.user_id = read_key(storage.as_ref(), keys::USER_ID).unwrap_or_default();
        if let Some(raw) = read_key(storage.as_ref(), keys::USER_INFO) {
            match serde_json::from_str(&raw) {
                Ok(info) => state.session.user_info = Some(info),
                Err(e) => warn!(error = %e, "dropping corrupt persisted user info"),
            }
        }
        if let Some(raw) = read_key(storage.as_ref(), keys::THEME) {
            state.theme = Theme::from_storage(&raw);
        }

        Self {
            state: Arc::new(Mutex::new(state)),
            api,
            storage,
        }
    }

    // ------------------------------------------------------------------
    // Authentication flow
    // ------------------------------------------------------------------

    /// Requests a verification code for `phone_number`.
    ///
    /// On success commits the phone number and the server-issued verification
    /// params and returns the raw response payload. On any failure the state
    /// is untouched. Slider tokens are empty unless a captcha was solved.
    pub async fn send_verification_code(
        &self,
        phone_number: &str,
        slider_ticket: &str,
        slider_randstr: &str,
    ) -> ActionResult {
        let request = VerificationCodeRequest {
            phone_number: phone_number.to_string(),
            slider_ticket: slider_ticket.to_string(),
            slider_randstr: slider_randstr.to_string(),
        };

        let response = match self.api.send_verification_code(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "verification code request failed");
                return ActionResult::fail(e.to_string());
            }
        };

        if !response.success {
            return ActionResult::fail("verification code could not be sent");
        }

        let payload = match serde_json::to_value(&response) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "could not re-serialize verification payload");
                Value::Null
            }
        };

        let mut state = self.state.lock().await;
        state.commit_verification(phone_number.to_string(), response.params);
        drop(state);

        ActionResult::ok_with(payload)
    }

    /// Completes the login challenge with the supplied code.
    ///
    /// Fails fast without a network call when no verification params are
    /// held. On success commits and persists `authorization`, `userId` and
    /// the full user record. Verification params are left in place either
    /// way; a retry after a failed attempt reuses them.
    pub async fn login(&self, verification_code: &str) -> ActionResult {
        let (phone_number, params) = {
            let state = self.state.lock().await;
            match &state.session.verification_params {
                Some(params) => (state.session.phone_number.clone(), params.clone()),
                None => {
                    return ActionResult::fail(
                        "verification parameters missing, request a new code",
                    );
                }
            }
        };

        let request = LoginRequest {
            phone_number,
            verification_code: verification_code.to_string(),
            rsa_public_key: params.rsa_public_key,
            client_ip: params.client_ip,
            request_code: params.request_code,
            timestamp: params.timestamp,
        };

        let response = match self.api.login(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "login request failed");
                return ActionResult::fail(e.to_string());
            }
        };

        if !response.success {
            return ActionResult::fail("login failed");
        }

        let (user_id, user_info) = match (response.user_id(), response.user_record()) {
            (Some(user_id), Some(record)) => (user_id.to_string(), record.clone()),
            _ => return ActionResult::fail("login response missing user record"),
        };

        let authorization = response.authorization;
        {
            let mut state = self.state.lock().await;
            state.commit_auth(authorization.clone(), user_id.clone(), user_info.clone());
        }

        self.mirror_set(keys::AUTHORIZATION, &authorization);
        self.mirror_set(keys::USER_ID, &user_id);
        match serde_json::to_string(&user_info) {
            Ok(serialized) => self.mirror_set(keys::USER_INFO, &serialized),
            Err(e) => warn!(error = %e, "could not serialize user info for storage"),
        }

        debug!(%user_id, "login committed");
        ActionResult::ok()
    }

    /// Clears authentication state, both order sequences, and their storage
    /// mirror entries. Theme is kept.
    pub async fn logout(&self) {
        let mut state = self.state.lock().await;
        state.logout();
        drop(state);

        self.mirror_remove(keys::AUTHORIZATION);
        self.mirror_remove(keys::USER_ID);
        self.mirror_remove(keys::USER_INFO);
        debug!("session cleared");
    }

    // ------------------------------------------------------------------
    // Order accumulation
    // ------------------------------------------------------------------

    /// Fetches a page of pending orders.
    pub async fn fetch_pending_orders(&self, request: PageRequest) -> PageStatus {
        self.fetch_orders(OrderFeed::Pending, request).await
    }

    /// Fetches a page of completed orders.
    pub async fn fetch_completed_orders(&self, request: PageRequest) -> PageStatus {
        self.fetch_orders(OrderFeed::Completed, request).await
    }

    /// Shared fetch/commit path for both feeds.
    ///
    /// Page 1 (or an explicit reset) replaces the in-memory sequence, later
    /// pages append. `has_more` is inferred from a full page; at totals that
    /// are exact multiples of the page size this reports one extra page that
    /// will come back empty. Preserved heuristic.
    async fn fetch_orders(&self, feed: OrderFeed, request: PageRequest) -> PageStatus {
        let authorization = self.state.lock().await.session.authorization.clone();

        let result = match feed {
            OrderFeed::Pending => self.api.pending_orders(&authorization, request.page).await,
            OrderFeed::Completed => self.api.completed_orders(&authorization, request.page).await,
        };

        let envelope = match result {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(?feed, page = request.page, error = %e, "order fetch failed");
                return PageStatus::failed();
            }
        };

        if !envelope.success {
            return PageStatus::failed();
        }

        // The two endpoints disagree on the envelope shape: the pending feed
        // sometimes nests the array one level deeper.
        let orders: Vec<Order> = match feed {
            OrderFeed::Pending => envelope.orders_tolerant(),
            OrderFeed::Completed => envelope.orders_flat(),
        };
        let page_len = orders.len();

        let mut state = self.state.lock().await;
        state.commit_orders(feed, orders, request.reset || request.page == 1);
        drop(state);

        debug!(?feed, page = request.page, page_len, "orders page committed");
        PageStatus::fetched(page_len, PAGE_SIZE)
    }

    // ------------------------------------------------------------------
    // Theme
    // ------------------------------------------------------------------

    /// Commits and persists a theme preference unconditionally.
    pub async fn set_theme(&self, theme: Theme) {
        let mut state = self.state.lock().await;
        state.commit_theme(theme);
        drop(state);
        self.mirror_set(keys::THEME, theme.as_str());
    }

    /// One-time startup correction: a `System` preference on a host that can
    /// detect neither scheme downgrades to `Light`.
    pub async fn init_theme(&self, probe: &dyn ColorSchemeProbe) {
        let current = self.state.lock().await.theme;
        if current == Theme::System && !theme::supports_color_scheme(probe) {
            self.set_theme(Theme::Light).await;
        }
    }

    /// The effective theme, derived against the host on every call.
    pub async fn current_theme(&self, probe: &dyn ColorSchemeProbe) -> ResolvedTheme {
        let preference = self.state.lock().await.theme;
        theme::resolve(preference, probe)
    }

    /// The stored (unresolved) preference.
    pub async fn theme_preference(&self) -> Theme {
        self.state.lock().await.theme
    }

    // ------------------------------------------------------------------
    // Navigation and state snapshots
    // ------------------------------------------------------------------

    /// Runs the navigation guard against the current session state.
    pub async fn navigate(&self, target: Route) -> NavigationDecision {
        route::decide(target, self.is_authenticated().await)
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.lock().await.session.is_authenticated()
    }

    pub async fn authorization(&self) -> String {
        self.state.lock().await.session.authorization.clone()
    }

    pub async fn user_id(&self) -> String {
        self.state.lock().await.session.user_id.clone()
    }

    pub async fn user_info(&self) -> Option<Value> {
        self.state.lock().await.session.user_info.clone()
    }

    pub async fn phone_number(&self) -> String {
        self.state.lock().await.session.phone_number.clone()
    }

    pub async fn pending_orders(&self) -> Vec<Order> {
        self.state.lock().await.pending_orders.clone()
    }

    pub async fn completed_orders(&self) -> Vec<Order> {
        self.state.lock().await.completed_orders.clone()
    }

    // ------------------------------------------------------------------
    // Storage mirror helpers (best-effort, log-only failure handling)
    // ------------------------------------------------------------------

    fn mirror_set(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            warn!(key, error = %e, "failed to write durable storage mirror");
        }
    }

    fn mirror_remove(&self, key: &str) {
        if let Err(e) = self.storage.remove(key) {
            warn!(key, error = %e, "failed to remove durable storage entry");
        }
    }
}

fn read_key(storage: &dyn KeyValueStore, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "failed to read durable storage mirror");
            None
        }
    }
}
