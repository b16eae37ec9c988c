//! The state container and its pure reducer.
//!
//! All committing mutations of the client live here as plain methods with no
//! storage or network dependency; the application layer mirrors the affected
//! fields to durable storage after a commit. This keeps the reducer testable
//! in isolation and the persistence a separate, explicit step.

use serde_json::Value;

use crate::order::{Order, OrderFeed};
use crate::session::{SessionState, VerificationParams};
use crate::theme::Theme;

/// The single process-wide state container.
///
/// Created at startup (seeded from durable storage), mutated only through
/// the commit methods below, and torn down on logout for the auth-related
/// fields. Theme survives logout.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub session: SessionState,
    pub pending_orders: Vec<Order>,
    pub completed_orders: Vec<Order>,
    pub theme: Theme,
}

impl StoreState {
    /// Commits the outcome of a successful verification-code request.
    ///
    /// `params` is committed as-is; a success envelope without params leaves
    /// the login precondition unsatisfied.
    pub fn commit_verification(
        &mut self,
        phone_number: String,
        params: Option<VerificationParams>,
    ) {
        self.session.phone_number = phone_number;
        self.session.verification_params = params;
    }

    /// Commits the outcome of a successful login.
    ///
    /// Verification params are intentionally left in place; a re-login after
    /// a failure reuses them.
    pub fn commit_auth(&mut self, authorization: String, user_id: String, user_info: Value) {
        self.session.authorization = authorization;
        self.session.user_id = user_id;
        self.session.user_info = Some(user_info);
    }

    /// Commits a fetched page into the given feed.
    ///
    /// `replace` swaps the whole sequence for the page; otherwise the page is
    /// appended. Duplicates across overlapping fetches are not deduplicated.
    pub fn commit_orders(&mut self, feed: OrderFeed, orders: Vec<Order>, replace: bool) {
        let target = match feed {
            OrderFeed::Pending => &mut self.pending_orders,
            OrderFeed::Completed => &mut self.completed_orders,
        };
        if replace {
            *target = orders;
        } else {
            target.extend(orders);
        }
    }

    /// Commits a theme preference.
    pub fn commit_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Clears authentication state and both order sequences.
    ///
    /// Phone number and verification params are untouched so the login flow
    /// can be re-entered; theme is untouched by design of the feature.
    pub fn logout(&mut self) {
        self.session.authorization.clear();
        self.session.user_id.clear();
        self.session.user_info = None;
        self.pending_orders.clear();
        self.completed_orders.clear();
    }
}
