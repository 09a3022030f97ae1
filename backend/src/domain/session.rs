//! Session routing state machine.
//!
//! A session is either logged out or holds a user together with the page
//! currently occupying the main content area. Every transition is a method on
//! [`SessionState`]; callers never assemble the variants themselves.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{Error, Page, PageAccessPolicy, User};

/// Routing state owned by one client.
///
/// ## Invariants
/// - A page is only meaningful while a user is present, so it lives inside
///   the [`SessionState::LoggedIn`] variant.
/// - The page always satisfies the access policy in force when it was set.
///
/// # Examples
/// ```
/// use finsage::domain::{LoginForm, Page, Role, SessionState};
///
/// let user = LoginForm::for_role(Role::Ciso).into_user().unwrap();
/// let state = SessionState::default().login(user);
/// assert_eq!(state.page(), Some(Page::Dashboard));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn { user: User, page: Page },
}

/// Outcome of a page change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum PageChange {
    /// The requested page is now current.
    Changed { page: Page },
    /// The policy refused the request and the session landed on the
    /// fallback page instead.
    Redirected { requested: Page, page: Page },
}

impl PageChange {
    /// Page that is current after the change.
    pub fn page(self) -> Page {
        match self {
            Self::Changed { page } | Self::Redirected { page, .. } => page,
        }
    }
}

fn login_required() -> Error {
    Error::unauthorized("login required")
}

impl SessionState {
    /// Replace any existing session with `user` on the default page.
    pub fn login(self, user: User) -> Self {
        info!(user_id = %user.id(), role = %user.role(), "user logged in");
        Self::LoggedIn {
            user,
            page: Page::DEFAULT,
        }
    }

    /// Discard the user and page. Logging out twice is harmless.
    pub fn logout(self) -> Self {
        if let Self::LoggedIn { user, .. } = &self {
            info!(user_id = %user.id(), "user logged out");
        }
        Self::LoggedOut
    }

    /// Move to `requested`, subject to `policy`.
    ///
    /// Under an enforcing policy a page outside the role's capability set is
    /// replaced by [`Page::DEFAULT`] and reported as
    /// [`PageChange::Redirected`].
    pub fn change_page(
        &mut self,
        requested: Page,
        policy: PageAccessPolicy,
    ) -> Result<PageChange, Error> {
        let Self::LoggedIn { user, page } = self else {
            return Err(login_required());
        };
        let outcome = if policy.admits(requested, user.role()) {
            PageChange::Changed { page: requested }
        } else {
            info!(
                role = %user.role(),
                requested = %requested,
                "page not permitted for role; redirecting"
            );
            PageChange::Redirected {
                requested,
                page: Page::DEFAULT,
            }
        };
        debug!(from = %page, to = %outcome.page(), "page changed");
        *page = outcome.page();
        Ok(outcome)
    }

    /// Swap in an edited user, keeping the current page.
    ///
    /// The edit must keep the same id and role; profile changes never alter
    /// identity.
    pub fn update_profile(&mut self, updated: User) -> Result<(), Error> {
        let Self::LoggedIn { user, .. } = self else {
            return Err(login_required());
        };
        if updated.id() != user.id() || updated.role() != user.role() {
            return Err(Error::invalid_request(
                "profile updates must keep the user id and role",
            ));
        }
        debug!(user_id = %updated.id(), "profile updated");
        *user = updated;
        Ok(())
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::LoggedIn { user, .. } => Some(user),
            Self::LoggedOut => None,
        }
    }

    pub fn page(&self) -> Option<Page> {
        match self {
            Self::LoggedIn { page, .. } => Some(*page),
            Self::LoggedOut => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorCode, LoginForm, ProfileDetails, Role};
    use rstest::{fixture, rstest};

    fn user_for(role: Role) -> User {
        LoginForm::for_role(role).into_user().expect("user")
    }

    #[fixture]
    fn finops() -> SessionState {
        SessionState::default().login(user_for(Role::FinOpsAnalyst))
    }

    #[rstest]
    fn initial_state_is_logged_out() {
        let state = SessionState::default();
        assert!(!state.is_logged_in());
        assert_eq!(state.page(), None);
    }

    #[rstest]
    fn every_role_lands_on_dashboard() {
        for role in Role::ALL {
            let state = SessionState::default().login(user_for(role));
            assert_eq!(state.user().map(User::role), Some(role));
            assert_eq!(state.page(), Some(Page::Dashboard));
        }
    }

    #[rstest]
    fn login_replaces_existing_session(mut finops: SessionState) {
        finops
            .change_page(Page::Chargeback, PageAccessPolicy::Enforced)
            .expect("permitted");
        let state = finops.login(user_for(Role::Ciso));
        assert_eq!(state.user().map(User::role), Some(Role::Ciso));
        assert_eq!(state.page(), Some(Page::Dashboard));
    }

    #[rstest]
    fn logout_then_login_starts_at_dashboard(mut finops: SessionState) {
        finops
            .change_page(Page::Reports, PageAccessPolicy::Enforced)
            .expect("permitted");
        let state = finops.logout();
        assert_eq!(state, SessionState::LoggedOut);
        assert_eq!(state.clone().logout(), SessionState::LoggedOut);
        let state = state.login(user_for(Role::Cfo));
        assert_eq!(state.page(), Some(Page::Dashboard));
    }

    #[rstest]
    fn change_page_is_idempotent(mut finops: SessionState) {
        let first = finops
            .change_page(Page::Forecast, PageAccessPolicy::Enforced)
            .expect("permitted");
        let after_once = finops.clone();
        let second = finops
            .change_page(Page::Forecast, PageAccessPolicy::Enforced)
            .expect("permitted");
        assert_eq!(first, second);
        assert_eq!(finops, after_once);
    }

    #[rstest]
    fn enforced_policy_redirects_disallowed_pages() {
        let mut state = SessionState::default().login(user_for(Role::CloudManager));
        let outcome = state
            .change_page(Page::Forecast, PageAccessPolicy::Enforced)
            .expect("logged in");
        assert_eq!(
            outcome,
            PageChange::Redirected {
                requested: Page::Forecast,
                page: Page::Dashboard
            }
        );
        assert_eq!(state.page(), Some(Page::Dashboard));
    }

    #[rstest]
    fn advisory_policy_accepts_any_page() {
        let mut state = SessionState::default().login(user_for(Role::CloudManager));
        let outcome = state
            .change_page(Page::Forecast, PageAccessPolicy::Advisory)
            .expect("logged in");
        assert_eq!(
            outcome,
            PageChange::Changed {
                page: Page::Forecast
            }
        );
        assert_eq!(state.page(), Some(Page::Forecast));
    }

    #[rstest]
    fn profile_update_keeps_page(mut finops: SessionState) {
        finops
            .change_page(Page::AiOptimization, PageAccessPolicy::Enforced)
            .expect("permitted");
        let edited = finops
            .user()
            .expect("user")
            .edited("Mike Chen", "mike@bank.in", ProfileDetails::default())
            .expect("valid edit");
        finops.update_profile(edited).expect("logged in");
        assert_eq!(finops.page(), Some(Page::AiOptimization));
        assert_eq!(finops.user().map(User::name), Some("Mike Chen"));
    }

    #[rstest]
    fn profile_update_rejects_identity_change(mut finops: SessionState) {
        let other = user_for(Role::FinOpsAnalyst);
        let err = finops.update_profile(other).expect_err("different id");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    fn transitions_need_a_user() {
        let mut state = SessionState::default();
        let err = state
            .change_page(Page::Reports, PageAccessPolicy::Advisory)
            .expect_err("logged out");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
        let err = state
            .update_profile(user_for(Role::Cfo))
            .expect_err("logged out");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }

    #[rstest]
    fn serialises_with_state_tag(finops: SessionState) {
        let value = serde_json::to_value(&finops).expect("serialise");
        assert_eq!(value["state"], "loggedIn");
        assert_eq!(value["page"], "dashboard");
        assert_eq!(value["user"]["role"], "FinOps Analyst");
        let back: SessionState = serde_json::from_value(value).expect("deserialise");
        assert_eq!(back, finops);
    }
}
