//! Session context supplied to every orchestration decision
//!
//! The session is an explicit value passed into orchestrator calls, not
//! ambient mutable storage, so orchestration decisions stay pure given
//! their inputs. Persistence of the authenticated session is a concern
//! of the embedding application.

use shared::models::{Role, User};

use crate::{ClientError, ClientResult};

/// Authenticated identity (or the lack of one) for the current session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// An unauthenticated session.
    pub fn guest() -> Self {
        Self { user: None }
    }

    /// A session for a signed-in user, usually obtained from login.
    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn current_user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|user| user.user_id)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role(), Some(Role::Admin))
    }

    /// Identity of the signed-in user. The single origin of the
    /// `Unauthenticated` condition in the orchestrators.
    pub fn require_user_id(&self) -> ClientResult<i64> {
        self.current_user_id().ok_or(ClientError::Unauthenticated)
    }
}
