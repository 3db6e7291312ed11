use tokio::sync::RwLock;

use crate::models::User;

/// Current-identity state machine: anonymous -> authenticating ->
/// authenticated, and back to anonymous on logout.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated(User),
}

#[derive(Debug, Default)]
pub struct Session {
    state: RwLock<SessionState>,
}

impl Session {
    pub fn new(user: Option<User>) -> Self {
        let state = match user {
            Some(user) => SessionState::Authenticated(user),
            None => SessionState::Anonymous,
        };
        Self {
            state: RwLock::new(state),
        }
    }

    pub async fn current_user(&self) -> Option<User> {
        match &*self.state.read().await {
            SessionState::Authenticated(user) => Some(user.clone()),
            _ => None,
        }
    }

    /// Enter `Authenticating`, handing back the state to restore if the
    /// attempt fails.
    pub async fn begin(&self) -> SessionState {
        std::mem::replace(&mut *self.state.write().await, SessionState::Authenticating)
    }

    pub async fn restore(&self, prior: SessionState) {
        *self.state.write().await = prior;
    }

    pub async fn authenticate(&self, user: User) {
        *self.state.write().await = SessionState::Authenticated(user);
    }

    pub async fn clear(&self) {
        *self.state.write().await = SessionState::Anonymous;
    }
}
