use tokio::sync::RwLock;

use crate::models::User;

/// The static demo accounts plus anything registered during this
/// process. Registrations are not persisted.
#[derive(Debug)]
pub struct UserDirectory {
    users: RwLock<Vec<User>>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Exact, case-sensitive match.
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.email == email)
            .cloned()
    }

    pub async fn insert(&self, user: User) {
        self.users.write().await.push(user);
    }
}
