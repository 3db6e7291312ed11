use crate::{error::AppError, models::User, state::AppState};

/// Resolve the acting user from the session.
pub async fn require_user(state: &AppState) -> Result<User, AppError> {
    state
        .session
        .current_user()
        .await
        .ok_or(AppError::Unauthorized)
}

pub fn ensure_admin(user: &User) -> Result<(), AppError> {
    if !user.is_admin {
        return Err(AppError::Forbidden);
    }
    Ok(())
}
