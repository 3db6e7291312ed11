use std::time::Duration;

use tokio::time::sleep;
use uuid::Uuid;

use crate::{
    dto::auth::{LoginRequest, RegisterRequest},
    error::{AppError, AppResult},
    models::User,
    response::{ApiResponse, Meta},
    state::AppState,
    storage,
};

// Every demo account shares this literal; there is no per-user
// credential store. See DESIGN.md.
const DEMO_PASSWORD: &str = "password";

pub async fn login(state: &AppState, payload: LoginRequest) -> AppResult<ApiResponse<User>> {
    let LoginRequest { email, password } = payload;

    let prior = state.session.begin().await;
    sleep(Duration::from_millis(state.config.simulated_latency_ms)).await;

    let found = state.users.find_by_email(&email).await;
    let user = match found {
        Some(user) if password == DEMO_PASSWORD => user,
        _ => {
            state.session.restore(prior).await;
            return Err(AppError::Validation("Invalid credentials".to_string()));
        }
    };

    state.session.authenticate(user.clone()).await;
    state.storage.save(storage::USER_KEY, &user).await?;

    tracing::info!(user_id = %user.id, "login successful");
    Ok(ApiResponse::success(
        "Login successful",
        user,
        Some(Meta::empty()),
    ))
}

pub async fn register(state: &AppState, payload: RegisterRequest) -> AppResult<ApiResponse<User>> {
    let RegisterRequest {
        name,
        email,
        password: _,
    } = payload;

    let prior = state.session.begin().await;
    sleep(Duration::from_millis(state.config.simulated_latency_ms)).await;

    if state.users.find_by_email(&email).await.is_some() {
        state.session.restore(prior).await;
        return Err(AppError::Validation("User already exists".to_string()));
    }

    let user = User {
        id: Uuid::new_v4(),
        email,
        name,
        is_admin: false,
    };
    state.users.insert(user.clone()).await;

    // Auto-login after registration.
    state.session.authenticate(user.clone()).await;
    state.storage.save(storage::USER_KEY, &user).await?;

    tracing::info!(user_id = %user.id, "registration successful");
    Ok(ApiResponse::success(
        "Registration successful",
        user,
        Some(Meta::empty()),
    ))
}

/// Logout is unconditional: the session is cleared even if removing the
/// stored user fails.
pub async fn logout(state: &AppState) -> ApiResponse<serde_json::Value> {
    state.session.clear().await;
    if let Err(err) = state.storage.remove(storage::USER_KEY).await {
        tracing::warn!(error = %err, "failed to remove stored user");
    }

    tracing::info!("logged out");
    ApiResponse::success(
        "You have been logged out",
        serde_json::json!({}),
        Some(Meta::empty()),
    )
}

pub async fn current_user(state: &AppState) -> Option<User> {
    state.session.current_user().await
}
