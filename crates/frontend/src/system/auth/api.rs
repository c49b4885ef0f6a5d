use crate::shared::api::{ApiClient, ApiError};
use crate::shared::query::RetryPolicy;
use crm_contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};

/// Login with username and password
pub async fn login(
    api: &ApiClient,
    username: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    api.post_json("/auth/login/", &request).await
}

/// Exchange the refresh token for a new access token
pub async fn refresh_token(
    api: &ApiClient,
    refresh_token: String,
) -> Result<RefreshResponse, ApiError> {
    let request = RefreshRequest { refresh_token };
    api.post_json("/auth/refresh/", &request).await
}

/// Logout (revoke refresh token)
pub async fn logout(api: &ApiClient, refresh_token: String) -> Result<(), ApiError> {
    let request = RefreshRequest { refresh_token };
    // 204 without body
    match api.post_json::<_, serde_json::Value>("/auth/logout/", &request).await {
        Ok(_) | Err(ApiError::Decode(_)) => Ok(()),
        Err(e) => Err(e),
    }
}

/// Current user for the token in storage
pub async fn get_current_user(api: &ApiClient) -> Result<UserInfo, ApiError> {
    api.get_json("/auth/me/", RetryPolicy::none()).await
}
