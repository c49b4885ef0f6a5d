use crate::shared::storage;

/// Cookie set by the server on login; localStorage is the fallback for
/// sessions started from this console
const ACCESS_TOKEN_COOKIE: &str = "access_token";
const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const REFRESH_TOKEN_KEY: &str = "auth_refresh_token";

/// Save access token to localStorage
pub fn save_access_token(token: &str) {
    storage::set_item(ACCESS_TOKEN_KEY, token);
}

/// Access token from the cookie, else from localStorage
pub fn get_access_token() -> Option<String> {
    pick_token(
        storage::get_cookie(ACCESS_TOKEN_COOKIE),
        storage::get_item(ACCESS_TOKEN_KEY),
    )
}

pub fn save_refresh_token(token: &str) {
    storage::set_item(REFRESH_TOKEN_KEY, token);
}

pub fn get_refresh_token() -> Option<String> {
    storage::get_item(REFRESH_TOKEN_KEY).filter(|t| !t.trim().is_empty())
}

/// Clear all authentication tokens
pub fn clear_tokens() {
    storage::remove_item(ACCESS_TOKEN_KEY);
    storage::remove_item(REFRESH_TOKEN_KEY);
    storage::remove_cookie(ACCESS_TOKEN_COOKIE);
}

fn pick_token(cookie: Option<String>, local: Option<String>) -> Option<String> {
    cookie
        .into_iter()
        .chain(local)
        .map(|t| t.trim().to_string())
        .find(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_wins_over_local_storage() {
        assert_eq!(
            pick_token(Some("c".into()), Some("l".into())).as_deref(),
            Some("c")
        );
        assert_eq!(pick_token(Some(" ".into()), Some("l".into())).as_deref(), Some("l"));
        assert_eq!(pick_token(None, None), None);
    }
}
