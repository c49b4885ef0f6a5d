use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Роль пользователя в арендаторе
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    #[default]
    #[serde(other)]
    Operator,
}

/// Screen group guarded by role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Bids,
    Customers,
    Catalog,
    Settings,
}

impl Role {
    pub fn can_access(self, section: Section) -> bool {
        match self {
            Self::Admin => true,
            Self::Manager => section != Section::Settings,
            Self::Operator => matches!(section, Section::Bids | Section::Customers),
        }
    }

    pub fn can_delete(self) -> bool {
        matches!(self, Self::Admin | Self::Manager)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_falls_back_to_operator() {
        let user: UserInfo =
            serde_json::from_str(r#"{"id": 1, "username": "kassa", "role": "cashier"}"#).unwrap();
        assert_eq!(user.role, Role::Operator);
        assert_eq!(user.display_name(), "kassa");
    }

    #[test]
    fn test_section_access() {
        assert!(Role::Admin.can_access(Section::Settings));
        assert!(!Role::Manager.can_access(Section::Settings));
        assert!(Role::Manager.can_access(Section::Catalog));
        assert!(Role::Operator.can_access(Section::Bids));
        assert!(!Role::Operator.can_access(Section::Catalog));
        assert!(!Role::Operator.can_delete());
    }
}
