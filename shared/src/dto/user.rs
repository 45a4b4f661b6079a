use serde::{Deserialize, Serialize};

wire_enum! {
    /// Account role of a marketplace user.
    UserRole {
        Admin => "Admin",
        User => "User",
        Staff => "Staff",
    }
}

/// Marketplace user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub address: String,
    pub role: UserRole,
    #[serde(default)]
    pub is_active: bool,
}

/// Query parameters for `GET /api/users`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetUsersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Paginated user list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetUsersResponse {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl GetUsersResponse {
    /// Wrap an unpaginated list as a single page.
    pub fn single_page(users: Vec<User>) -> Self {
        let len = users.len();
        Self {
            total: len as u64,
            page: 1,
            limit: u32::try_from(len).unwrap_or(u32::MAX),
            total_pages: 1,
            users,
        }
    }
}

/// Body for `PUT /api/users/:id`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Either a paginated envelope or a bare array, depending on server version.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UserListPayload {
    Bare(Vec<User>),
    Paged(GetUsersResponse),
}

impl From<UserListPayload> for GetUsersResponse {
    fn from(payload: UserListPayload) -> Self {
        match payload {
            UserListPayload::Paged(page) => page,
            UserListPayload::Bare(users) => GetUsersResponse::single_page(users),
        }
    }
}
