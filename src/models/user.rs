use serde::{Deserialize, Serialize};

/// Server-side identifier. The backend has sent both numeric and string ids.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum UserId {
    Numeric(i64),
    Text(String),
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct Role {
    #[serde(default)]
    pub name: String,
}

/// The authenticated principal as returned by the server.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct UserRecord {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl UserRecord {
    /// First non-empty of first name, last name, username; "Unknown" otherwise.
    pub fn display_name(&self) -> String {
        [&self.first_name, &self.last_name, &self.username]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|name| !name.is_empty())
            .unwrap_or("Unknown")
            .to_string()
    }

    /// Name of the first role, cut at the first `#` ("admin#3" -> "admin").
    pub fn role_name(&self) -> String {
        self.roles
            .first()
            .map(|role| role.name.split('#').next().unwrap_or_default().to_string())
            .unwrap_or_default()
    }
}
