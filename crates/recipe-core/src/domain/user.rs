use serde::{Deserialize, Serialize};

use super::serde_ext::null_as_default;

/// Identity returned by `GET /api/v1/whoami`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}
