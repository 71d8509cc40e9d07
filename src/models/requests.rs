use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank recommended matches for a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(range(min = 1))]
    #[serde(default = "default_limit")]
    pub limit: u16,
    #[serde(default)]
    #[serde(alias = "excludeUserIds", rename = "excludeUserIds")]
    pub exclude_user_ids: Vec<String>,
}

fn default_limit() -> u16 {
    20
}
