use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user. The password is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub username: String,
}
