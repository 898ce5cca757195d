use serde::{Deserialize, Serialize};

/// Request body for both create and update.
///
/// Omitted fields decode to the empty string; update overwrites every column,
/// so an omitted field clears the stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

impl DeleteResponse {
    pub fn success() -> Self {
        Self {
            message: "Delete success",
        }
    }
}
