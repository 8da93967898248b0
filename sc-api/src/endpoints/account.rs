//! Account endpoints.

use serde::Serialize;

use sc_core::error::ScResult;

use crate::client::ApiClient;

/// Parameters for updating account information. Only fields that are set
/// are sent to the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAccountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ApiClient {
    /// Get account information.
    pub async fn get_account(&self) -> ScResult<serde_json::Value> {
        self.get("account").await
    }

    /// Update account email and/or password.
    pub async fn update_account(
        &self,
        params: &UpdateAccountParams,
    ) -> ScResult<serde_json::Value> {
        let body = serde_json::to_value(params)?;
        self.put("account/update", &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_params_skip_unset() {
        let params = UpdateAccountParams {
            email: Some("user@example.com".into()),
            password: None,
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["email"], "user@example.com");
        assert!(json.get("password").is_none());
    }
}
