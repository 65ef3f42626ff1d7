use serde::{Deserialize, Serialize};

/// A registered user identity. The password is echoed back on register and
/// login responses, so it travels with the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(alias = "account_id")]
    pub id: i64,
    pub username: String,
    pub password: String,
}

/// A short text post tied to the account that created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(alias = "message_id")]
    pub id: i64,
    #[serde(alias = "posted_by")]
    pub posted_by: i64,
    #[serde(alias = "message_text")]
    pub text: String,
    /// Milliseconds since the Unix epoch, as supplied by the poster.
    #[serde(alias = "time_posted_epoch")]
    pub posted_at_epoch: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_serializes_camel_case() {
        let message = Message {
            id: 1,
            posted_by: 1,
            text: "hello".to_string(),
            posted_at_epoch: 1000,
        };

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            json!({ "id": 1, "postedBy": 1, "text": "hello", "postedAtEpoch": 1000 })
        );
    }

    #[test]
    fn account_accepts_legacy_id_name() {
        let account: Account = serde_json::from_value(json!({
            "account_id": 7,
            "username": "bob",
            "password": "pass",
        }))
        .unwrap();
        assert_eq!(account.id, 7);
        assert_eq!(account.username, "bob");
    }
}
