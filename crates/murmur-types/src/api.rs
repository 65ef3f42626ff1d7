use serde::Deserialize;

// -- Accounts --

/// Body of `POST /register`. Ids sent by older clients are ignored.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// -- Messages --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMessageRequest {
    #[serde(alias = "posted_by")]
    pub posted_by: i64,
    #[serde(alias = "message_text")]
    pub text: String,
    /// Older clients may leave this out; it then reads as 0.
    #[serde(alias = "time_posted_epoch", default)]
    pub posted_at_epoch: i64,
}

/// Body of `PATCH /messages/{message_id}`. Only the text is mutable.
#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    #[serde(alias = "message_text")]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_request_accepts_both_spellings() {
        let camel: PostMessageRequest =
            serde_json::from_str(r#"{"postedBy":1,"text":"hi","postedAtEpoch":5}"#).unwrap();
        let snake: PostMessageRequest = serde_json::from_str(
            r#"{"posted_by":1,"message_text":"hi","time_posted_epoch":5}"#,
        )
        .unwrap();

        assert_eq!(camel.posted_by, snake.posted_by);
        assert_eq!(camel.text, snake.text);
        assert_eq!(camel.posted_at_epoch, snake.posted_at_epoch);
    }

    #[test]
    fn post_request_defaults_missing_timestamp() {
        let req: PostMessageRequest =
            serde_json::from_str(r#"{"postedBy":1,"text":"hi"}"#).unwrap();
        assert_eq!(req.posted_at_epoch, 0);
    }

    #[test]
    fn update_request_requires_text() {
        assert!(serde_json::from_str::<UpdateMessageRequest>("{}").is_err());
    }
}
