//! Uniform JSON response envelope.
//!
//! Every route answers with `{ isSuccess, code, message, result? }`. Success
//! responses carry `code = 200`; failures carry the HTTP status of the
//! response.
//!
//! ```text
//! {"isSuccess":true,"code":200,"message":"sign-in succeeded","result":{"jwt":"..."}}
//! {"isSuccess":false,"code":410,"message":"userID already exists","result":{"field":"userID"}}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response envelope wrapping an optional `result` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// `true` only for successful responses.
    pub is_success: bool,
    /// Outcome code; equals the HTTP status.
    pub code: u16,
    /// Human-readable outcome message.
    pub message: String,
    /// Payload for successes, structured details for some failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

/// Envelope code for successful responses.
pub const SUCCESS_CODE: u16 = 200;

impl<T> Envelope<T> {
    /// Successful envelope carrying `result`.
    ///
    /// # Examples
    /// ```
    /// use matjip::inbound::http::envelope::Envelope;
    ///
    /// let envelope = Envelope::success("ok", 5);
    /// assert!(envelope.is_success);
    /// assert_eq!(envelope.code, 200);
    /// ```
    pub fn success(message: impl Into<String>, result: T) -> Self {
        Self {
            is_success: true,
            code: SUCCESS_CODE,
            message: message.into(),
            result: Some(result),
        }
    }
}

impl Envelope<Value> {
    /// Failure envelope with an optional details payload.
    pub fn failure(code: u16, message: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            is_success: false,
            code,
            message: message.into(),
            result: details,
        }
    }
}
