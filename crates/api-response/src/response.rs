use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{ApiResponseError, ApiResponseResult};

/// Error reason reported before any payload or failure has been recorded.
pub const UNINITIALIZED_REASON: &str = "Not initialized";

const CHECK_BEFORE_READ: &str =
    "validate the response with is_successful before reading the payload";
const REASON_ON_SUCCESS: &str =
    "error_reason is only meaningful after is_successful returned false";

/// What the wrapped call produced: a payload, or the reason it failed.
///
/// A fresh response is a `Failure` with [`UNINITIALIZED_REASON`].
#[derive(Clone, Debug, PartialEq)]
enum Outcome<T> {
    Failure { reason: String },
    Success { payload: T },
}

/// Result carrier for a single API call.
///
/// Holds either a success payload or a failure reason, never both. The
/// payload accessors are gated: callers must invoke
/// [`is_successful`](ApiResponse::is_successful) before reading, or they get
/// [`ApiResponseError::InvalidUsage`] instead of data they never checked.
///
/// The gate is re-armed on every transition to failure. A transition to
/// success leaves it at its prior value, so a response that was already
/// checked stays readable after [`set_payload`](ApiResponse::set_payload).
///
/// One instance per in-flight call; the type is not meant to be shared
/// across threads without external synchronization.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse<T> {
    outcome: Outcome<T>,
    validated: bool,
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            outcome: Outcome::Failure {
                reason: UNINITIALIZED_REASON.to_string(),
            },
            validated: false,
        }
    }
}

impl<T> ApiResponse<T> {
    /// An uninitialized response: unsuccessful, with the sentinel reason.
    pub fn new() -> Self {
        Self::default()
    }

    /// A response already carrying a payload. The validation gate is still
    /// armed: callers must check before reading.
    pub fn success(payload: T) -> Self {
        let mut response = Self::new();
        response.set_payload(payload);
        response
    }

    /// A response already carrying a failure reason.
    pub fn failure(reason: impl Into<String>) -> Self {
        let mut response = Self::new();
        response.set_error_reason(reason);
        response
    }

    /// Store the payload. This marks the response as successful and drops
    /// any previously recorded error reason. The validation gate keeps its
    /// prior value.
    pub fn set_payload(&mut self, payload: T) {
        self.outcome = Outcome::Success { payload };
    }

    /// Whether the wrapped call succeeded.
    ///
    /// Calling this is the authorization gate for the payload accessors.
    pub fn is_successful(&mut self) -> bool {
        self.validated = true;
        matches!(self.outcome, Outcome::Success { .. })
    }

    /// Borrow the stored payload.
    ///
    /// Errors with `InvalidUsage` until [`is_successful`] has been called,
    /// and with `NullPayload` when the response holds no payload.
    ///
    /// [`is_successful`]: ApiResponse::is_successful
    pub fn payload(&self) -> ApiResponseResult<&T> {
        if !self.validated {
            return Err(ApiResponseError::InvalidUsage(CHECK_BEFORE_READ));
        }
        match &self.outcome {
            Outcome::Success { payload } => Ok(payload),
            Outcome::Failure { .. } => Err(ApiResponseError::NullPayload),
        }
    }

    /// Record why the wrapped call failed. Drops any stored payload and
    /// re-arms the validation gate.
    pub fn set_error_reason(&mut self, reason: impl Into<String>) {
        self.outcome = Outcome::Failure {
            reason: reason.into(),
        };
        self.validated = false;
    }

    /// The recorded failure reason.
    ///
    /// Errors with `InvalidUsage` while the response is successful; the
    /// reason only exists for failures.
    pub fn error_reason(&self) -> ApiResponseResult<&str> {
        match &self.outcome {
            Outcome::Failure { reason } => Ok(reason),
            Outcome::Success { .. } => Err(ApiResponseError::InvalidUsage(REASON_ON_SUCCESS)),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Re-encode the payload into the canonical generic object form.
    ///
    /// The returned [`Value`] is decoupled from `T`: structurally equal,
    /// type-erased. Same preconditions as [`payload`](ApiResponse::payload),
    /// plus `Serialization` when the payload cannot be encoded (non-string
    /// map keys, failing `Serialize` impls).
    pub fn payload_object(&self) -> ApiResponseResult<Value> {
        let payload = self.payload()?;
        Ok(serde_json::to_value(payload)?)
    }

    /// Decode the canonical form into a caller-chosen type.
    pub fn payload_as<U: DeserializeOwned>(&self) -> ApiResponseResult<U> {
        Ok(serde_json::from_value(self.payload_object()?)?)
    }
}
