#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

//! Keeps bearer-token material out of process logs.
//!
//! Authentication token reviews are routinely logged while debugging, and a
//! serialized review carries the raw bearer token. The [`TokenRedactor`]
//! hooks into the logging backend and masks the token before any argument
//! reaches an output.

mod token_review;

pub use self::token_review::{
    redact_str, TokenReview, TokenReviewSpec, ENCODING_FAILURE_MASK, TOKEN_MASK,
    UNMARSHAL_FAILURE_MASK,
};

use serde_json::Value;
use std::borrow::Cow;

/// Hook contract invoked by the logging backend before a call is rendered.
///
/// The backend hands call arguments over as loosely typed values and must
/// always receive a complete argument set back.
pub trait LogFilter {
    /// Filters the arguments of an unformatted logging call.
    fn filter(&self, args: Vec<Value>) -> Vec<Value>;

    /// Filters the arguments of a format-string logging call.
    fn filter_format(&self, format: String, args: Vec<Value>) -> (String, Vec<Value>);

    /// Filters the message and key/value pairs of a structured logging call.
    fn filter_structured(&self, msg: String, keys_and_values: Vec<Value>) -> (String, Vec<Value>);
}

/// Masks bearer tokens in token-review-shaped log arguments.
///
/// Only string values are inspected; every other value passes through
/// untouched. All three entry points apply the same per-string routine,
/// [`redact_str`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TokenRedactor;

impl LogFilter for TokenRedactor {
    fn filter(&self, mut args: Vec<Value>) -> Vec<Value> {
        redact_values(&mut args);
        args
    }

    fn filter_format(&self, format: String, mut args: Vec<Value>) -> (String, Vec<Value>) {
        redact_values(&mut args);
        (format, args)
    }

    fn filter_structured(
        &self,
        msg: String,
        mut keys_and_values: Vec<Value>,
    ) -> (String, Vec<Value>) {
        redact_values(&mut keys_and_values);
        (msg, keys_and_values)
    }
}

fn redact_values(values: &mut [Value]) {
    for value in values {
        if let Value::String(s) = value {
            if let Cow::Owned(masked) = redact_str(s) {
                *s = masked;
            }
        }
    }
}
