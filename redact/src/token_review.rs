use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Substring identifying a serialized token review payload.
const TOKEN_REVIEW_MARKER: &str = r#""kind":"TokenReview""#;

/// Replaces a bearer token in a redacted payload.
pub const TOKEN_MASK: &str = "<masked>";

/// Replaces an entire payload that carried the marker but failed to decode.
pub const UNMARSHAL_FAILURE_MASK: &str = "<log content masked due to unmarshal failure>";

/// Replaces a payload that failed to re-encode after masking.
pub const ENCODING_FAILURE_MASK: &str = "<log content masked due to encoding failure>";

/// The slice of a token review payload that redaction understands.
///
/// Everything not modeled here is carried through the flattened remainder,
/// so a redacted payload keeps all of its fields except the token value.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct TokenReview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<TokenReviewSpec>,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct TokenReviewSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// Masks bearer-token material in a string that looks like a serialized
/// token review.
///
/// Strings without the marker are returned borrowed and unchanged. Strings
/// with the marker that cannot be decoded, or that cannot be re-encoded
/// after masking, are replaced entirely: content resembling a token review
/// never passes through unparsed.
pub fn redact_str(value: &str) -> Cow<'_, str> {
    if !value.contains(TOKEN_REVIEW_MARKER) {
        return Cow::Borrowed(value);
    }

    let mut review = match serde_json::from_str::<TokenReview>(value) {
        Ok(review) => review,
        Err(_) => return Cow::Owned(UNMARSHAL_FAILURE_MASK.to_string()),
    };
    review.mask_token();

    match serde_json::to_string(&review) {
        Ok(redacted) => Cow::Owned(redacted),
        Err(_) => Cow::Owned(ENCODING_FAILURE_MASK.to_string()),
    }
}

// === impl TokenReview ===

impl TokenReview {
    /// Overwrites a non-empty token with the fixed mask.
    fn mask_token(&mut self) {
        if let Some(token) = self.spec.as_mut().and_then(|spec| spec.token.as_mut()) {
            if !token.is_empty() {
                *token = TOKEN_MASK.to_string();
            }
        }
    }
}
