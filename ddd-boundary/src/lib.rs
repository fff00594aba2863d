use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// Request body of a WhatsApp community sign-up.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct SignupRequest {
    pub name       : String,
    pub phone      : String,
    /// Conference ID
    pub conference : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct FieldError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Payload of a rejected submission.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct SubmissionErrorResponse {
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

impl SubmissionErrorResponse {
    /// The first non-blank error message.
    pub fn first_message(&self) -> Option<&str> {
        self.errors
            .iter()
            .map(|e| e.message.trim())
            .find(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_signup_request() {
        let req = SignupRequest {
            name: "Ada Lovelace".into(),
            phone: "+44 7700 900123".into(),
            conference: "ddd-north".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada Lovelace",
                "phone": "+44 7700 900123",
                "conference": "ddd-north"
            })
        );
    }

    #[test]
    fn read_first_error_message() {
        let res: SubmissionErrorResponse = serde_json::from_str(
            r#"{"error":"Validation errors","errors":[{"code":"TYPE_PHONE","field":"phone","message":"should be a phone number"},{"message":"other"}]}"#,
        )
        .unwrap();
        assert_eq!(res.errors.len(), 2);
        assert_eq!(res.errors[0].field.as_deref(), Some("phone"));
        assert_eq!(res.first_message(), Some("should be a phone number"));
    }

    #[test]
    fn tolerate_missing_errors() {
        let res: SubmissionErrorResponse = serde_json::from_str(r#"{"error":"Oops"}"#).unwrap();
        assert_eq!(res.first_message(), None);
        let res: SubmissionErrorResponse =
            serde_json::from_str(r#"{"errors":[{"message":"  "}]}"#).unwrap();
        assert_eq!(res.first_message(), None);
    }
}
