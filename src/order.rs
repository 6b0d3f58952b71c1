//! Order form and its one network call.
//!
//! The form is posted to a third-party form relay. The call is fire-and-forget:
//! no retries, and any failure collapses to a single apology for the visitor.

use serde::Deserialize;
use tracing::{info, warn};

pub const SUCCESS_MESSAGE: &str = "Successfully! آپ کا آرڈر سبمٹ ہو گیا ہے.";
pub const FAILURE_MESSAGE: &str = "Sorry, there was a problem submitting your order.";
pub const REDIRECT_SUCCESS_MESSAGE: &str = "Your order has been received! Thank you!";
pub const SUCCESS_HASH: &str = "#form-success";

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("missing required field: {0}")]
    Validation(&'static str),
    #[error("form relay rejected the order ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
}

impl OrderError {
    /// Every failure reads the same to the visitor.
    pub fn user_message(&self) -> &'static str {
        FAILURE_MESSAGE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub details: String,
    /// Set by an "Order Now" button; shown above the form.
    pub food: Option<String>,
}

impl OrderForm {
    pub fn for_food(food: impl Into<String>) -> Self {
        Self {
            food: Some(food.into()),
            ..Self::default()
        }
    }

    pub fn ordering_label(&self) -> Option<String> {
        self.food.as_ref().map(|f| format!("Ordering: {f}"))
    }

    pub fn validate(&self) -> Result<(), OrderError> {
        if self.name.trim().is_empty() {
            return Err(OrderError::Validation("name"));
        }
        if self.email.trim().is_empty() {
            return Err(OrderError::Validation("email"));
        }
        Ok(())
    }

    /// Field name/value pairs in the order the relay receives them.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("details", self.details.clone()),
        ];
        if let Some(food) = &self.food {
            out.push(("food", food.clone()));
        }
        out
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Turn the relay's HTTP status and body into an outcome.
pub fn interpret_response(status: u16, body: &str) -> Result<(), OrderError> {
    if (200..300).contains(&status) {
        info!(status, "order submitted");
        return Ok(());
    }
    let message = serde_json::from_str::<RelayErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| "Submission failed.".to_string());
    warn!(status, %message, "order rejected");
    Err(OrderError::Rejected { status, message })
}

/// The relay can also redirect back with a hash instead of answering JSON.
pub fn is_success_hash(hash: &str) -> bool {
    hash == SUCCESS_HASH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_names_the_food() {
        let form = OrderForm::for_food("Pizza Mania");
        assert_eq!(form.ordering_label().as_deref(), Some("Ordering: Pizza Mania"));
        assert_eq!(OrderForm::default().ordering_label(), None);
    }

    #[test]
    fn name_and_email_are_required() {
        let mut form = OrderForm::for_food("Fries Fiesta");
        assert!(matches!(form.validate(), Err(OrderError::Validation("name"))));
        form.name = "Sara".into();
        assert!(matches!(form.validate(), Err(OrderError::Validation("email"))));
        form.email = "sara@example.com".into();
        assert!(form.validate().is_ok());
        assert_eq!(form.fields().last().unwrap(), &("food", "Fries Fiesta".to_string()));
    }

    #[test]
    fn relay_error_body_is_surfaced_in_the_error() {
        let err = interpret_response(422, r#"{"error":"Email invalid"}"#).unwrap_err();
        match &err {
            OrderError::Rejected { status, message } => {
                assert_eq!(*status, 422);
                assert_eq!(message, "Email invalid");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(err.user_message(), FAILURE_MESSAGE);
    }

    #[test]
    fn non_json_failure_gets_a_generic_reason() {
        let err = interpret_response(500, "<html>").unwrap_err();
        assert!(err.to_string().contains("Submission failed."));
        assert!(interpret_response(200, "").is_ok());
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = OrderForm::for_food("Taco Treat");
        form.name = "Ali".into();
        form.reset();
        assert_eq!(form, OrderForm::default());
        assert!(is_success_hash("#form-success"));
        assert!(!is_success_hash("#menu"));
    }
}
