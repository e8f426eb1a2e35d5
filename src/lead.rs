//! Lead inputs and pre-pipeline validation.
//!
//! Two submission shapes exist: raw email and structured form. Both are
//! validated before any pipeline stage runs — required fields must be
//! non-empty and the email address must be syntactically plausible.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").unwrap())
}

/// A lead submitted as a raw email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailLead {
    /// Sender's email address.
    pub sender_email: String,
    /// Email subject line.
    pub subject: String,
    /// Email body.
    pub content: String,
}

impl EmailLead {
    /// Check required fields and email format. Runs before any stage.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("sender_email", &self.sender_email)?;
        require("subject", &self.subject)?;
        require("content", &self.content)?;
        check_email("sender_email", &self.sender_email)
    }
}

/// A lead submitted through a structured contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormLead {
    pub name: String,
    pub company: String,
    /// Job title — the one optional field.
    #[serde(default)]
    pub designation: Option<String>,
    pub email: String,
    /// The message/question the lead submitted.
    pub query: String,
}

impl FormLead {
    /// Check required fields and email format. Runs before any stage.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("company", &self.company)?;
        require("email", &self.email)?;
        require("query", &self.query)?;
        check_email("email", &self.email)
    }
}

fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn check_email(field: &str, value: &str) -> Result<(), ValidationError> {
    if !email_regex().is_match(value) {
        return Err(ValidationError::InvalidEmail {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_lead(sender: &str) -> EmailLead {
        EmailLead {
            sender_email: sender.into(),
            subject: "Pricing".into(),
            content: "We need enterprise pricing for 500 seats".into(),
        }
    }

    fn form_lead() -> FormLead {
        FormLead {
            name: "John Doe".into(),
            company: "Acme Corp".into(),
            designation: Some("VP of Engineering".into()),
            email: "john@acme.com".into(),
            query: "Looking for a demo next week".into(),
        }
    }

    #[test]
    fn valid_email_lead_passes() {
        assert!(email_lead("john@acme.com").validate().is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["plainaddress", "missing@tld", "@no-local.com", "two@@at.com", "a@b@c.com"] {
            let result = email_lead(bad).validate();
            assert!(
                matches!(
                    result,
                    Err(ValidationError::InvalidEmail { ref field, .. }) if field == "sender_email"
                ),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn rejects_empty_subject() {
        let mut lead = email_lead("john@acme.com");
        lead.subject = "   ".into();
        assert!(matches!(
            lead.validate(),
            Err(ValidationError::MissingField { field }) if field == "subject"
        ));
    }

    #[test]
    fn missing_fields_checked_before_email_format() {
        let mut lead = email_lead("not-an-email");
        lead.content = "".into();
        // content emptiness reported even though the address is also bad
        assert!(matches!(
            lead.validate(),
            Err(ValidationError::MissingField { field }) if field == "content"
        ));
    }

    #[test]
    fn valid_form_lead_passes() {
        assert!(form_lead().validate().is_ok());
    }

    #[test]
    fn form_designation_is_optional() {
        let mut lead = form_lead();
        lead.designation = None;
        assert!(lead.validate().is_ok());
    }

    #[test]
    fn form_rejects_missing_query() {
        let mut lead = form_lead();
        lead.query = "".into();
        assert!(matches!(
            lead.validate(),
            Err(ValidationError::MissingField { field }) if field == "query"
        ));
    }

    #[test]
    fn form_rejects_bad_email() {
        let mut lead = form_lead();
        lead.email = "john.acme.com".into();
        assert!(matches!(
            lead.validate(),
            Err(ValidationError::InvalidEmail { field, .. }) if field == "email"
        ));
    }
}
