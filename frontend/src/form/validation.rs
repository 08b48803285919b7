use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// The required inputs of the contact form, in the order they appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Business,
    ProjectType,
}

impl Field {
    /// The `id`/`name` attribute the markup uses for this input.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Business => "business",
            Field::ProjectType => "project-type",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    MissingField,
    InvalidFormat,
}

/// One failed rule, ready to be rendered next to its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invalid {
    pub field: Field,
    pub error: FieldError,
}

impl Invalid {
    pub fn message(&self) -> &'static str {
        match (self.field, self.error) {
            (Field::Name, _) => "Please enter your name",
            (Field::Email, FieldError::MissingField) => "Please enter your email",
            (Field::Email, FieldError::InvalidFormat) => "Please enter a valid email",
            (Field::Business, _) => "Please enter your business name",
            (Field::ProjectType, _) => "Please select a project type",
        }
    }
}

impl fmt::Display for Invalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Raw values as read from the form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub business: String,
    pub project_type: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Runs every rule and returns all failures, in field order. An empty
/// vector means the form may be sent.
pub fn validate(fields: &ContactFields) -> Vec<Invalid> {
    let mut errors = Vec::new();

    if fields.name.trim().is_empty() {
        errors.push(Invalid { field: Field::Name, error: FieldError::MissingField });
    }

    if fields.email.trim().is_empty() {
        errors.push(Invalid { field: Field::Email, error: FieldError::MissingField });
    } else if !is_valid_email(&fields.email) {
        errors.push(Invalid { field: Field::Email, error: FieldError::InvalidFormat });
    }

    if fields.business.trim().is_empty() {
        errors.push(Invalid { field: Field::Business, error: FieldError::MissingField });
    }

    // A <select> has no whitespace-only options, an empty value means "nothing picked".
    if fields.project_type.is_empty() {
        errors.push(Invalid { field: Field::ProjectType, error: FieldError::MissingField });
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    const IN_ORDER: [Field; 4] = [Field::Name, Field::Email, Field::Business, Field::ProjectType];

    fn valid() -> ContactFields {
        ContactFields {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            business: "Doe Plumbing".into(),
            project_type: "landing-page".into(),
        }
    }

    #[test]
    fn complete_form_has_no_errors() {
        assert!(validate(&valid()).is_empty());
    }

    #[test]
    fn each_empty_field_yields_exactly_one_error_for_that_field() {
        for field in IN_ORDER {
            let mut fields = valid();
            match field {
                Field::Name => fields.name.clear(),
                Field::Email => fields.email.clear(),
                Field::Business => fields.business.clear(),
                Field::ProjectType => fields.project_type.clear(),
            }
            let errors = validate(&fields);
            assert_eq!(
                errors,
                vec![Invalid { field, error: FieldError::MissingField }],
                "field {:?}",
                field
            );
        }
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut fields = valid();
        fields.name = "   ".into();
        fields.business = "\t\n".into();
        fields.email = "  ".into();
        let errors = validate(&fields);
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| e.error == FieldError::MissingField));
    }

    #[test]
    fn all_errors_are_collected_in_field_order() {
        let errors = validate(&ContactFields::default());
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, IN_ORDER.to_vec());
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("local@domain.tld"));
        assert!(is_valid_email("a.b+c@sub.domain.co.uk"));

        assert!(!is_valid_email("localdomain.tld"));
        assert!(!is_valid_email("local@domain"));
        assert!(!is_valid_email("local@.tld"));
        assert!(!is_valid_email("lo cal@domain.tld"));
        assert!(!is_valid_email("local@@domain.tld"));
        assert!(!is_valid_email("@domain.tld"));
    }

    #[test]
    fn malformed_email_is_invalid_format() {
        for bad in ["no-at-sign.com", "user@nodot", "user@domain."] {
            let mut fields = valid();
            fields.email = bad.into();
            assert_eq!(
                validate(&fields),
                vec![Invalid { field: Field::Email, error: FieldError::InvalidFormat }],
                "{bad}"
            );
        }
    }

    #[test]
    fn messages_match_the_field() {
        let missing = Invalid { field: Field::Email, error: FieldError::MissingField };
        let bad = Invalid { field: Field::Email, error: FieldError::InvalidFormat };
        assert_eq!(missing.to_string(), "Please enter your email");
        assert_eq!(bad.to_string(), "Please enter a valid email");
        assert_eq!(Field::ProjectType.id(), "project-type");
    }
}
