use thiserror::Error;

/// Everything that can go wrong between pressing "send" and getting a
/// usable reply back from the form endpoint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("could not build request: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("endpoint answered with status {0}")]
    Status(u16),
    #[error("reply was not valid JSON: {0}")]
    Decode(String),
    /// 2xx reply whose body says the submission was not accepted.
    #[error("endpoint rejected the submission: {0}")]
    Rejected(String),
}

impl SubmitError {
    /// The only thing the visitor ever sees, whatever the cause.
    pub fn user_message(&self) -> &'static str {
        "Something went wrong. Please try again or call us directly."
    }
}

impl From<gloo_net::Error> for SubmitError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => SubmitError::Decode(e.to_string()),
            other => SubmitError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_failure_shows_the_same_banner_text() {
        let errors = [
            SubmitError::Build("bad form".into()),
            SubmitError::Network("offline".into()),
            SubmitError::Status(500),
            SubmitError::Decode("expected value".into()),
            SubmitError::Rejected("This form needs Activation.".into()),
        ];
        for e in errors {
            assert_eq!(
                e.user_message(),
                "Something went wrong. Please try again or call us directly."
            );
        }
    }

    #[test]
    fn status_error_names_the_code() {
        assert_eq!(
            SubmitError::Status(422).to_string(),
            "endpoint answered with status 422"
        );
    }
}
