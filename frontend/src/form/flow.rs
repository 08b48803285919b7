use crate::error::SubmitError;
use crate::form::validation::{validate, ContactFields, Field, Invalid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Pending,
    Sent,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    /// Carries the text shown to the visitor.
    Error(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub id: u32,
    pub kind: BannerKind,
}

/// Handed out when a submit passes validation. The caller owns sending the
/// request and must feed the outcome back through [`FormFlow::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub attempt: u32,
}

/// What the caller has to do once a banner's timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expired {
    /// Clear the inputs and give the submit button back.
    ResetForm,
    RemoveOnly,
    /// The banner was already gone.
    Nothing,
}

/// State of one contact form: inline errors, the submit button and the
/// banners hanging under the form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormFlow {
    status: SubmitStatus,
    errors: Vec<Invalid>,
    banners: Vec<Banner>,
    attempts: u32,
    next_banner: u32,
}

impl Default for FormFlow {
    fn default() -> Self {
        Self {
            status: SubmitStatus::Idle,
            errors: Vec::new(),
            banners: Vec::new(),
            attempts: 0,
            next_banner: 0,
        }
    }
}

impl FormFlow {
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn error_for(&self, field: Field) -> Option<&Invalid> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    /// The button stays locked from the request going out until the
    /// success banner expires.
    pub fn button_disabled(&self) -> bool {
        matches!(self.status, SubmitStatus::Pending | SubmitStatus::Sent)
    }

    /// Handles a submit event. Returns a [`Submission`] only when the
    /// fields are valid and no request is already in flight.
    pub fn submit(&mut self, fields: &ContactFields) -> Option<Submission> {
        if self.button_disabled() {
            return None;
        }

        self.errors = validate(fields);
        if !self.errors.is_empty() {
            return None;
        }

        self.status = SubmitStatus::Pending;
        self.attempts += 1;
        Some(Submission { attempt: self.attempts })
    }

    /// Drops the inline error of a field whose value just changed. Returns
    /// whether anything was removed.
    pub fn field_edited(&mut self, field: Field) -> bool {
        let before = self.errors.len();
        self.errors.retain(|e| e.field != field);
        self.errors.len() != before
    }

    /// Records the outcome of the request and returns the banner that was
    /// appended. The caller schedules [`FormFlow::expire`] for it.
    pub fn resolve<T>(&mut self, outcome: &Result<T, SubmitError>) -> Banner {
        let kind = match outcome {
            Ok(_) => {
                self.status = SubmitStatus::Sent;
                BannerKind::Success
            }
            Err(e) => {
                self.status = SubmitStatus::Failed;
                BannerKind::Error(e.user_message())
            }
        };
        let banner = Banner { id: self.next_banner, kind };
        self.next_banner += 1;
        self.banners.push(banner);
        banner
    }

    pub fn expire(&mut self, banner_id: u32) -> Expired {
        let Some(pos) = self.banners.iter().position(|b| b.id == banner_id) else {
            return Expired::Nothing;
        };
        let banner = self.banners.remove(pos);
        match banner.kind {
            BannerKind::Success => {
                self.status = SubmitStatus::Idle;
                Expired::ResetForm
            }
            BannerKind::Error(_) => {
                if self.status == SubmitStatus::Failed {
                    self.status = SubmitStatus::Idle;
                }
                Expired::RemoveOnly
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validation::FieldError;

    fn valid() -> ContactFields {
        ContactFields {
            name: "Sam".into(),
            email: "sam@shop.com.au".into(),
            business: "Sam's Shop".into(),
            project_type: "ecommerce".into(),
        }
    }

    #[test]
    fn invalid_form_never_produces_a_submission() {
        let mut flow = FormFlow::default();
        let mut fields = valid();
        fields.business.clear();

        assert_eq!(flow.submit(&fields), None);
        assert_eq!(flow.attempts, 0);
        assert_eq!(flow.status(), SubmitStatus::Idle);
        assert_eq!(
            flow.errors,
            vec![Invalid { field: Field::Business, error: FieldError::MissingField }]
        );
    }

    #[test]
    fn valid_form_submits_once_and_locks_the_button() {
        let mut flow = FormFlow::default();
        assert_eq!(flow.submit(&valid()), Some(Submission { attempt: 1 }));
        assert!(flow.button_disabled());
        assert_eq!(flow.status(), SubmitStatus::Pending);

        // Second click while the request is in flight.
        assert_eq!(flow.submit(&valid()), None);
        assert_eq!(flow.attempts, 1);
    }

    #[test]
    fn resubmitting_clears_stale_errors() {
        let mut flow = FormFlow::default();
        flow.submit(&ContactFields::default());
        assert_eq!(flow.errors.len(), 4);

        assert!(flow.submit(&valid()).is_some());
        assert!(flow.errors.is_empty());
    }

    #[test]
    fn editing_a_field_removes_only_its_error_once() {
        let mut flow = FormFlow::default();
        flow.submit(&ContactFields::default());

        assert!(flow.field_edited(Field::Email));
        assert!(!flow.field_edited(Field::Email));
        assert!(flow.error_for(Field::Email).is_none());
        assert!(flow.error_for(Field::Name).is_some());
    }

    #[test]
    fn success_shows_banner_then_resets() {
        let mut flow = FormFlow::default();
        flow.submit(&valid());

        let banner = flow.resolve(&Ok::<(), SubmitError>(()));
        assert_eq!(banner.kind, BannerKind::Success);
        assert_eq!(flow.status(), SubmitStatus::Sent);
        assert!(flow.button_disabled());
        assert_eq!(flow.banners(), &[banner]);

        assert_eq!(flow.expire(banner.id), Expired::ResetForm);
        assert!(flow.banners().is_empty());
        assert!(!flow.button_disabled());
        assert_eq!(flow.status(), SubmitStatus::Idle);
    }

    #[test]
    fn failure_unlocks_immediately_and_banner_expires() {
        let mut flow = FormFlow::default();
        flow.submit(&valid());

        let banner = flow.resolve(&Err::<(), _>(SubmitError::Status(500)));
        assert_eq!(
            banner.kind,
            BannerKind::Error("Something went wrong. Please try again or call us directly.")
        );
        assert_eq!(flow.status(), SubmitStatus::Failed);
        assert!(!flow.button_disabled());

        // Form values are not touched on failure.
        assert_eq!(flow.expire(banner.id), Expired::RemoveOnly);
        assert!(flow.banners().is_empty());
    }

    #[test]
    fn failed_attempt_can_be_retried_by_hand() {
        let mut flow = FormFlow::default();
        flow.submit(&valid());
        let first = flow.resolve(&Err::<(), _>(SubmitError::Network("offline".into())));

        assert_eq!(flow.submit(&valid()), Some(Submission { attempt: 2 }));
        let second = flow.resolve(&Err::<(), _>(SubmitError::Network("offline".into())));
        assert_eq!(flow.banners().len(), 2);

        // Each banner goes away on its own timer.
        flow.expire(first.id);
        assert_eq!(flow.banners(), &[second]);
        assert_eq!(flow.expire(first.id), Expired::Nothing);
    }
}
