//! WhatsApp community sign-up.
//!
//! The form owns its status explicitly. A submission starts with
//! [`Signup::begin_submit`], which hands out at most one [`Registration`]
//! to send, and ends with [`Signup::finish_submit`].

use thiserror::Error;

use ddd_entities::{id::Id, registration::Registration};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub phone: String,
    pub conference: Option<Id>,
}

impl SignupForm {
    /// All fields are filled in.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.phone.trim().is_empty()
            && self.conference.as_ref().is_some_and(Id::is_valid)
    }

    pub fn to_registration(&self) -> Option<Registration> {
        if !self.is_complete() {
            return None;
        }
        let conference = self.conference.clone()?;
        Some(Registration {
            name: self.name.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            conference,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A short message shown to the user after an attempt to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    fn success(title: &str, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.to_owned(),
            description: description.into(),
        }
    }

    fn error(title: &str, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.to_owned(),
            description: description.into(),
        }
    }

    pub fn missing_information() -> Self {
        Self::error(
            "Missing Information",
            "Please fill in all fields before submitting.",
        )
    }

    pub fn registered(conference_name: Option<&str>) -> Self {
        let description = match conference_name {
            Some(name) => format!("We'll add you to the {name} WhatsApp community soon."),
            None => "We'll add you to the WhatsApp community soon.".to_owned(),
        };
        Self::success("Successfully Registered!", description)
    }

    pub fn rejected(message: Option<&str>) -> Self {
        let description = message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or("Something went wrong. Please try again.");
        Self::error("Submission Failed", description)
    }

    pub fn network_error() -> Self {
        Self::error(
            "Network Error",
            "Unable to submit right now. Please check your connection and try again.",
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed(Notice),
}

/// Why the form endpoint did not accept a registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitFailure {
    /// The endpoint answered with a non-success status.
    Rejected { message: Option<String> },
    /// No response arrived.
    Network,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Not all fields are filled in")]
    Incomplete,
    #[error("A submission is already in progress")]
    Busy,
    #[error("The registration has already been submitted")]
    AlreadySubmitted,
}

#[derive(Debug, Clone, Default)]
pub struct Signup {
    pub form: SignupForm,
    status: SubmissionStatus,
}

impl Signup {
    pub const fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub const fn is_submitting(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitting)
    }

    pub const fn is_submitted(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitted)
    }

    /// Validate the form and switch to [`SubmissionStatus::Submitting`].
    ///
    /// Returns the registration that must be sent exactly once.
    pub fn begin_submit(&mut self) -> Result<Registration, Error> {
        match self.status {
            SubmissionStatus::Submitting => return Err(Error::Busy),
            SubmissionStatus::Submitted => return Err(Error::AlreadySubmitted),
            SubmissionStatus::Idle | SubmissionStatus::Failed(_) => {}
        }
        let Some(registration) = self.form.to_registration() else {
            log::debug!("Incomplete sign-up form");
            self.status = SubmissionStatus::Failed(Notice::missing_information());
            return Err(Error::Incomplete);
        };
        self.status = SubmissionStatus::Submitting;
        Ok(registration)
    }

    /// Record the outcome of the request started by [`Signup::begin_submit`].
    ///
    /// Returns `None` if no submission is in progress.
    pub fn finish_submit(
        &mut self,
        result: Result<(), SubmitFailure>,
        conference_name: Option<&str>,
    ) -> Option<Notice> {
        if !self.is_submitting() {
            log::warn!("Ignoring submission result: no submission in progress");
            return None;
        }
        let notice = match result {
            Ok(()) => {
                self.status = SubmissionStatus::Submitted;
                Notice::registered(conference_name)
            }
            Err(SubmitFailure::Rejected { message }) => {
                log::warn!("Registration rejected: {message:?}");
                let notice = Notice::rejected(message.as_deref());
                self.status = SubmissionStatus::Failed(notice.clone());
                notice
            }
            Err(SubmitFailure::Network) => {
                log::warn!("Unable to reach the form endpoint");
                let notice = Notice::network_error();
                self.status = SubmissionStatus::Failed(notice.clone());
                notice
            }
        };
        Some(notice)
    }

    /// Clear all fields to register for another conference.
    pub fn reset(&mut self) {
        self.form = SignupForm::default();
        self.status = SubmissionStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Signup {
        Signup {
            form: SignupForm {
                name: " Ada Lovelace ".into(),
                phone: "+44 7700 900123".into(),
                conference: Some("ddd-north".into()),
            },
            ..Default::default()
        }
    }

    /// Drive a submission like the UI does and count outbound requests.
    fn submit(signup: &mut Signup, requests: &mut Vec<Registration>) -> Result<(), Error> {
        let registration = signup.begin_submit()?;
        requests.push(registration);
        Ok(())
    }

    #[test]
    fn incomplete_form_sends_nothing() {
        let mut requests = vec![];
        for form in [
            SignupForm::default(),
            SignupForm {
                name: "Ada".into(),
                phone: "   ".into(),
                conference: Some("ddd-north".into()),
            },
            SignupForm {
                name: "Ada".into(),
                phone: "0123".into(),
                conference: None,
            },
        ] {
            let mut signup = Signup {
                form,
                ..Default::default()
            };
            assert_eq!(submit(&mut signup, &mut requests), Err(Error::Incomplete));
            assert_eq!(
                signup.status(),
                &SubmissionStatus::Failed(Notice::missing_information())
            );
        }
        assert!(requests.is_empty());
    }

    #[test]
    fn trim_registration_fields() {
        let registration = filled().begin_submit().unwrap();
        assert_eq!(registration.name, "Ada Lovelace");
        assert_eq!(registration.phone, "+44 7700 900123");
        assert_eq!(registration.conference.as_str(), "ddd-north");
    }

    #[test]
    fn one_request_per_submission() {
        let mut requests = vec![];
        let mut signup = filled();
        submit(&mut signup, &mut requests).unwrap();
        assert!(signup.is_submitting());
        assert_eq!(submit(&mut signup, &mut requests), Err(Error::Busy));
        assert_eq!(requests.len(), 1);
    }

    #[test]
    fn success() {
        let mut signup = filled();
        signup.begin_submit().unwrap();
        let notice = signup.finish_submit(Ok(()), Some("DDD North")).unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.title, "Successfully Registered!");
        assert_eq!(
            notice.description,
            "We'll add you to the DDD North WhatsApp community soon."
        );
        assert!(signup.is_submitted());
        assert_eq!(signup.begin_submit(), Err(Error::AlreadySubmitted));
    }

    #[test]
    fn rejection_keeps_the_fields() {
        let mut signup = filled();
        let before = signup.form.clone();
        signup.begin_submit().unwrap();
        let notice = signup
            .finish_submit(
                Err(SubmitFailure::Rejected {
                    message: Some("Invalid phone number".into()),
                }),
                Some("DDD North"),
            )
            .unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "Submission Failed");
        assert_eq!(notice.description, "Invalid phone number");
        assert_eq!(signup.form, before);
        assert!(!signup.is_submitting());
    }

    #[test]
    fn rejection_without_message() {
        let mut signup = filled();
        signup.begin_submit().unwrap();
        let notice = signup
            .finish_submit(Err(SubmitFailure::Rejected { message: None }), None)
            .unwrap();
        assert_eq!(notice.description, "Something went wrong. Please try again.");
    }

    #[test]
    fn retry_after_network_error() {
        let mut requests = vec![];
        let mut signup = filled();
        submit(&mut signup, &mut requests).unwrap();
        let notice = signup
            .finish_submit(Err(SubmitFailure::Network), None)
            .unwrap();
        assert_eq!(notice.title, "Network Error");
        assert_eq!(
            notice.description,
            "Unable to submit right now. Please check your connection and try again."
        );
        submit(&mut signup, &mut requests).unwrap();
        assert_eq!(requests.len(), 2);
    }

    #[test]
    fn ignore_results_without_submission() {
        let mut signup = filled();
        assert_eq!(signup.finish_submit(Ok(()), None), None);
        assert_eq!(signup.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn reset_clears_the_form() {
        let mut signup = filled();
        signup.begin_submit().unwrap();
        signup.finish_submit(Ok(()), None);
        signup.reset();
        assert_eq!(signup.form, SignupForm::default());
        assert_eq!(signup.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn success_without_conference_name() {
        assert_eq!(
            Notice::registered(None).description,
            "We'll add you to the WhatsApp community soon."
        );
    }
}
