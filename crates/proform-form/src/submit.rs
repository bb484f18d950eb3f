//! Submission flow: validate, check authentication, post to the backend.
//!
//! The flow owns no UI. Navigation, notifications, and the authentication
//! store are injected as traits so the whole flow runs under test against a
//! wiremock backend and recording fakes.

use std::time::Duration;

use proform_api::{ApiError, CompanyClient};
use proform_core::profile::CompanyProfile;

use crate::validate::{validate, ValidationError};

/// Route for the login hand-off.
pub const LOGIN_ROUTE: &str = "/login";
/// Route navigated to after a successful submission.
pub const HOME_ROUTE: &str = "/";

const SUCCESS_MESSAGE: &str = "Company profile created successfully!";
const GENERIC_FAILURE_MESSAGE: &str = "Error creating company profile";

/// Redirect handler. `to_login` receives the in-progress draft as hand-off
/// context so nothing typed is lost across the login round trip.
pub trait Navigator {
    fn to_login(&self, draft: &CompanyProfile);
    fn to_home(&self);
}

/// Transient user-facing messages.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// The authentication store; `None` means the user must log in first.
pub trait AuthTokens {
    fn bearer_token(&self) -> Option<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Editing,
    Validating,
    Unauthenticated,
    Submitting,
    Succeeded,
    Failed,
}

/// What a call to [`SubmitFlow::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the message was surfaced via the notifier.
    Invalid(ValidationError),
    /// No auth token; the draft was handed to the login view. No network call.
    RedirectedToLogin,
    /// The backend accepted the profile.
    Created,
    /// The backend rejected the profile or the request failed; the form is
    /// back in the editing state with its input preserved.
    Failed,
    /// A submission was already in flight; nothing was done.
    InFlight,
}

/// Drives one profile submission end to end.
pub struct SubmitFlow<'a> {
    client: &'a CompanyClient,
    auth: &'a dyn AuthTokens,
    navigator: &'a dyn Navigator,
    notifier: &'a dyn Notifier,
    redirect_delay: Duration,
    state: SubmitState,
}

impl<'a> SubmitFlow<'a> {
    pub fn new(
        client: &'a CompanyClient,
        auth: &'a dyn AuthTokens,
        navigator: &'a dyn Navigator,
        notifier: &'a dyn Notifier,
        redirect_delay: Duration,
    ) -> Self {
        Self {
            client,
            auth,
            navigator,
            notifier,
            redirect_delay,
            state: SubmitState::Editing,
        }
    }

    #[must_use]
    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Runs the submission state machine for `profile`.
    ///
    /// Re-entry while a request is in flight is a guarded no-op, so a
    /// double-triggered submit cannot fire two requests.
    pub async fn submit(&mut self, profile: &CompanyProfile) -> SubmitOutcome {
        if self.state == SubmitState::Submitting {
            tracing::debug!("submission already in flight, ignoring re-entry");
            return SubmitOutcome::InFlight;
        }

        self.state = SubmitState::Validating;
        if let Err(violation) = validate(profile) {
            self.notifier.error(&violation.to_string());
            self.state = SubmitState::Editing;
            return SubmitOutcome::Invalid(violation);
        }

        let Some(token) = self.auth.bearer_token() else {
            self.state = SubmitState::Unauthenticated;
            tracing::info!("no auth token, handing draft to login");
            self.navigator.to_login(profile);
            return SubmitOutcome::RedirectedToLogin;
        };

        self.state = SubmitState::Submitting;
        match self.client.create_company(profile, &token).await {
            Ok(()) => {
                self.state = SubmitState::Succeeded;
                tracing::info!(company = %profile.company_name, "company profile created");
                self.notifier.success(SUCCESS_MESSAGE);
                tokio::time::sleep(self.redirect_delay).await;
                self.navigator.to_home();
                SubmitOutcome::Created
            }
            Err(err) => {
                self.state = SubmitState::Failed;
                let message = match &err {
                    ApiError::Rejected {
                        message: Some(server_message),
                        ..
                    } => server_message.clone(),
                    _ => GENERIC_FAILURE_MESSAGE.to_string(),
                };
                tracing::warn!(error = %err, "company profile submission failed");
                self.notifier.error(&message);
                // Input is preserved; the user may correct and resubmit.
                self.state = SubmitState::Editing;
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullNavigator;
    impl Navigator for NullNavigator {
        fn to_login(&self, _draft: &CompanyProfile) {}
        fn to_home(&self) {}
    }

    struct NullNotifier;
    impl Notifier for NullNotifier {
        fn success(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
    }

    struct NoTokens;
    impl AuthTokens for NoTokens {
        fn bearer_token(&self) -> Option<String> {
            None
        }
    }

    #[tokio::test]
    async fn reentry_while_submitting_is_guarded() {
        let client = CompanyClient::new("http://localhost:5000", 30).expect("client");
        let mut flow = SubmitFlow::new(
            &client,
            &NoTokens,
            &NullNavigator,
            &NullNotifier,
            Duration::ZERO,
        );
        flow.state = SubmitState::Submitting;

        let outcome = flow.submit(&CompanyProfile::default()).await;

        assert_eq!(outcome, SubmitOutcome::InFlight);
        assert_eq!(flow.state(), SubmitState::Submitting);
    }

    #[test]
    fn routes_are_stable() {
        assert_eq!(LOGIN_ROUTE, "/login");
        assert_eq!(HOME_ROUTE, "/");
    }
}
