//! Form state, validation, and submission flow for company profile intake.

pub mod controller;
pub mod submit;
pub mod validate;

pub use controller::{
    FormCommand, FormController, ListField, ListKind, ScalarField, SocialPlatform,
};
pub use submit::{
    AuthTokens, Navigator, Notifier, SubmitFlow, SubmitOutcome, SubmitState, HOME_ROUTE,
    LOGIN_ROUTE,
};
pub use validate::{validate, ValidationError};
