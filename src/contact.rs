//! Contact form state and its single outbound submission.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use gloo_net::http::Request;
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

pub const INTERESTS: &[&str] = &[
    "Web Development",
    "App Development",
    "UI/UX Design",
    "Graphic Design",
    "Consultancy",
];

pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again or email us directly.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionState {
    /// An outcome the visitor can clear back to a blank form.
    pub fn is_settled(self) -> bool {
        matches!(self, SubmissionState::Success | SubmissionState::Error)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Currency {
    #[default]
    Inr,
    Usd,
}

impl Currency {
    pub fn label(self) -> &'static str {
        match self {
            Currency::Inr => "₹ INR",
            Currency::Usd => "$ USD",
        }
    }

    pub fn budget_options(self) -> &'static [&'static str] {
        match self {
            Currency::Inr => &["₹10k - ₹20k", "₹20k - ₹30k", "₹30k - ₹50k", "₹50k+", "Undisclosed"],
            Currency::Usd => &["$500 - $1k", "$1k - $5k", "$5k - $10k", "$10k+", "Undisclosed"],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub interest: String,
    pub budget: String,
    pub message: String,
    currency: Currency,
}

impl Default for ContactForm {
    fn default() -> Self {
        let currency = Currency::default();
        Self {
            name: String::new(),
            email: String::new(),
            interest: INTERESTS[0].to_string(),
            budget: currency.budget_options()[0].to_string(),
            message: String::new(),
            currency,
        }
    }
}

impl ContactForm {
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Switching currency invalidates the chosen budget bracket.
    pub fn set_currency(&mut self, currency: Currency) {
        if currency != self.currency {
            self.currency = currency;
            self.budget = currency.budget_options()[0].to_string();
        }
    }

    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("interest", &self.interest),
            ("budget", &self.budget),
            ("message", &self.message),
        ]
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> String {
        self.fields()
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("the form was already sent, reset it first")]
    AlreadySent,
    #[error("form endpoint answered with status {status}")]
    Rejected { status: u16 },
    #[error("request failed: {0}")]
    Transport(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFlow {
    state: SubmissionState,
    form: ContactForm,
}

impl ContactFlow {
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Applies a field edit. Ignored while a request is in flight.
    pub fn edit(&mut self, apply: impl FnOnce(&mut ContactForm)) {
        if self.state != SubmissionState::Submitting {
            apply(&mut self.form);
        }
    }

    /// Moves to `Submitting` and returns the encoded body to send. Submitting
    /// again after a failure dismisses the error first; the fields are kept.
    pub fn begin_submit(&mut self) -> Result<String, SubmitError> {
        match self.state {
            SubmissionState::Submitting => Err(SubmitError::AlreadySubmitting),
            SubmissionState::Success => Err(SubmitError::AlreadySent),
            SubmissionState::Idle | SubmissionState::Error => {
                self.state = SubmissionState::Submitting;
                Ok(self.form.to_form_body())
            }
        }
    }

    pub fn finish(&mut self, outcome: Result<(), SubmitError>) -> SubmissionState {
        if self.state == SubmissionState::Submitting {
            match outcome {
                Ok(()) => {
                    self.state = SubmissionState::Success;
                    self.form = ContactForm::default();
                }
                Err(_) => self.state = SubmissionState::Error,
            }
        }
        self.state
    }

    /// "Send another": back to a blank form after either outcome.
    pub fn reset(&mut self) {
        if self.state.is_settled() {
            *self = Self::default();
        }
    }
}

/// Anything that accepts the encoded contact form.
#[allow(async_fn_in_trait)]
pub trait FormEndpoint {
    async fn post_form(&self, body: String) -> Result<(), SubmitError>;
}

#[derive(Deserialize)]
struct FormspreeReply {
    #[serde(default)]
    errors: Vec<FormspreeError>,
}

#[derive(Deserialize)]
struct FormspreeError {
    message: String,
}

pub struct Formspree {
    url: &'static str,
}

impl Formspree {
    pub fn new(url: &'static str) -> Self {
        Self { url }
    }
}

impl FormEndpoint for Formspree {
    async fn post_form(&self, body: String) -> Result<(), SubmitError> {
        let response = Request::post(self.url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        if let Ok(reply) = response.json::<FormspreeReply>().await {
            for error in reply.errors {
                warn!("Form endpoint rejected submission: {}", error.message);
            }
        }
        Err(SubmitError::Rejected { status })
    }
}

/// Starts a submission. The state moves to `Submitting` before this returns,
/// so a second call fails with [`SubmitError::AlreadySubmitting`] and no
/// second request is made. The returned future performs the request and
/// resolves to the final state.
pub fn submit<E>(
    flow: Rc<RefCell<ContactFlow>>,
    endpoint: E,
) -> Result<impl Future<Output = SubmissionState>, SubmitError>
where
    E: FormEndpoint + 'static,
{
    let body = flow.borrow_mut().begin_submit()?;
    Ok(async move {
        let outcome = endpoint.post_form(body).await;
        match &outcome {
            Ok(()) => info!("Contact form delivered"),
            Err(e) => warn!("Contact form failed: {}", e),
        }
        flow.borrow_mut().finish(outcome)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct FakeEndpoint {
        status: Option<u16>,
        calls: Rc<Cell<u32>>,
        bodies: Rc<RefCell<Vec<String>>>,
    }

    impl FakeEndpoint {
        fn answering(status: Option<u16>) -> Self {
            Self {
                status,
                calls: Rc::new(Cell::new(0)),
                bodies: Rc::new(RefCell::new(Vec::new())),
            }
        }
    }

    impl FormEndpoint for FakeEndpoint {
        async fn post_form(&self, body: String) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            self.bodies.borrow_mut().push(body);
            match self.status {
                Some(status) if (200..300).contains(&status) => Ok(()),
                Some(status) => Err(SubmitError::Rejected { status }),
                None => Err(SubmitError::Transport("connection reset".into())),
            }
        }
    }

    fn filled_flow() -> Rc<RefCell<ContactFlow>> {
        let flow = Rc::new(RefCell::new(ContactFlow::default()));
        flow.borrow_mut().edit(|form| {
            form.name = "Asha Rao".into();
            form.email = "asha@example.com".into();
            form.message = "New storefront".into();
        });
        flow
    }

    #[test]
    fn success_clears_the_form() {
        let flow = filled_flow();
        let endpoint = FakeEndpoint::answering(Some(200));
        let calls = endpoint.calls.clone();

        let pending = submit(flow.clone(), endpoint).unwrap();
        assert_eq!(flow.borrow().state(), SubmissionState::Submitting);

        assert_eq!(block_on(pending), SubmissionState::Success);
        assert_eq!(flow.borrow().form(), &ContactForm::default());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn server_error_keeps_the_fields() {
        let flow = filled_flow();
        let pending = submit(flow.clone(), FakeEndpoint::answering(Some(500))).unwrap();
        assert_eq!(flow.borrow().state(), SubmissionState::Submitting);

        assert_eq!(block_on(pending), SubmissionState::Error);
        let flow = flow.borrow();
        assert_eq!(flow.form().name, "Asha Rao");
        assert_eq!(flow.form().email, "asha@example.com");
        assert_eq!(flow.form().message, "New storefront");
    }

    #[test]
    fn transport_failure_is_an_error() {
        let flow = filled_flow();
        let pending = submit(flow.clone(), FakeEndpoint::answering(None)).unwrap();
        assert_eq!(block_on(pending), SubmissionState::Error);
        assert_eq!(flow.borrow().form().name, "Asha Rao");
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let flow = filled_flow();
        let first = FakeEndpoint::answering(Some(200));
        let second = FakeEndpoint::answering(Some(200));
        let second_calls = second.calls.clone();

        let pending = submit(flow.clone(), first).unwrap();
        let rejected = submit(flow.clone(), second);
        assert_eq!(rejected.err(), Some(SubmitError::AlreadySubmitting));

        block_on(pending);
        assert_eq!(second_calls.get(), 0);
    }

    #[test]
    fn request_body_is_form_encoded() {
        let flow = filled_flow();
        let endpoint = FakeEndpoint::answering(Some(201));
        let bodies = endpoint.bodies.clone();
        block_on(submit(flow, endpoint).unwrap());
        assert_eq!(
            bodies.borrow().as_slice(),
            ["name=Asha%20Rao&email=asha%40example.com&interest=Web%20Development\
              &budget=%E2%82%B910k%20-%20%E2%82%B920k&message=New%20storefront"]
        );
    }

    #[test]
    fn reset_returns_to_blank_idle() {
        let mut flow = ContactFlow::default();
        flow.edit(|form| form.name = "Ravi".into());
        flow.begin_submit().unwrap();
        flow.finish(Err(SubmitError::Rejected { status: 422 }));
        assert_eq!(flow.state(), SubmissionState::Error);

        flow.reset();
        assert_eq!(flow, ContactFlow::default());
    }

    #[test]
    fn failed_send_can_be_cleared_without_resending() {
        let flow = filled_flow();
        block_on(submit(flow.clone(), FakeEndpoint::answering(Some(503))).unwrap());

        let mut flow = flow.borrow_mut();
        assert!(flow.state().is_settled());
        flow.reset();
        assert_eq!(flow.state(), SubmissionState::Idle);
        assert_eq!(*flow.form(), ContactForm::default());
        assert!(!flow.state().is_settled());
    }

    #[test]
    fn only_outcomes_are_settled() {
        assert!(!SubmissionState::Idle.is_settled());
        assert!(!SubmissionState::Submitting.is_settled());
        assert!(SubmissionState::Success.is_settled());
        assert!(SubmissionState::Error.is_settled());
    }

    #[test]
    fn resubmitting_after_error_goes_through_submitting() {
        let mut flow = ContactFlow::default();
        flow.edit(|form| form.name = "Ravi".into());
        flow.begin_submit().unwrap();
        flow.finish(Err(SubmitError::Transport("offline".into())));

        assert!(flow.begin_submit().is_ok());
        assert_eq!(flow.state(), SubmissionState::Submitting);
        assert_eq!(flow.form().name, "Ravi");
    }

    #[test]
    fn success_must_be_reset_before_sending_again() {
        let mut flow = ContactFlow::default();
        flow.begin_submit().unwrap();
        flow.finish(Ok(()));
        assert_eq!(flow.begin_submit(), Err(SubmitError::AlreadySent));
        flow.reset();
        assert_eq!(flow.state(), SubmissionState::Idle);
    }

    #[test]
    fn outcomes_outside_submitting_are_ignored() {
        let mut flow = ContactFlow::default();
        assert_eq!(flow.finish(Ok(())), SubmissionState::Idle);
        flow.reset();
        assert_eq!(flow.state(), SubmissionState::Idle);
    }

    #[test]
    fn edits_are_frozen_while_submitting() {
        let mut flow = ContactFlow::default();
        flow.begin_submit().unwrap();
        flow.edit(|form| form.name = "late".into());
        assert_eq!(flow.form().name, "");
    }

    #[test]
    fn switching_currency_resets_budget() {
        let mut form = ContactForm::default();
        form.budget = "₹50k+".into();
        form.set_currency(Currency::Usd);
        assert_eq!(form.currency(), Currency::Usd);
        assert_eq!(form.budget, "$500 - $1k");

        form.budget = "$10k+".into();
        form.set_currency(Currency::Usd);
        assert_eq!(form.budget, "$10k+");
    }
}
