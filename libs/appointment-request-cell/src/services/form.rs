use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use crate::models::{
    AppointmentDraft, FormSnapshot, Notification, SubmitOutcome, ValidationErrors,
};
use crate::services::{validate_draft, AppointmentSubmitter, NotificationCenter};

/// Asks the owner of the dialog to close it.
pub type CloseCallback = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Default)]
struct FormState {
    draft: AppointmentDraft,
    errors: ValidationErrors,
    /// Bumped every time the dialog session ends (reset, close, success).
    session: u64,
    /// Session that owns the in-flight submission, if any.
    in_flight: Option<u64>,
}

impl FormState {
    fn is_submitting(&self) -> bool {
        self.in_flight == Some(self.session)
    }

    fn start_new_session(&mut self) {
        self.draft = AppointmentDraft::default();
        self.errors = ValidationErrors::new();
        self.session += 1;
    }
}

/// Drives the appointment dialog: holds the draft, validates on submit and
/// performs one submission attempt through the configured submitter.
#[derive(Clone)]
pub struct AppointmentFormController {
    state: Arc<RwLock<FormState>>,
    submitter: Arc<dyn AppointmentSubmitter>,
    notifications: NotificationCenter,
    on_close: CloseCallback,
}

impl AppointmentFormController {
    pub fn new(
        submitter: Arc<dyn AppointmentSubmitter>,
        notifications: NotificationCenter,
        on_close: CloseCallback,
    ) -> Self {
        Self {
            state: Arc::new(RwLock::new(FormState::default())),
            submitter,
            notifications,
            on_close,
        }
    }

    pub async fn draft(&self) -> AppointmentDraft {
        self.state.read().await.draft.clone()
    }

    pub async fn errors(&self) -> ValidationErrors {
        self.state.read().await.errors.clone()
    }

    pub async fn is_submitting(&self) -> bool {
        self.state.read().await.is_submitting()
    }

    pub async fn snapshot(&self) -> FormSnapshot {
        let state = self.state.read().await;
        FormSnapshot {
            draft: state.draft.clone(),
            errors: state.errors.clone(),
            is_submitting: state.is_submitting(),
        }
    }

    pub async fn edit<F>(&self, apply: F)
    where
        F: FnOnce(&mut AppointmentDraft),
    {
        let mut state = self.state.write().await;
        apply(&mut state.draft);
    }

    /// Discards the draft and starts a fresh dialog session.
    pub async fn reset(&self) {
        self.state.write().await.start_new_session();
    }

    /// Visitor dismissed the dialog. Any in-flight submission keeps running
    /// but no longer owns the dialog.
    pub async fn close(&self) {
        {
            let mut state = self.state.write().await;
            if state.is_submitting() {
                warn!("Dialog closed while a submission is in flight");
            }
            state.start_new_session();
        }
        (self.on_close)();
    }

    pub async fn submit(&self) -> SubmitOutcome {
        self.submit_on(Local::now().date_naive()).await
    }

    #[instrument(skip(self))]
    pub async fn submit_on(&self, today: NaiveDate) -> SubmitOutcome {
        let (request, session) = {
            let mut state = self.state.write().await;
            if state.is_submitting() {
                return SubmitOutcome::AlreadySubmitting;
            }

            match validate_draft(&state.draft, today) {
                Ok(request) => {
                    state.errors = ValidationErrors::new();
                    state.in_flight = Some(state.session);
                    (request, state.session)
                }
                Err(errors) => {
                    state.errors = errors.clone();
                    return SubmitOutcome::Invalid(errors);
                }
            }
        };

        info!(
            "Submitting appointment request for {} ({} severity)",
            request.appointment_date, request.severity
        );
        let result = self.submitter.submit(&request).await;

        let still_open = {
            let mut state = self.state.write().await;
            if state.in_flight == Some(session) {
                state.in_flight = None;
            }

            let still_open = state.session == session;
            if !still_open {
                warn!("Submission finished after its dialog session ended");
            } else if result.is_ok() {
                state.start_new_session();
            }
            still_open
        };

        match result {
            Ok(receipt) => {
                self.notifications.publish(Notification::booking_confirmed());
                if still_open {
                    (self.on_close)();
                }
                SubmitOutcome::Submitted(receipt)
            }
            Err(e) => {
                error!("Appointment submission failed: {}", e);
                self.notifications.publish(Notification::booking_failed(&e));
                SubmitOutcome::Failed(e)
            }
        }
    }
}
