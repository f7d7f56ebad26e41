use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::time::Instant;

use appointment_request_cell::*;

struct OfflineSubmitter;

#[async_trait]
impl AppointmentSubmitter for OfflineSubmitter {
    async fn submit(&self, _request: &AppointmentRequest) -> Result<SubmissionReceipt, SubmissionError> {
        tokio::time::sleep(Duration::from_millis(200)).await;
        Err(SubmissionError::NetworkUnavailable("connection refused".to_string()))
    }
}

struct Harness {
    form: AppointmentFormController,
    closes: Arc<AtomicUsize>,
    toasts: NotificationReceiver,
}

fn harness(submitter: Arc<dyn AppointmentSubmitter>) -> Harness {
    let closes = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&closes);
    let notifications = NotificationCenter::new();
    let toasts = notifications.subscribe();

    let form = AppointmentFormController::new(
        submitter,
        notifications,
        Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );

    Harness { form, closes, toasts }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

async fn fill_valid(form: &AppointmentFormController) {
    form.edit(|draft| {
        draft.patient_name = "Seán Murphy".to_string();
        draft.phone_number = "0861112233".to_string();
        draft.symptoms = "Chest tightness when climbing stairs".to_string();
        draft.severity = Some("high".to_string());
        draft.appointment_date = today().succ_opt();
    })
    .await;
}

async fn wait_until_busy(form: &AppointmentFormController) {
    for _ in 0..100 {
        if form.is_submitting().await {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("form never entered the submitting state");
}

#[tokio::test(start_paused = true)]
async fn test_valid_submission_closes_dialog_and_clears_draft() {
    let mut h = harness(Arc::new(SimulatedSubmitter::new(Duration::from_millis(1500))));
    fill_valid(&h.form).await;

    let started = Instant::now();
    let form = h.form.clone();
    let submission = tokio::spawn(async move { form.submit_on(today()).await });

    wait_until_busy(&h.form).await;
    assert_eq!(h.closes.load(Ordering::SeqCst), 0);

    let outcome = submission.await.unwrap();
    assert_matches!(outcome, SubmitOutcome::Submitted(SubmissionReceipt { call_id: None, .. }));
    assert!(started.elapsed() >= Duration::from_millis(1500));

    let snapshot = h.form.snapshot().await;
    assert!(snapshot.draft.is_empty());
    assert!(snapshot.errors.is_empty());
    assert!(!snapshot.is_submitting);
    assert_eq!(h.closes.load(Ordering::SeqCst), 1);

    let toast = h.toasts.recv().await.unwrap();
    assert_eq!(toast.variant, NotificationVariant::Success);
    assert_eq!(toast.title, "Appointment Booked Successfully! 🎉");
}

#[tokio::test(start_paused = true)]
async fn test_short_symptoms_block_submission() {
    let mut h = harness(Arc::new(SimulatedSubmitter::default()));
    fill_valid(&h.form).await;
    h.form.edit(|draft| draft.symptoms = "cough".to_string()).await;

    let outcome = h.form.submit_on(today()).await;
    let errors = assert_matches!(outcome, SubmitOutcome::Invalid(errors) => errors);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::Symptoms), Some("Please describe your symptoms in detail"));

    let snapshot = h.form.snapshot().await;
    assert!(!snapshot.is_submitting);
    assert_eq!(snapshot.errors, errors);
    assert_eq!(snapshot.draft.symptoms, "cough");
    assert_eq!(h.closes.load(Ordering::SeqCst), 0);
    assert_matches!(h.toasts.try_recv(), Err(_));
}

#[tokio::test(start_paused = true)]
async fn test_field_errors_clear_after_successful_validation() {
    let h = harness(Arc::new(SimulatedSubmitter::new(Duration::from_millis(10))));
    h.form.submit_on(today()).await;
    assert_eq!(h.form.errors().await.len(), 5);

    fill_valid(&h.form).await;
    assert_matches!(h.form.submit_on(today()).await, SubmitOutcome::Submitted(_));
    assert!(h.form.errors().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_failed_submission_keeps_dialog_and_draft() {
    let mut h = harness(Arc::new(OfflineSubmitter));
    fill_valid(&h.form).await;
    let before = h.form.draft().await;

    let outcome = h.form.submit_on(today()).await;
    assert_matches!(outcome, SubmitOutcome::Failed(SubmissionError::NetworkUnavailable(_)));

    assert_eq!(h.form.draft().await, before);
    assert!(!h.form.is_submitting().await);
    assert_eq!(h.closes.load(Ordering::SeqCst), 0);

    let toast = h.toasts.recv().await.unwrap();
    assert_eq!(toast.variant, NotificationVariant::Destructive);
    assert_eq!(toast.title, "Something went wrong");
    assert_eq!(toast.description, "Please try again or call us directly.");
}

#[tokio::test(start_paused = true)]
async fn test_second_submit_while_busy_is_ignored() {
    let h = harness(Arc::new(SimulatedSubmitter::default()));
    fill_valid(&h.form).await;

    let form = h.form.clone();
    let first = tokio::spawn(async move { form.submit_on(today()).await });
    wait_until_busy(&h.form).await;

    assert_matches!(h.form.submit_on(today()).await, SubmitOutcome::AlreadySubmitting);
    assert_matches!(first.await.unwrap(), SubmitOutcome::Submitted(_));
}

#[tokio::test(start_paused = true)]
async fn test_close_during_submission_ignores_late_completion() {
    let mut h = harness(Arc::new(SimulatedSubmitter::default()));
    fill_valid(&h.form).await;

    let form = h.form.clone();
    let submission = tokio::spawn(async move { form.submit_on(today()).await });
    wait_until_busy(&h.form).await;

    h.form.close().await;
    assert_eq!(h.closes.load(Ordering::SeqCst), 1);
    assert!(h.form.draft().await.is_empty());
    assert!(!h.form.is_submitting().await);

    // Visitor reopens the dialog and starts typing again.
    h.form.edit(|draft| draft.patient_name = "Niamh".to_string()).await;

    assert_matches!(submission.await.unwrap(), SubmitOutcome::Submitted(_));
    assert_eq!(h.form.draft().await.patient_name, "Niamh");
    assert_eq!(h.closes.load(Ordering::SeqCst), 1);

    let toast = h.toasts.recv().await.unwrap();
    assert_eq!(toast.variant, NotificationVariant::Success);
}

#[tokio::test]
async fn test_reset_discards_draft() {
    let h = harness(Arc::new(SimulatedSubmitter::default()));
    fill_valid(&h.form).await;
    assert!(!h.form.draft().await.is_empty());

    h.form.reset().await;
    assert!(h.form.draft().await.is_empty());
    assert_eq!(h.closes.load(Ordering::SeqCst), 0);
}
