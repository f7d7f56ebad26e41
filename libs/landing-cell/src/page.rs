use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use appointment_request_cell::{
    submitter_from_config, AppointmentFormController, AppointmentSubmitter, NotificationCenter,
    NotificationReceiver, SubmissionError,
};
use carousel_cell::{CarouselController, CarouselHandle, CarouselTimings};
use shared_config::AppConfig;

use crate::DialogFlag;

/// The booking landing page: an advert carousel and the appointment dialog,
/// sharing nothing but the dialog flag owned here.
pub struct LandingPage {
    dialog: DialogFlag,
    carousel: CarouselHandle,
    form: AppointmentFormController,
    notifications: NotificationCenter,
}

impl LandingPage {
    pub fn mount(config: &AppConfig) -> Result<Self, SubmissionError> {
        let submitter = submitter_from_config(config)?;
        Ok(Self::mount_with(submitter, CarouselTimings::from_config(config)))
    }

    pub fn mount_with(submitter: Arc<dyn AppointmentSubmitter>, timings: CarouselTimings) -> Self {
        let dialog = DialogFlag::new();
        let notifications = NotificationCenter::new();

        let opener = dialog.clone();
        let carousel = CarouselHandle::spawn(
            CarouselController::new(),
            timings,
            Arc::new(move || opener.open()),
        );

        let closer = dialog.clone();
        let form = AppointmentFormController::new(
            submitter,
            notifications.clone(),
            Arc::new(move || closer.close()),
        );

        info!("Landing page mounted");

        Self {
            dialog,
            carousel,
            form,
            notifications,
        }
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog.is_open()
    }

    pub fn dialog_updates(&self) -> watch::Receiver<bool> {
        self.dialog.subscribe()
    }

    /// The header and mobile "Book" buttons.
    pub fn open_booking(&self) {
        self.dialog.open();
    }

    pub fn carousel(&self) -> &CarouselHandle {
        &self.carousel
    }

    pub fn form(&self) -> &AppointmentFormController {
        &self.form
    }

    pub fn notifications(&self) -> NotificationReceiver {
        self.notifications.subscribe()
    }

    pub async fn unmount(self) {
        self.carousel.shutdown().await;
        info!("Landing page unmounted");
    }
}
