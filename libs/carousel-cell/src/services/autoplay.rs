use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, instrument};

use crate::{
    CarouselController, CarouselError, CarouselState, CarouselTimings, ClickOutcome, ClickTarget,
};

/// Invoked when the carousel body is clicked.
pub type BookingCallback = Arc<dyn Fn() + Send + Sync>;

enum CarouselCommand {
    Next(oneshot::Sender<CarouselState>),
    Previous(oneshot::Sender<CarouselState>),
    JumpTo(usize, oneshot::Sender<Result<CarouselState, CarouselError>>),
    Click(ClickTarget, oneshot::Sender<Result<ClickOutcome, CarouselError>>),
}

/// Handle to a running carousel. The driver task owns the controller along
/// with the auto-advance tick and the single pending resume deadline.
/// Dropping the handle stops the task and both timers with it.
pub struct CarouselHandle {
    commands: mpsc::Sender<CarouselCommand>,
    state: watch::Receiver<CarouselState>,
    task: Option<JoinHandle<()>>,
}

impl CarouselHandle {
    pub fn spawn(
        controller: CarouselController,
        timings: CarouselTimings,
        on_booking: BookingCallback,
    ) -> Self {
        let timings = timings.non_zero();
        let (commands, receiver) = mpsc::channel(32);
        let (state_tx, state) = watch::channel(controller.state());

        let driver = AutoplayDriver {
            next_tick: Some(Instant::now() + timings.autoplay_interval),
            resume_at: None,
            controller,
            timings,
            on_booking,
            state_tx,
        };
        let task = tokio::spawn(driver.run(receiver));

        Self {
            commands,
            state,
            task: Some(task),
        }
    }

    pub fn state(&self) -> CarouselState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<CarouselState> {
        self.state.clone()
    }

    pub async fn next(&self) -> Result<CarouselState, CarouselError> {
        self.request(CarouselCommand::Next).await
    }

    pub async fn previous(&self) -> Result<CarouselState, CarouselError> {
        self.request(CarouselCommand::Previous).await
    }

    pub async fn jump_to(&self, index: usize) -> Result<CarouselState, CarouselError> {
        self.request(|reply| CarouselCommand::JumpTo(index, reply)).await?
    }

    pub async fn click(&self, target: ClickTarget) -> Result<ClickOutcome, CarouselError> {
        self.request(|reply| CarouselCommand::Click(target, reply)).await?
    }

    pub async fn shutdown(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
        }
        info!("Carousel driver shut down");
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> CarouselCommand,
    ) -> Result<T, CarouselError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(command(reply))
            .await
            .map_err(|_| CarouselError::DriverStopped)?;
        response.await.map_err(|_| CarouselError::DriverStopped)
    }
}

impl Drop for CarouselHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

struct AutoplayDriver {
    controller: CarouselController,
    timings: CarouselTimings,
    next_tick: Option<Instant>,
    resume_at: Option<Instant>,
    on_booking: BookingCallback,
    state_tx: watch::Sender<CarouselState>,
}

impl AutoplayDriver {
    #[instrument(skip_all)]
    async fn run(mut self, mut commands: mpsc::Receiver<CarouselCommand>) {
        info!(
            "Carousel driver started with {} slides, interval {:?}",
            self.controller.slide_count(),
            self.timings.autoplay_interval
        );

        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => break,
                },
                _ = wait_for(self.next_tick) => self.on_tick(),
                _ = wait_for(self.resume_at) => self.on_resume(),
            }
        }

        debug!("Carousel driver loop ended");
    }

    fn handle(&mut self, command: CarouselCommand) {
        match command {
            CarouselCommand::Next(reply) => {
                let state = self.controller.next();
                self.publish();
                let _ = reply.send(state);
            }
            CarouselCommand::Previous(reply) => {
                let state = self.controller.previous();
                self.publish();
                let _ = reply.send(state);
            }
            CarouselCommand::JumpTo(index, reply) => {
                let result = self.controller.jump_to(index);
                if result.is_ok() {
                    self.suspend_autoplay();
                }
                let _ = reply.send(result);
            }
            CarouselCommand::Click(target, reply) => {
                let result = self.controller.click(target);
                match result {
                    Ok(ClickOutcome::BookingRequested) => {
                        debug!("Carousel body clicked, requesting booking");
                        (self.on_booking)();
                    }
                    Ok(ClickOutcome::Navigated(_)) => {
                        if matches!(target, ClickTarget::Indicator(_)) {
                            self.suspend_autoplay();
                        } else {
                            self.publish();
                        }
                    }
                    Err(_) => {}
                }
                let _ = reply.send(result);
            }
        }
    }

    /// Replaces any pending resume with a fresh cooldown. Only the most
    /// recent jump can re-enable autoplay.
    fn suspend_autoplay(&mut self) {
        self.next_tick = None;
        self.resume_at = Some(Instant::now() + self.timings.resume_delay);
        debug!("Autoplay cooldown scheduled for {:?}", self.timings.resume_delay);
        self.publish();
    }

    fn on_tick(&mut self) {
        self.next_tick = self.next_tick.map(|tick| tick + self.timings.autoplay_interval);
        if self.controller.on_autoplay_tick().is_some() {
            self.publish();
        }
    }

    fn on_resume(&mut self) {
        self.resume_at = None;
        self.controller.resume_autoplay();
        self.next_tick = Some(Instant::now() + self.timings.autoplay_interval);
        debug!("Autoplay resumed");
        self.publish();
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.controller.state());
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
