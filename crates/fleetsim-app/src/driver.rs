//! Clock/driver: ticks the engine on a timer thread and publishes snapshots.
//!
//! The engine and the registered observer sit behind one mutex. A tick (step
//! plus publish) runs entirely under that lock on the timer thread, so the
//! observer sees snapshots in tick order and never a half-stepped fleet.
//! The observer must not call back into the driver. An observer that panics
//! is unregistered and the driver falls back to `Stopped`.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use fleetsim_core::constants::BASE_TICK_INTERVAL_MS;
use fleetsim_core::enums::FailureComponent;
use fleetsim_core::error::SimError;
use fleetsim_core::events::Alert;
use fleetsim_core::state::{SimulationSnapshot, Vehicle};
use fleetsim_sim::SimulationEngine;

use crate::state::{DriverState, TimerCommand};

/// Tick period at 1x speed.
pub const BASE_TICK_INTERVAL: Duration = Duration::from_millis(BASE_TICK_INTERVAL_MS);

/// Receives every published snapshot.
pub type Observer = Box<dyn FnMut(SimulationSnapshot) + Send>;

/// Period between ticks at `speed`. Saturates instead of overflowing for
/// vanishingly small speeds.
pub fn tick_interval(base: Duration, speed: f64) -> Duration {
    Duration::try_from_secs_f64(base.as_secs_f64() / speed).unwrap_or(Duration::MAX)
}

struct Shared<R> {
    engine: SimulationEngine<R>,
    observer: Option<Observer>,
    running: bool,
}

impl<R: Rng> Shared<R> {
    fn publish(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer(self.engine.snapshot(self.running));
        }
    }
}

struct Timer {
    cmd_tx: mpsc::Sender<TimerCommand>,
    thread: JoinHandle<()>,
}

/// Drives a [`SimulationEngine`] in real time.
///
/// Starts `Stopped`. Dropping the driver stops it.
pub struct SimulationDriver<R = ChaCha8Rng> {
    shared: Arc<Mutex<Shared<R>>>,
    timer: Option<Timer>,
    base_interval: Duration,
}

impl<R> SimulationDriver<R> {
    /// Cancel the timer and wait for any in-flight tick. Idempotent.
    pub fn stop(&mut self) {
        if self.halt_timer() {
            tracing::info!("simulation stopped");
        }
    }

    /// `Running` only while the timer thread is alive.
    pub fn state(&self) -> DriverState {
        match &self.timer {
            Some(timer) if !timer.thread.is_finished() => DriverState::Running,
            _ => DriverState::Stopped,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == DriverState::Running
    }

    fn lock(&self) -> MutexGuard<'_, Shared<R>> {
        lock_shared(&self.shared)
    }

    /// Returns whether a timer was running.
    fn halt_timer(&mut self) -> bool {
        let Some(timer) = self.timer.take() else {
            return false;
        };
        self.lock().running = false;
        let _ = timer.cmd_tx.send(TimerCommand::Shutdown);
        if timer.thread.join().is_err() {
            tracing::error!("simulation timer thread panicked");
        }
        true
    }
}

impl<R: Rng + Send + 'static> SimulationDriver<R> {
    pub fn new(engine: SimulationEngine<R>) -> Self {
        Self::with_base_interval(engine, BASE_TICK_INTERVAL)
    }

    /// Driver ticking every `base_interval / speed`.
    pub fn with_base_interval(engine: SimulationEngine<R>, base_interval: Duration) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                engine,
                observer: None,
                running: false,
            })),
            timer: None,
            base_interval,
        }
    }

    /// Register `on_update` (replacing any previous observer) and start
    /// ticking. Restarts the timer if already running.
    pub fn start(&mut self, on_update: impl FnMut(SimulationSnapshot) + Send + 'static) {
        self.halt_timer();
        self.lock().observer = Some(Box::new(on_update));
        self.spawn_timer();
    }

    /// Change the speed multiplier. A running timer is restarted at the new
    /// interval with the same observer; fleet state is untouched.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), SimError> {
        self.lock().engine.set_speed(speed)?;
        tracing::info!(speed, "simulation speed changed");
        if self.halt_timer() {
            self.spawn_timer();
        }
        Ok(())
    }

    /// Stop, restore the baseline fleet and publish one stopped snapshot.
    /// Does not resume.
    pub fn reset(&mut self) {
        self.stop();
        let mut shared = self.lock();
        shared.engine.reset();
        shared.publish();
    }

    /// Force a component failure. Publishes a snapshot only if the vehicle
    /// exists.
    pub fn inject_failure(&self, vehicle_id: &str, failure: FailureComponent) -> bool {
        let mut shared = self.lock();
        let applied = shared.engine.inject_failure(vehicle_id, failure);
        if applied {
            shared.publish();
        }
        applied
    }

    pub fn vehicles(&self) -> Vec<Vehicle> {
        self.lock().engine.vehicles()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.lock().engine.alerts()
    }

    pub fn snapshot(&self) -> SimulationSnapshot {
        let shared = self.lock();
        shared.engine.snapshot(shared.running)
    }

    pub fn speed(&self) -> f64 {
        self.lock().engine.speed()
    }

    /// Current period between ticks.
    pub fn tick_interval(&self) -> Duration {
        tick_interval(self.base_interval, self.speed())
    }

    fn spawn_timer(&mut self) {
        let interval = {
            let mut shared = self.lock();
            shared.running = true;
            tick_interval(self.base_interval, shared.engine.speed())
        };

        let (cmd_tx, cmd_rx) = mpsc::channel::<TimerCommand>();
        let shared = Arc::clone(&self.shared);
        let spawned = std::thread::Builder::new()
            .name("fleetsim-timer".into())
            .spawn(move || run_timer(&shared, &cmd_rx, interval));

        match spawned {
            Ok(thread) => {
                let interval_ms = interval.as_millis() as u64;
                tracing::info!(interval_ms, "simulation started");
                self.timer = Some(Timer { cmd_tx, thread });
            }
            Err(err) => {
                self.lock().running = false;
                tracing::error!(error = %err, "failed to spawn simulation timer thread");
            }
        }
    }
}

impl<R> Drop for SimulationDriver<R> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn lock_shared<R>(shared: &Mutex<Shared<R>>) -> MutexGuard<'_, Shared<R>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clears `running` and drops the observer if the timer thread unwinds.
struct StopOnPanic<'a, R>(&'a Mutex<Shared<R>>);

impl<R> Drop for StopOnPanic<'_, R> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            let mut shared = lock_shared(self.0);
            shared.running = false;
            shared.observer = None;
            tracing::error!("observer panicked, simulation stopped");
        }
    }
}

/// The timer loop. Runs until Shutdown, channel disconnect or `running`
/// being cleared.
fn run_timer<R: Rng>(
    shared: &Mutex<Shared<R>>,
    cmd_rx: &mpsc::Receiver<TimerCommand>,
    interval: Duration,
) {
    let _stop_on_panic = StopOnPanic(shared);
    let Some(mut next_tick_time) = Instant::now().checked_add(interval) else {
        let _ = cmd_rx.recv();
        return;
    };

    loop {
        // 1. Wait out the interval, waking early for commands
        let wait = next_tick_time.saturating_duration_since(Instant::now());
        match cmd_rx.recv_timeout(wait) {
            Ok(TimerCommand::Shutdown) | Err(RecvTimeoutError::Disconnected) => return,
            Err(RecvTimeoutError::Timeout) => {}
        }

        // 2. Tick and publish under the lock
        {
            let mut shared = lock_shared(shared);
            if !shared.running {
                return;
            }
            shared.engine.tick();
            shared.publish();
        }

        // 3. Schedule the next tick
        let Some(next) = next_tick_time.checked_add(interval) else {
            let _ = cmd_rx.recv();
            return;
        };
        next_tick_time = next;
        let now = Instant::now();
        if now > next_tick_time && now - next_tick_time > interval * 2 {
            // Too far behind, skip the backlog
            next_tick_time = now;
        }
    }
}
