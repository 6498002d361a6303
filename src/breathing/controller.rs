use std::sync::Arc;

use log::info;
use serde::Serialize;
use tokio::{
    sync::{broadcast, Mutex},
    task::JoinHandle,
    time,
};
use tokio_util::sync::CancellationToken;

use super::state::{BreathPhase, BreathingConfig, BreathingSession};

/// Observable sequencer output. Presentation (circle animation, badge
/// notifications, instruction text) is the subscriber's concern.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum BreathingEvent {
    PhaseChanged {
        phase: BreathPhase,
        duration_ms: u64,
    },
    CycleCompleted {
        completed_cycles: u32,
    },
    MilestoneReached {
        completed_cycles: u32,
        badge: &'static str,
    },
}

struct PendingTimer {
    cancel_token: CancellationToken,
    handle: JoinHandle<()>,
}

/// Drives the phase ring with real time. At most one timer task is
/// outstanding per controller; any pending timer is cancelled before a new
/// one is scheduled, so a stale transition can never fire into a paused or
/// restarted session.
#[derive(Clone)]
pub struct BreathingController {
    config: BreathingConfig,
    session: Arc<Mutex<BreathingSession>>,
    timer: Arc<Mutex<Option<PendingTimer>>>,
    events: broadcast::Sender<BreathingEvent>,
}

impl BreathingController {
    pub fn new(config: BreathingConfig) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            config,
            session: Arc::new(Mutex::new(BreathingSession::new())),
            timer: Arc::new(Mutex::new(None)),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BreathingEvent> {
        self.events.subscribe()
    }

    pub async fn session(&self) -> BreathingSession {
        self.session.lock().await.clone()
    }

    /// Start a session from scratch. No-op while already running; otherwise
    /// the cycle counter resets and the ring is entered at Inhale.
    pub async fn start(&self) {
        {
            let mut session = self.session.lock().await;
            if session.running {
                return;
            }
            session.begin();
        }

        info!("breathing session started");
        let _ = self.events.send(BreathingEvent::PhaseChanged {
            phase: BreathPhase::Inhale,
            duration_ms: self.config.inhale_ms,
        });

        self.spawn_timer().await;
    }

    /// Pause the session. No-op while not running; otherwise the pending
    /// transition is cancelled and phase + counter stay readable. A later
    /// `start()` re-enters at Inhale with the counter reset.
    pub async fn pause(&self) {
        {
            let mut session = self.session.lock().await;
            if !session.running {
                return;
            }
            session.pause();
        }

        self.cancel_timer().await;
        info!("breathing session paused");
    }

    async fn spawn_timer(&self) {
        let mut guard = self.timer.lock().await;
        if let Some(pending) = guard.take() {
            pending.cancel_token.cancel();
            pending.handle.abort();
        }

        let cancel_token = CancellationToken::new();
        let token = cancel_token.clone();
        let session = self.session.clone();
        let config = self.config.clone();
        let events = self.events.clone();

        let handle = tokio::spawn(async move {
            loop {
                let wait = {
                    let session = session.lock().await;
                    if !session.running {
                        break;
                    }
                    let Some(phase) = session.phase else { break };
                    config.duration(phase)
                };

                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = time::sleep(wait) => {}
                }

                let advance = {
                    let mut session = session.lock().await;
                    match session.advance() {
                        Some(advance) => advance,
                        // Paused between scheduling and firing.
                        None => break,
                    }
                };

                let _ = events.send(BreathingEvent::PhaseChanged {
                    phase: advance.entered,
                    duration_ms: config.duration_ms(advance.entered),
                });
                if let Some(completed_cycles) = advance.completed_cycle {
                    let _ = events.send(BreathingEvent::CycleCompleted { completed_cycles });
                }
                if let Some((completed_cycles, badge)) = advance.milestone {
                    info!("breathing milestone reached at {completed_cycles} cycles");
                    let _ = events.send(BreathingEvent::MilestoneReached {
                        completed_cycles,
                        badge,
                    });
                }
            }
        });

        *guard = Some(PendingTimer {
            cancel_token,
            handle,
        });
    }

    async fn cancel_timer(&self) {
        let pending = self.timer.lock().await.take();
        if let Some(pending) = pending {
            pending.cancel_token.cancel();
            // Join so no transition can fire after pause() returns.
            let _ = pending.handle.await;
        }
    }
}

impl Default for BreathingController {
    fn default() -> Self {
        Self::new(BreathingConfig::default())
    }
}
