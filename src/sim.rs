//! Simulated face-tracking session — drives the pipeline without
//! tracking hardware, for the demo binary, CI, and integration tests.
//!
//! A worker thread plays a deterministic head/eye trajectory and hands
//! each frame to the coordinating context over a channel, modeling the
//! fire-and-forget dispatch from the sensor callback context.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{debug, info};

use crate::estimator::FaceAnchor;
use crate::math::{Quat, Transform3D, Vec3};
use crate::session::{FrameEvent, TrackingConfig, TrackingSession};

/// Synthetic face anchor for the given frame index.
///
/// The face sits ~32 cm in front of the device with a gentle lateral
/// sway; the gaze pitch sweeps far enough past both screen edges to
/// exercise the scroll policy in both directions.
pub fn synthetic_anchor(frame: u64) -> FaceAnchor {
    let t = frame as f32 / 60.0;

    let face = Transform3D::at(0.01 * (t * 0.7).sin(), 0.0, -0.32);

    let pitch = 0.55 * (t * 0.6).sin();
    let yaw = 0.1 * (t * 1.3).cos();
    let gaze = Quat::from_euler(yaw, pitch, 0.0);

    FaceAnchor {
        transform: face,
        left_eye: Transform3D {
            position: Vec3::new(-0.031, 0.029, 0.0),
            rotation: gaze,
            scale: Vec3::ONE,
        },
        right_eye: Transform3D {
            position: Vec3::new(0.031, 0.029, 0.0),
            rotation: gaze,
            scale: Vec3::ONE,
        },
    }
}

/// Simulated tracking session delivering frames on a worker thread.
pub struct SimulatedSession {
    supported: bool,
    sender: Sender<FrameEvent>,
    /// Frames emitted per run.
    pub frames: u64,
    /// Delay between frames.
    pub frame_interval: Duration,
    running: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl SimulatedSession {
    pub fn new(sender: Sender<FrameEvent>, frames: u64, frame_interval: Duration) -> Self {
        Self {
            supported: true,
            sender,
            frames,
            frame_interval,
            running: Arc::new(AtomicBool::new(false)),
            worker: None,
        }
    }

    /// A session whose capability probe fails, for gate testing.
    pub fn unsupported(sender: Sender<FrameEvent>) -> Self {
        let mut session = Self::new(sender, 0, Duration::ZERO);
        session.supported = false;
        session
    }

    fn join_worker(&mut self) {
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}

impl TrackingSession for SimulatedSession {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn run(&mut self, config: &TrackingConfig) {
        // Restart discards any in-flight trajectory.
        self.pause();

        info!(
            frames = self.frames,
            light_estimation = config.light_estimation,
            "simulated tracking session starting"
        );

        self.running.store(true, Ordering::SeqCst);
        let running = Arc::clone(&self.running);
        let sender = self.sender.clone();
        let frames = self.frames;
        let interval = self.frame_interval;

        self.worker = Some(std::thread::spawn(move || {
            for frame in 0..frames {
                if !running.load(Ordering::SeqCst) {
                    break;
                }

                let anchor = synthetic_anchor(frame);
                let face_event = if frame == 0 {
                    FrameEvent::FaceAdded(anchor)
                } else {
                    FrameEvent::FaceUpdated(anchor)
                };

                // Receiver gone means the coordinating context is done.
                if sender.send(FrameEvent::CameraMoved(Transform3D::default())).is_err()
                    || sender.send(face_event).is_err()
                {
                    break;
                }

                if !interval.is_zero() {
                    std::thread::sleep(interval);
                }
            }
            running.store(false, Ordering::SeqCst);
            debug!("simulated trajectory finished");
        }));
    }

    fn pause(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        self.join_worker();
    }
}

impl Drop for SimulatedSession {
    fn drop(&mut self) {
        self.pause();
    }
}

// ── Tests ────────────────────────────────────────────────────
