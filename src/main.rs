//! lookscroll demo — runs the gaze pipeline against a simulated
//! face-tracking session and logs the looking point and scroll offset.

use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use lookscroll::page::PageSurface;
use lookscroll::screen::ScreenPlane;
use lookscroll::scroll::{ScrollRegion, ScrollSurface};
use lookscroll::session::{Coordinator, FrameEvent, TrackingConfig, TrackingState};
use lookscroll::sim::SimulatedSession;

#[derive(Parser, Debug)]
#[command(name = "lookscroll", about = "Gaze-driven auto-scroll demo")]
struct Cli {
    /// Page to load into the scrollable surface
    #[arg(long, default_value = "https://www.apple.com/")]
    url: String,

    /// Number of simulated tracking frames
    #[arg(long, default_value = "600")]
    frames: u64,

    /// Simulated tracking frame rate
    #[arg(long, default_value = "60")]
    fps: u64,

    /// Logical screen size in points (WxH)
    #[arg(long, default_value = "375x812")]
    screen: String,

    /// Scrollable content height in points
    #[arg(long, default_value = "2000")]
    content_height: f32,

    /// Show version and exit
    #[arg(long)]
    version: bool,
}

/// Parse a "WxH" points string. Returns (width, height) or None.
fn parse_points(s: &str) -> Option<(f32, f32)> {
    let (w, h) = s.split_once('x')?;
    let w = w.parse::<f32>().ok()?;
    let h = h.parse::<f32>().ok()?;
    if w > 0.0 && h > 0.0 {
        Some((w, h))
    } else {
        None
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("lookscroll {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lookscroll=info".into()),
        )
        .init();

    info!("lookscroll v{} starting", env!("CARGO_PKG_VERSION"));

    let (point_w, point_h) = parse_points(&cli.screen).unwrap_or_else(|| {
        eprintln!("Invalid screen size '{}', using 375x812", cli.screen);
        (375.0, 812.0)
    });

    let mut screen = ScreenPlane::iphone_12_mini();
    screen.point_size.x = point_w;
    screen.point_size.y = point_h;

    let mut page = PageSurface::new(ScrollRegion::new(cli.content_height, point_h));
    page.load_page(&cli.url);

    let fps = cli.fps.max(1);
    let (tx, rx) = mpsc::channel();
    let session = SimulatedSession::new(tx, cli.frames, Duration::from_millis(1000 / fps));
    let mut coordinator = Coordinator::new(session, screen, page);

    coordinator.start(&TrackingConfig::default());
    if coordinator.state() != TrackingState::Tracking {
        info!("tracking unavailable, nothing to do");
        return Ok(());
    }

    // Single coordinating context: drain frame events until the
    // simulated trajectory goes quiet.
    let mut face_frames: u64 = 0;
    loop {
        match rx.recv_timeout(Duration::from_millis(500)) {
            Ok(event) => {
                let is_face = matches!(
                    event,
                    FrameEvent::FaceAdded(_) | FrameEvent::FaceUpdated(_)
                );
                coordinator.handle_frame(event);

                if is_face {
                    face_frames += 1;
                    if face_frames % fps == 0 {
                        info!(
                            frame = face_frames,
                            x = coordinator.pointer.translation.x,
                            y = coordinator.pointer.translation.y,
                            offset = coordinator.page.scroll.offset_y(),
                            "looking point"
                        );
                    }
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => break,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    coordinator.stop();

    info!(
        frames = face_frames,
        final_offset = coordinator.page.scroll.offset_y(),
        "done"
    );
    Ok(())
}
