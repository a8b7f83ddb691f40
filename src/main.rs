//! Rooftop Duel headless demo
//!
//! Plays a scripted match at 60 fps without a window, logging each turn.
//! Usage: `rooftop-duel [seed] [tuning.json]`

use glam::Vec2;

use rooftop_duel::renderer::{DrawCommand, Renderer, Scene, build_scene};
use rooftop_duel::sim::TurnResult;
use rooftop_duel::{FrameOutcome, Session, Tuning, Viewport, hud};

/// Frame clock step (60 fps)
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Give up after this many throws
const MAX_THROWS: usize = 40;

/// Counts what would be painted
#[derive(Default)]
struct TallyRenderer {
    frames: u64,
    commands: u64,
}

impl Renderer for TallyRenderer {
    fn draw(&mut self, scene: &Scene) {
        self.frames += 1;
        self.commands += scene.commands.len() as u64;
        let holes = scene
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::ClipOutsideCircles { centers, .. } => Some(centers.len()),
                _ => None,
            })
            .unwrap_or(0);
        log::trace!("frame {}: {} commands, {} craters", self.frames, scene.commands.len(), holes);
    }
}

/// Drag for throw `n`: sweep strength and angle so the demo eventually connects
fn scripted_drag(n: usize, facing_right: bool) -> Vec2 {
    let power = 60.0 + (n / 2 % 8) as f32 * 12.0;
    let angle = (35.0 + (n / 2 % 5) as f32 * 8.0).to_radians();
    // Dragging away from the target throws toward it
    let dx = if facing_right { -power * angle.cos() } else { power * angle.cos() };
    Vec2::new(dx, power * angle.sin())
}

fn run(seed: u64, tuning: Tuning) -> Result<(), rooftop_duel::DuelError> {
    let viewport = Viewport::new(1280.0, 720.0);
    let mut session = Session::new(tuning, viewport, seed)?;
    let mut renderer = TallyRenderer::default();
    let mut now = 0.0;

    for throw in 0..MAX_THROWS {
        let state = session.state();
        let thrower = state.current_player;
        let grab = hud::grab_area(state);
        // Press in the middle of the grab area, just below the bomb
        let press = hud::projectile_on_screen(state) + Vec2::new(0.0, hud::GRAB_AREA_RADIUS);
        if !grab.contains(state.viewport.height, press) {
            log::warn!("Press at ({:.0}, {:.0}) misses the grab area", press.x, press.y);
            break;
        }

        session.drag_start(press);
        session.drag_move(press + scripted_drag(throw, thrower.number() == 1));
        let readout = session.state().readouts[thrower.index()];
        log::info!(
            "Player {} aims: angle {}, velocity {}",
            thrower.number(),
            readout.angle,
            readout.velocity
        );
        let Some(mut ticket) = session.drag_end() else {
            break;
        };

        loop {
            now += FRAME_MS;
            match session.on_animation_frame(ticket, now) {
                FrameOutcome::Baseline(next) | FrameOutcome::Continue(next) => {
                    renderer.draw(&build_scene(session.state()));
                    ticket = next;
                }
                FrameOutcome::Resolved(TurnResult::Missed { .. }) => break,
                FrameOutcome::Stale => {
                    log::warn!("Frame dropped mid-flight");
                    break;
                }
                FrameOutcome::Resolved(TurnResult::Won { .. }) => {
                    renderer.draw(&build_scene(session.state()));
                    if let Some(banner) = session.winner_announcement() {
                        log::info!("Winner: {}", banner);
                    }
                    log::info!(
                        "Rendered {} frames ({} draw commands)",
                        renderer.frames,
                        renderer.commands
                    );
                    print_snapshot(&session);
                    return Ok(());
                }
            }
        }
    }

    log::info!("No winner after {} throws", MAX_THROWS);
    print_snapshot(&session);
    Ok(())
}

fn print_snapshot(session: &Session) {
    match serde_json::to_string_pretty(session.state()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize state: {}", e),
    }
}

fn main() {
    env_logger::init();
    log::info!("Rooftop Duel (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random::<u64>);
    let tuning = match args.next() {
        Some(path) => match Tuning::load(std::path::Path::new(&path)) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(2);
            }
        },
        None => Tuning::default(),
    };

    if let Err(e) = run(seed, tuning) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
