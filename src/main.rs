use std::path::Path;

use vitrine::engine::Viewer;
use vitrine::input::{InputEvent, InputProcessor, MouseButton};
use vitrine::options::Options;
use vitrine::render::LogBackend;
use web_time::{Duration, Instant};

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;
const FRAME: Duration = Duration::from_millis(16);

/// Scripted pointer session: (frame number, event).
///
/// Clicks the center object, sends it home, retargets to a neighbor,
/// double-clicks for fullscreen, and resizes: a full tour of the
/// interactive vocabulary against the headless backend.
fn script() -> Vec<(u64, InputEvent)> {
    let press = InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed: true,
    };
    let release = InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed: false,
    };
    let move_to = |x: f32, y: f32| InputEvent::CursorMoved { x, y };

    vec![
        // Focus the center object.
        (30, move_to(640.0, 360.0)),
        (31, press),
        (32, release),
        // Send it home via a click on empty space.
        (150, move_to(5.0, 5.0)),
        (151, press),
        (152, release),
        // Retarget straight to the right-middle object.
        (220, move_to(857.0, 360.0)),
        (221, press),
        (222, release),
        // Double-click: second click within 400ms toggles fullscreen.
        (300, press),
        (301, release),
        (310, press),
        (311, release),
        // Shrink the window; picking keeps working at the new size.
        (340, InputEvent::Resized {
            width: 800,
            height: 600,
        }),
        (350, move_to(400.0, 300.0)),
        (351, press),
        (352, release),
    ]
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let mut viewer = Viewer::new(options, WIDTH, HEIGHT, LogBackend::new());
    let mut input = InputProcessor::new();
    let script = script();

    let start = Instant::now();
    for frame in 0..420u64 {
        let now = start + FRAME * frame as u32;

        for (_, event) in script.iter().filter(|(at, _)| *at == frame) {
            for command in input.handle_event(*event, now) {
                log::info!("frame {frame}: {command:?}");
                viewer.execute(command, now);
                log::info!("  selection: {:?}", viewer.selection());
            }
        }

        viewer.tick(now);
    }

    log::info!(
        "rendered {} frames ({:.0} fps simulated), final selection {:?}",
        viewer.backend().frames(),
        viewer.fps(),
        viewer.selection()
    );
}
