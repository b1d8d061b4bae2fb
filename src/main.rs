// What you SEE:
// • A gold fan of rays spreading from the emitter (white ring).
// • Rays stop at the crimson-tipped edge of each obstacle (white rings).
// • The big obstacle bobs up and down; hold Left Mouse to drag the emitter.
// • S saves the current frame as PNG. ESC quits.

mod cli;
mod logger;

use clap::Parser;
use cli::Args;
use light_rays::canvas::RayCanvas;
use light_rays::config::{SceneConfig, COLOR_BACKGROUND, COLOR_OUTLINE};
use light_rays::draw::{draw_circle, Drawer};
use light_rays::error::Error;
use light_rays::output;
use light_rays::scene::Scene;
use light_rays::types::FrameBuffer;
use log::{debug, info, warn};
use logger::init_logger;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

fn main() -> Result<(), Error> {
    let args = Args::parse();
    init_logger(args.log_level.clone().into());

    let config = args.scene_config();
    config.validate()?;
    info!(
        "Viewport {}x{}, {} rays on {} workers",
        config.width, config.height, config.rays, config.workers
    );

    match &args.snapshot {
        Some(path) => run_snapshot(&config, path),
        None => run_window(&config),
    }
}

/// Ray pass + outlines into `screen`.
fn compose_frame(scene: &Scene, canvas: &mut RayCanvas, screen: &mut FrameBuffer, workers: usize) {
    scene.render(canvas, workers);
    canvas.copy_into(screen);

    draw_circle(screen, &scene.emitter, COLOR_OUTLINE);
    for obstacle in &scene.obstacles {
        draw_circle(screen, obstacle, COLOR_OUTLINE);
    }
}

/// Headless: one frame of the default scene straight to disk.
fn run_snapshot(config: &SceneConfig, path: &Path) -> Result<(), Error> {
    let scene = Scene::new(config);
    let mut canvas = RayCanvas::new(config.width, config.height, COLOR_BACKGROUND);
    let mut screen = FrameBuffer::new(config.width, config.height);

    compose_frame(&scene, &mut canvas, &mut screen, config.workers);
    output::save_png(&screen, path)
}

/// Interactive snapshots: a failed write is logged, the session goes on.
fn save_snapshot_or_warn(screen: &FrameBuffer, path: &Path) -> bool {
    debug!("writing snapshot {}", path.display());
    match output::save_png(screen, path) {
        Ok(()) => true,
        Err(e) => {
            warn!("Snapshot failed, continuing: {e}");
            false
        }
    }
}

fn run_window(config: &SceneConfig) -> Result<(), Error> {
    /* --- Window setup ---
       Visual: a black window of the viewport size opens. */
    let mut drawer = Drawer::new("Ray Tracing", config.width, config.height, config.target_fps)?;

    /* --- Reusable buffers ---
       `canvas` is what workers write into; `screen` is what you see. */
    let mut canvas = RayCanvas::new(config.width, config.height, COLOR_BACKGROUND);
    let mut screen = FrameBuffer::new(config.width, config.height);
    let mut scene = Scene::new(config);

    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut snapshot_index: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        // 1) Drag: the fan follows the cursor only while the button is held.
        if drawer.left_mouse_down() {
            if let Some((mx, my)) = drawer.mouse_pos() {
                scene.move_emitter(mx, my);
            }
        }

        // 2) Rays, then outlines on top.
        compose_frame(&scene, &mut canvas, &mut screen, config.workers);

        // 3) Obstacle motion shows up next frame.
        scene.advance();

        if drawer.s_pressed_once() {
            let path = PathBuf::from(format!("light-rays-{snapshot_index:03}.png"));
            snapshot_index += 1;
            save_snapshot_or_warn(&screen, &path);
        }

        // 4) Present to the window.
        drawer.present(&screen)?;

        // 5) FPS, once per second
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            info!("FPS: {:.1}", frames_this_second as f32 / secs);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
