use light_rays::config::{SceneConfig, RAYS_NUMBER, SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_FPS, WORKERS};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Log levels selectable from the command line
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "light-rays")]
#[command(about = "2D light source: rays from a draggable emitter, stopped by circles")]
pub struct Args {
    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,

    /// Viewport width in pixels
    #[arg(long, default_value_t = SCREEN_WIDTH)]
    pub width: usize,

    /// Viewport height in pixels
    #[arg(long, default_value_t = SCREEN_HEIGHT)]
    pub height: usize,

    /// Number of rays cast from the emitter
    #[arg(long, short = 'n', default_value_t = RAYS_NUMBER)]
    pub rays: usize,

    /// Worker threads per frame
    #[arg(long, short = 'j', default_value_t = WORKERS)]
    pub workers: usize,

    /// Frame rate cap for the window
    #[arg(long, default_value_t = TARGET_FPS)]
    pub fps: usize,

    /// Render a single frame without a window and save it as PNG
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

impl Args {
    pub fn scene_config(&self) -> SceneConfig {
        SceneConfig::new()
            .size(self.width, self.height)
            .rays(self.rays)
            .workers(self.workers)
            .target_fps(self.fps)
    }
}
