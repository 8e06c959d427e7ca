use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use lark_tracer::RenderSettings;
use log::LevelFilter;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
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

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lark")]
#[command(about = "A Whitted-style ray tracer", version)]
pub struct Args {
    /// Scene description (JSON); renders a built-in scene when omitted
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Built-in scene used when no scene file is given
    #[arg(long, default_value = "showcase", conflicts_with = "scene")]
    pub builtin: String,

    /// Output file path (.ppm or .png)
    #[arg(short, long, default_value = "render.ppm")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// Samples per pixel; more than one jitters inside the pixel
    #[arg(long, short = 's', default_value_t = 1)]
    pub samples: u32,

    /// Exposure multiplier applied to every pixel
    #[arg(long, default_value_t = 1.0)]
    pub exposure: f32,

    /// Mirror bounce limit before a path falls back to black
    #[arg(long)]
    pub max_bounces: Option<u32>,

    /// Seed for pixel jitter
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Render settings taken from the arguments.
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            width: self.width,
            height: self.height,
            samples_per_pixel: self.samples,
            exposure: self.exposure,
            seed: self.seed,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["lark"]);
        assert!(args.scene.is_none());
        assert_eq!(args.builtin, "showcase");
        assert_eq!(args.output, PathBuf::from("render.ppm"));

        let settings = args.render_settings();
        assert_eq!(settings.width, 640);
        assert_eq!(settings.height, 480);
        assert_eq!(settings.samples_per_pixel, 1);
        assert_eq!(settings.exposure, 1.0);
        assert!(args.max_bounces.is_none());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "lark",
            "--scene",
            "room.json",
            "-o",
            "room.png",
            "--width",
            "320",
            "--height",
            "200",
            "-s",
            "4",
            "--exposure",
            "1.5",
            "--max-bounces",
            "3",
            "--seed",
            "7",
            "--log-level",
            "debug",
        ]);

        assert_eq!(args.scene, Some(PathBuf::from("room.json")));
        assert_eq!(args.max_bounces, Some(3));
        assert!(matches!(args.log_level, LogLevel::Debug));

        let settings = args.render_settings();
        assert_eq!((settings.width, settings.height), (320, 200));
        assert_eq!(settings.samples_per_pixel, 4);
        assert_eq!(settings.exposure, 1.5);
        assert_eq!(settings.seed, 7);
    }

    #[test]
    fn test_scene_and_builtin_conflict() {
        let result = Args::try_parse_from(["lark", "--scene", "a.json", "--builtin", "showcase"]);
        assert!(result.is_err());
    }
}
