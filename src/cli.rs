//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::{MediaConfig, RenderConfig, DEFAULT_AUDIO_PATH, DEFAULT_TEXTURE_PATH};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "spectrum-shader")]
#[command(about = "Audio-reactive full-screen shader", long_about = None)]
pub struct Args {
    /// Audio file to play and analyse
    #[arg(long, value_name = "PATH", default_value = DEFAULT_AUDIO_PATH)]
    pub audio: PathBuf,

    /// Decorative image bound to iChannel0
    #[arg(long, value_name = "PATH", default_value = DEFAULT_TEXTURE_PATH)]
    pub texture: PathBuf,

    /// Host agent string used to pick the playback strategy
    /// (defaults to one describing this machine)
    #[arg(long, value_name = "STRING")]
    pub user_agent: Option<String>,

    /// Initial window width (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "1280")]
    pub width: u32,

    /// Initial window height (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "720")]
    pub height: u32,

    /// Start immediately instead of waiting for a click or key press
    #[arg(long)]
    pub autostart: bool,
}

impl Args {
    /// Media inputs selected on the command line
    pub fn media_config(&self) -> MediaConfig {
        let mut media = MediaConfig {
            audio_path: self.audio.clone(),
            texture_path: self.texture.clone(),
            ..Default::default()
        };
        if let Some(agent) = &self.user_agent {
            media.user_agent = agent.clone();
        }
        media
    }

    /// Window configuration selected on the command line
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            window_width: self.width,
            window_height: self.height,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::host_user_agent;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["spectrum-shader"]);
        let media = args.media_config();
        assert_eq!(media.audio_path, PathBuf::from(DEFAULT_AUDIO_PATH));
        assert_eq!(media.texture_path, PathBuf::from(DEFAULT_TEXTURE_PATH));
        assert_eq!(media.user_agent, host_user_agent());
        assert!(!args.autostart);

        let render = args.render_config();
        assert_eq!((render.window_width, render.window_height), (1280, 720));
        assert_eq!(render.time_step, 0.1);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "spectrum-shader",
            "--audio",
            "song.ogg",
            "--texture",
            "noise.png",
            "--user-agent",
            "Mozilla/5.0 (iPad)",
            "--width",
            "800",
            "--height",
            "600",
            "--autostart",
        ]);
        let media = args.media_config();
        assert_eq!(media.audio_path, PathBuf::from("song.ogg"));
        assert_eq!(media.texture_path, PathBuf::from("noise.png"));
        assert_eq!(media.user_agent, "Mozilla/5.0 (iPad)");
        assert!(args.autostart);

        let render = args.render_config();
        assert_eq!((render.window_width, render.window_height), (800, 600));
    }
}
