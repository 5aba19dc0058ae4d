//! Media inputs: the audio file, the decorative image and the host agent.

use std::path::PathBuf;

/// Audio file played when no `--audio` path is given
pub const DEFAULT_AUDIO_PATH: &str = "assets/sounds/376737_Skullbeatz___Bad_Cat_Maste.ogg";

/// Image bound to `iChannel0` when no `--texture` path is given
pub const DEFAULT_TEXTURE_PATH: &str = "assets/textures/img.png";

/// Media inputs consumed during initialization
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Audio file to play and analyse
    pub audio_path: PathBuf,

    /// Decorative texture sampled by the shader
    pub texture_path: PathBuf,

    /// Host agent string used to pick the playback strategy
    pub user_agent: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            audio_path: PathBuf::from(DEFAULT_AUDIO_PATH),
            texture_path: PathBuf::from(DEFAULT_TEXTURE_PATH),
            user_agent: host_user_agent(),
        }
    }
}

/// Agent string describing the machine we are running on.
///
/// Apple handhelds report themselves as `iPhone` so they share the
/// strategy a browser on the same device would get.
pub fn host_user_agent() -> String {
    let os = match std::env::consts::OS {
        "ios" => "iPhone",
        other => other,
    };
    format!(
        "{}/{} ({}; {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        os,
        std::env::consts::ARCH
    )
}
