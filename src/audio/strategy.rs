//! Playback strategy selection.

/// Device families that cannot route a streamed element into the
/// analysis graph and must decode the whole file up front.
const BUFFER_DECODE_DEVICES: [&str; 3] = ["iPad", "iPhone", "iPod"];

/// How the audio file reaches the output device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStrategy {
    /// Decode the entire file into memory, then play the buffer
    BufferDecode,

    /// Decode incrementally while the device pulls samples
    StreamedElement,
}

impl PlaybackStrategy {
    /// Pick the strategy for a host agent string.
    ///
    /// Pure and total: any string maps to exactly one strategy.
    pub fn for_user_agent(user_agent: &str) -> Self {
        if BUFFER_DECODE_DEVICES
            .iter()
            .any(|device| user_agent.contains(device))
        {
            Self::BufferDecode
        } else {
            Self::StreamedElement
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apple_handhelds_decode_into_buffer() {
        let agents = [
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15",
            "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X)",
            "Mozilla/5.0 (iPod touch; CPU iPhone OS 15_0 like Mac OS X)",
            "spectrum-shader/0.1.0 (iPhone; aarch64)",
        ];
        for agent in agents {
            assert_eq!(
                PlaybackStrategy::for_user_agent(agent),
                PlaybackStrategy::BufferDecode,
                "agent: {}",
                agent
            );
        }
    }

    #[test]
    fn test_everything_else_streams() {
        let agents = [
            "",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)",
            "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/120.0",
            "Mozilla/5.0 (Linux; Android 14; Pixel 8)",
            "spectrum-shader/0.1.0 (linux; x86_64)",
            "iphone lowercase does not count",
        ];
        for agent in agents {
            assert_eq!(
                PlaybackStrategy::for_user_agent(agent),
                PlaybackStrategy::StreamedElement,
                "agent: {}",
                agent
            );
        }
    }

    #[test]
    fn test_selection_is_deterministic() {
        let agent = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X)";
        let first = PlaybackStrategy::for_user_agent(agent);
        for _ in 0..10 {
            assert_eq!(PlaybackStrategy::for_user_agent(agent), first);
        }
    }
}
