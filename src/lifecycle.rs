//! Whole-system lifecycle.

/// Where the visualizer is in its life.
///
/// There is no way back from `Running` or `Failed`; the process ends there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the user to start
    #[default]
    Idle,
    /// Audio, texture and GPU setup in progress
    Initializing,
    /// Render loop active
    Running,
    /// Initialization failed; nothing more will happen
    Failed,
}

impl Phase {
    /// Begin initialization. Returns false (and does nothing) unless idle.
    pub fn start(&mut self) -> bool {
        if *self == Phase::Idle {
            *self = Phase::Initializing;
            true
        } else {
            false
        }
    }

    /// Record the outcome of initialization
    pub fn finish_init(&mut self, ok: bool) {
        if *self == Phase::Initializing {
            *self = if ok { Phase::Running } else { Phase::Failed };
        }
    }

    pub fn is_running(self) -> bool {
        self == Phase::Running
    }
}
