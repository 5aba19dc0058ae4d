//! Spectrum Shader - audio-reactive full-screen visual
//!
//! Plays an audio file, analyses what the speakers are hearing, and hands
//! the spectrum to a fragment shader as a texture every frame.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use spectrum_shader::audio::{AudioSource, PlaybackStrategy, SampleWindow, SpectrumAnalyzer};
use spectrum_shader::cli::Args;
use spectrum_shader::error::InitError;
use spectrum_shader::lifecycle::Phase;
use spectrum_shader::params::{AnalyserConfig, MediaConfig, RenderConfig};
use spectrum_shader::render::{DecorativeImage, RenderSystem, UniformBridge};
use spectrum_shader::render_loop::RenderLoop;
use spectrum_shader::viewport::ViewportController;

/// Everything that exists once initialization has succeeded
struct Running {
    /// Kept alive for playback; never stopped
    _audio: AudioSource,
    render_loop: RenderLoop<RenderSystem>,
    viewport: ViewportController,
}

/// Main application state
struct App {
    window: Option<Arc<Window>>,
    running: Option<Running>,
    phase: Phase,

    // Configuration
    media: MediaConfig,
    render_config: RenderConfig,
    analyser_config: AnalyserConfig,
    autostart: bool,

    /// Fatal initialization error, reported after the loop exits
    error: Option<InitError>,
}

impl App {
    fn new(args: &Args) -> Self {
        Self {
            window: None,
            running: None,
            phase: Phase::default(),
            media: args.media_config(),
            render_config: args.render_config(),
            analyser_config: AnalyserConfig::default(),
            autostart: args.autostart,
            error: None,
        }
    }

    /// Leave `Idle` and bring audio, texture and GPU up
    fn start(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if !self.phase.start() {
            return;
        }

        log::info!("Initializing...");
        window.set_title(&format!("{} - loading", self.render_config.title));

        match initialize(
            Arc::clone(&window),
            &self.media,
            &self.render_config,
            self.analyser_config.clone(),
        ) {
            Ok(running) => {
                self.phase.finish_init(true);
                self.running = Some(running);
                window.set_title(&self.render_config.title);
                window.request_redraw();
                log::info!("Running (press ESC to quit)");
            }
            Err(e) => {
                self.phase.finish_init(false);
                log::error!("Initialization failed: {}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn take_error(&mut self) -> Option<InitError> {
        self.error.take()
    }
}

/// Start audio and texture loading together, then set up the GPU
fn initialize(
    window: Arc<Window>,
    media: &MediaConfig,
    render_config: &RenderConfig,
    analyser_config: AnalyserConfig,
) -> Result<Running, InitError> {
    let samples = SampleWindow::new(analyser_config.fft_size);
    let analyzer = SpectrumAnalyzer::new(analyser_config, samples.clone())?;

    let strategy = PlaybackStrategy::for_user_agent(&media.user_agent);
    log::info!("Agent {:?} -> {:?}", media.user_agent, strategy);

    let (audio, image) = std::thread::scope(|scope| {
        let texture = scope.spawn(|| DecorativeImage::load(&media.texture_path));
        let audio = AudioSource::start(&media.audio_path, strategy, samples);
        let image = texture
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
        (audio, image)
    });
    let audio = audio?;
    let image = image?;
    log::info!("Playback started ({:?})", audio.strategy());

    let bins = analyzer.data().len();
    let size = window.inner_size();
    let render_system =
        pollster::block_on(RenderSystem::new(Arc::clone(&window), &image, bins as u32))?;

    let bridge = UniformBridge::new(
        bins,
        (size.width, size.height),
        image.descriptor(),
        render_config.time_step,
    );

    Ok(Running {
        _audio: audio,
        render_loop: RenderLoop::new(analyzer, bridge, render_system),
        viewport: ViewportController::new(size.width, size.height),
    })
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.phase.is_running() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        // Create window
        let window_attributes = Window::default_attributes()
            .with_title(format!(
                "{} - click or press Space to start",
                self.render_config.title
            ))
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        match event_loop.create_window(window_attributes) {
            Ok(window) => self.window = Some(Arc::new(window)),
            Err(e) => {
                self.phase.start();
                self.phase.finish_init(false);
                self.error = Some(e.into());
                event_loop.exit();
                return;
            }
        }

        if self.autostart {
            self.start(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(key),
                        ..
                    },
                ..
            } => match key {
                KeyCode::Escape => event_loop.exit(),
                KeyCode::Space | KeyCode::Enter => self.start(event_loop),
                _ => {}
            },
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.start(event_loop),
            WindowEvent::Resized(size) => {
                if let Some(running) = &mut self.running {
                    let (target, bridge) = running.render_loop.viewport_parts();
                    running
                        .viewport
                        .on_resize(size.width, size.height, target, bridge);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(running) = &mut self.running {
                    running.render_loop.frame();
                }
            }
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Spectrum Shader - audio-reactive full-screen visual");

    let mut app = App::new(&args);
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop
        .run_app(&mut app)
        .context("event loop terminated abnormally")?;

    if let Some(e) = app.take_error() {
        return Err(e).context("initialization failed");
    }
    Ok(())
}
