//! Window resize handling.

use crate::render::UniformBridge;
use crate::render_loop::FrameTarget;

/// Current drawing surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Applies resize notifications to the surface and `iResolution`
#[derive(Debug, Clone)]
pub struct ViewportController {
    viewport: Viewport,
}

impl ViewportController {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport { width, height },
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Handle one resize notification. Every notification is applied;
    /// there is no debouncing.
    pub fn on_resize<T: FrameTarget>(
        &mut self,
        width: u32,
        height: u32,
        target: &mut T,
        bridge: &mut UniformBridge,
    ) {
        self.viewport = Viewport { width, height };
        target.resize_surface(width, height);
        bridge.resize(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_loop::tests::render_loop;
    use glam::Vec2;

    #[test]
    fn test_resize_updates_surface_and_resolution() {
        let (mut render_loop, _window) = render_loop();
        let mut controller = ViewportController::new(1280, 720);

        let (target, bridge) = render_loop.viewport_parts();
        controller.on_resize(800, 600, target, bridge);

        assert_eq!(controller.viewport(), Viewport { width: 800, height: 600 });
        assert_eq!(render_loop.target().surface_size(), (800, 600));
        assert_eq!(
            render_loop.bridge().uniforms().resolution(),
            Vec2::new(800.0, 600.0)
        );
    }

    #[test]
    fn test_repeated_resize_matches_single_resize() {
        let (mut once, _w1) = render_loop();
        let (mut twice, _w2) = render_loop();
        let mut c1 = ViewportController::new(1280, 720);
        let mut c2 = ViewportController::new(1280, 720);

        let (target, bridge) = once.viewport_parts();
        c1.on_resize(640, 480, target, bridge);
        for _ in 0..2 {
            let (target, bridge) = twice.viewport_parts();
            c2.on_resize(640, 480, target, bridge);
        }

        assert_eq!(c1.viewport(), c2.viewport());
        assert_eq!(once.target().surface_size(), twice.target().surface_size());
        assert_eq!(
            once.bridge().uniforms().resolution(),
            twice.bridge().uniforms().resolution()
        );
    }

    #[test]
    fn test_every_notification_is_applied() {
        let (mut render_loop, _window) = render_loop();
        let mut controller = ViewportController::new(1280, 720);

        for (w, h) in [(100, 100), (0, 0), (1920, 1080)] {
            let (target, bridge) = render_loop.viewport_parts();
            controller.on_resize(w, h, target, bridge);
            assert_eq!(render_loop.target().surface_size(), (w, h));
            assert_eq!(
                render_loop.bridge().uniforms().resolution(),
                Vec2::new(w as f32, h as f32)
            );
        }
    }

    #[test]
    fn test_resize_between_frames_is_seen_by_next_draw() {
        let (mut render_loop, _window) = render_loop();
        let mut controller = ViewportController::new(1280, 720);

        render_loop.frame();
        let (target, bridge) = render_loop.viewport_parts();
        controller.on_resize(800, 600, target, bridge);
        render_loop.frame();

        let packed = render_loop.bridge().uniforms().shader_uniforms();
        assert_eq!(packed.i_resolution, [800.0, 600.0]);
        assert_eq!(render_loop.frames(), 2);
    }
}
