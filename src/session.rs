//! One preview session: camera, input behaviour and stage.
//!
//! The session is the single place where input meets the camera and the
//! camera meets the stage. Event handlers call
//! [`handle_event`](PreviewSession::handle_event); the render loop calls
//! [`update`](PreviewSession::update). Both run on the same thread, so a
//! camera change made by an event is visible to the next update.

use crate::camera::{CameraSource, DirectCamera, SmoothedCamera};
use crate::command::CameraCommand;
use crate::input::{InputBehaviour, InputEvent};
use crate::options::PreviewOptions;
use crate::stage::{Stage, Surface};

/// Owns everything a single preview needs.
pub struct PreviewSession<S: Surface> {
    camera: Box<dyn CameraSource>,
    input: InputBehaviour,
    stage: Stage<S>,
    running: bool,
}

impl<S: Surface> PreviewSession<S> {
    /// Build a session around an existing stage and camera.
    ///
    /// The session starts stopped; call [`start`](Self::start) before
    /// feeding events.
    pub fn new(
        stage: Stage<S>,
        camera: Box<dyn CameraSource>,
        options: &PreviewOptions,
    ) -> Self {
        Self {
            camera,
            input: InputBehaviour::from_options(options),
            stage,
            running: false,
        }
    }

    /// Create the stage on `surface` and pick the camera from
    /// `options.camera.smoothing`.
    pub fn with_surface(surface: S, options: &PreviewOptions) -> Self {
        let camera: Box<dyn CameraSource> = if options.camera.smoothing {
            Box::new(SmoothedCamera::from_options(&options.camera))
        } else {
            Box::new(DirectCamera::new())
        };
        log::debug!(
            "preview session with {} camera",
            if options.camera.smoothing { "smoothed" } else { "direct" }
        );
        Self::new(Stage::create(surface, options), camera, options)
    }

    /// Begin accepting input.
    pub fn start(&mut self) {
        if !self.running {
            log::info!("preview session started");
        }
        self.running = true;
    }

    /// Stop accepting input and drop any drag in progress.
    pub fn stop(&mut self) {
        if self.running {
            log::info!("preview session stopped");
        }
        self.running = false;
        self.input.release();
    }

    /// Whether input is currently accepted.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Feed one input event. Ignored while stopped.
    ///
    /// Returns the command that was applied, if any.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
    ) -> Option<CameraCommand> {
        if !self.running {
            return None;
        }
        let viewport = self.stage.surface().viewport_size();
        let command =
            self.input
                .handle_event(event, self.camera.position(), viewport)?;
        self.execute(command);
        Some(command)
    }

    /// Apply a command directly, bypassing input.
    pub fn execute(&mut self, command: CameraCommand) {
        command.apply(self.camera.as_mut());
    }

    /// Render the camera's current state onto the stage.
    pub fn update(&mut self) {
        self.stage.update(self.camera.as_mut());
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &dyn CameraSource {
        self.camera.as_ref()
    }

    /// The input behaviour.
    #[must_use]
    pub fn input(&self) -> &InputBehaviour {
        &self.input
    }

    /// The stage.
    #[must_use]
    pub fn stage(&self) -> &Stage<S> {
        &self.stage
    }

    /// The stage, mutable.
    pub fn stage_mut(&mut self) -> &mut Stage<S> {
        &mut self.stage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{MouseButton, WheelDelta};
    use crate::stage::mock::MockSurface;
    use crate::util::vector::Vector3;

    fn direct_session() -> PreviewSession<MockSurface> {
        let mut options = PreviewOptions::default();
        options.camera.smoothing = false;
        let mut session =
            PreviewSession::with_surface(MockSurface::new(), &options);
        session.start();
        session
    }

    fn left_drag(
        session: &mut PreviewSession<MockSurface>,
        from: (f32, f32),
        to: (f32, f32),
    ) {
        let _ = session.handle_event(&InputEvent::MouseDown {
            button: MouseButton::Left,
            x: from.0,
            y: from.1,
        });
        let _ =
            session.handle_event(&InputEvent::MouseMove { x: to.0, y: to.1 });
        let _ = session.handle_event(&InputEvent::MouseUp {
            button: MouseButton::Left,
        });
    }

    #[test]
    fn stopped_session_ignores_input() {
        let mut session = direct_session();
        session.stop();
        let wheel = InputEvent::Wheel {
            delta: WheelDelta::Raw(120.0),
        };
        assert_eq!(session.handle_event(&wheel), None);
        assert_eq!(session.camera().position(), Vector3::ZERO);
    }

    #[test]
    fn wheel_then_update_moves_media() {
        let mut session = direct_session();
        let wheel = InputEvent::Wheel {
            delta: WheelDelta::Raw(120.0),
        };
        assert_eq!(
            session.handle_event(&wheel),
            Some(CameraCommand::Zoom { amount: 120.0 })
        );
        assert_eq!(session.camera().position().z, 120.0);
        session.update();
        let css = session.stage().last_transform().unwrap();
        assert!(css.starts_with("translate3d(300px, 250px, 120px)"), "{css}");
    }

    #[test]
    fn second_drag_starts_from_first_drag_end() {
        let mut session = direct_session();
        left_drag(&mut session, (100.0, 100.0), (150.0, 120.0));
        assert_eq!(session.camera().position(), Vector3::new(50.0, 20.0, 0.0));
        left_drag(&mut session, (0.0, 0.0), (-10.0, 5.0));
        assert_eq!(session.camera().position(), Vector3::new(40.0, 25.0, 0.0));
    }

    #[test]
    fn middle_drag_uses_surface_viewport() {
        let mut session = direct_session();
        let _ = session.handle_event(&InputEvent::MouseDown {
            button: MouseButton::Middle,
            x: 0.0,
            y: 0.0,
        });
        // viewport 1200x900 → center (600, 450)
        let _ = session
            .handle_event(&InputEvent::MouseMove { x: 600.0, y: 350.0 });
        let r = session.camera().rotation();
        assert!((r.x - 1.0).abs() < 1e-5 && r.y.abs() < 1e-6);
    }

    #[test]
    fn escape_resets_any_state() {
        let mut session = direct_session();
        session.execute(CameraCommand::Move { x: 3.0, y: 4.0 });
        session.execute(CameraCommand::Rotate { x: 1.0, y: 1.0, z: 1.0 });
        session.execute(CameraCommand::Zoom { amount: -400.0 });
        let _ = session.handle_event(&InputEvent::KeyDown {
            key: "Escape".into(),
            key_code: 27,
        });
        assert_eq!(session.camera().position(), Vector3::ZERO);
        assert_eq!(session.camera().rotation(), Vector3::ZERO);
    }

    #[test]
    fn stop_releases_held_button() {
        let mut session = direct_session();
        let _ = session.handle_event(&InputEvent::MouseDown {
            button: MouseButton::Left,
            x: 0.0,
            y: 0.0,
        });
        session.stop();
        assert_eq!(session.input().pressed_button(), MouseButton::None);
        session.start();
        let mv = InputEvent::MouseMove { x: 9.0, y: 9.0 };
        assert_eq!(session.handle_event(&mv), None);
    }

    #[test]
    fn smoothing_option_selects_smoothed_camera() {
        let options = PreviewOptions::default();
        let mut session =
            PreviewSession::with_surface(MockSurface::new(), &options);
        session.start();
        session.execute(CameraCommand::Move { x: 100.0, y: 0.0 });
        session.update();
        let css = session.stage().last_transform().unwrap();
        // first smoothed frame is a quarter of the way: 25 + 300
        assert!(css.starts_with("translate3d(325px, 250px, 0px)"), "{css}");
    }
}
