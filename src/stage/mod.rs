//! The perspective stage and its render surface.
//!
//! [`Stage`] owns a [`Surface`] (the stage container plus the media element
//! nested inside it). Creation writes the perspective style once;
//! [`Stage::update`] is caller-driven, typically once per animation frame,
//! and writes the camera's current transform onto the media element.

/// CSS declarations and the media transform string.
pub mod transform;

use glam::{Vec2, Vec3};

use crate::camera::CameraSource;
use crate::options::PreviewOptions;
use transform::{media_style, registration_point, stage_style, MediaTransform};

/// Minimal view of the DOM the stage renders into.
///
/// The browser implementation lives in `web`; tests use a recording mock.
pub trait Surface {
    /// Set one CSS property on the stage container.
    fn set_stage_style(&mut self, property: &str, value: &str);

    /// Set one CSS property on the media element.
    fn set_media_style(&mut self, property: &str, value: &str);

    /// Current rendered size of the stage container.
    fn stage_size(&self) -> Vec2;

    /// Current rendered size of the media element.
    fn media_size(&self) -> Vec2;

    /// Size of the window the pointer coordinates are relative to.
    fn viewport_size(&self) -> Vec2;
}

/// Perspective container that renders a camera onto a media element.
#[derive(Debug)]
pub struct Stage<S: Surface> {
    surface: S,
    round_places: u32,
    last_transform: Option<String>,
}

impl<S: Surface> Stage<S> {
    /// Wire the perspective style onto `surface` and nest the media as a
    /// transform target.
    pub fn create(mut surface: S, options: &PreviewOptions) -> Self {
        for (property, value) in stage_style(options.stage.perspective) {
            surface.set_stage_style(&property, &value);
        }
        for (property, value) in media_style() {
            surface.set_media_style(&property, &value);
        }
        log::debug!(
            "stage created with perspective {}px",
            options.stage.perspective
        );
        Self {
            surface,
            round_places: options.camera.round_places,
            last_transform: None,
        }
    }

    /// The underlying surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The underlying surface, mutable.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Transform most recently written to the media element.
    pub fn last_transform(&self) -> Option<&str> {
        self.last_transform.as_deref()
    }

    /// Compute this frame's transform without writing it.
    ///
    /// This reads the camera's per-frame values, so a smoothed camera takes
    /// one easing step per call exactly as in [`Stage::update`]. Calling both
    /// for the same frame advances the easing twice.
    pub fn frame_transform(
        &self,
        camera: &mut dyn CameraSource,
    ) -> MediaTransform {
        let mut position = camera.frame_position();
        let mut rotation = camera.frame_rotation();
        let _ = position.round(self.round_places);
        let _ = rotation.round(self.round_places);

        let media_size = self.surface.media_size();
        MediaTransform {
            position: position.into(),
            rotation: rotation.into(),
            registration: registration_point(
                self.surface.stage_size(),
                media_size,
            ),
            pivot: center_of(media_size),
        }
    }

    /// Re-center the registration point and write the camera's current
    /// transform to the media element. Skips the write when nothing changed.
    pub fn update(&mut self, camera: &mut dyn CameraSource) {
        let css = self.frame_transform(camera).to_css();
        if self.last_transform.as_deref() == Some(css.as_str()) {
            return;
        }
        self.surface.set_media_style("transform", &css);
        self.surface.set_media_style("-webkit-transform", &css);
        self.last_transform = Some(css);
    }

    /// Consume the stage and return its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

/// Depth-free center of a size, as used for rotation pivots.
#[must_use]
pub fn center_of(size: Vec2) -> Vec3 {
    (size / 2.0).extend(0.0)
}
