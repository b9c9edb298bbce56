//! CSS declarations for the perspective stage and the media transform.

use std::fmt::Write;

use glam::Vec3;

/// Browser prefixes each transform-family property is also written with.
const PREFIXES: &[&str] = &["", "-webkit-"];

/// Ordered list of CSS property/value pairs.
pub type StyleDeclarations = Vec<(String, String)>;

fn push_prefixed(decls: &mut StyleDeclarations, property: &str, value: &str) {
    for prefix in PREFIXES {
        decls.push((format!("{prefix}{property}"), value.to_owned()));
    }
}

/// Declarations that turn the stage element into a perspective container.
#[must_use]
pub fn stage_style(perspective: f32) -> StyleDeclarations {
    let mut decls = StyleDeclarations::new();
    push_prefixed(&mut decls, "perspective", &format!("{perspective}px"));
    push_prefixed(&mut decls, "perspective-origin", "center");
    push_prefixed(&mut decls, "transform-origin", "0 0");
    // zero translate promotes the stage to its own compositing layer
    push_prefixed(&mut decls, "transform", "translateZ(0px)");
    push_prefixed(&mut decls, "user-select", "none");
    decls.push(("overflow".to_owned(), "hidden".to_owned()));
    decls.push(("position".to_owned(), "relative".to_owned()));
    decls
}

/// Declarations that make the media element a transform target nested in
/// the stage.
#[must_use]
pub fn media_style() -> StyleDeclarations {
    let mut decls = StyleDeclarations::new();
    decls.push(("position".to_owned(), "absolute".to_owned()));
    decls.push(("left".to_owned(), "0".to_owned()));
    decls.push(("top".to_owned(), "0".to_owned()));
    push_prefixed(&mut decls, "transform-origin", "0 0");
    push_prefixed(&mut decls, "transform-style", "preserve-3d");
    push_prefixed(&mut decls, "user-select", "none");
    decls
}

/// Offset that places the media's center on the stage's center.
///
/// Computed as `(-stage/2 + media/2)` per axis with zero depth; the media is
/// drawn at `position - registration`.
#[must_use]
pub fn registration_point(
    stage_size: glam::Vec2,
    media_size: glam::Vec2,
) -> Vec3 {
    let offset = -stage_size / 2.0 + media_size / 2.0;
    offset.extend(0.0)
}

/// Everything the media element's `transform` depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaTransform {
    /// Camera position in CSS pixels.
    pub position: Vec3,
    /// Camera rotation in degrees.
    pub rotation: Vec3,
    /// See [`registration_point`].
    pub registration: Vec3,
    /// Point rotation pivots around, in the media's own coordinates.
    pub pivot: Vec3,
}

impl MediaTransform {
    /// Render as a CSS `transform` value.
    ///
    /// Translation to `position - registration` comes first, then the
    /// rotation is applied around `pivot`.
    #[must_use]
    pub fn to_css(&self) -> String {
        let origin = self.position - self.registration;
        let mut css = String::with_capacity(160);
        write_translate(&mut css, origin);
        css.push(' ');
        write_translate(&mut css, self.pivot);
        let _ = write!(
            css,
            " rotateX({}deg) rotateY({}deg) rotateZ({}deg) ",
            self.rotation.x, self.rotation.y, self.rotation.z
        );
        write_translate(&mut css, -self.pivot);
        css
    }
}

fn write_translate(css: &mut String, v: Vec3) {
    let _ = write!(css, "translate3d({}px, {}px, {}px)", v.x, v.y, v.z);
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    #[test]
    fn stage_style_has_prefixed_perspective() {
        let decls = stage_style(800.0);
        let get = |p: &str| {
            decls
                .iter()
                .find(|(k, _)| k == p)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("perspective"), Some("800px"));
        assert_eq!(get("-webkit-perspective"), Some("800px"));
        assert_eq!(get("perspective-origin"), Some("center"));
        assert_eq!(get("transform-origin"), Some("0 0"));
        assert_eq!(get("transform"), Some("translateZ(0px)"));
        assert_eq!(get("-webkit-user-select"), Some("none"));
        assert_eq!(get("overflow"), Some("hidden"));
        assert_eq!(get("-webkit-overflow"), None);
    }

    #[test]
    fn registration_centers_media() {
        let reg = registration_point(
            Vec2::new(1000.0, 800.0),
            Vec2::new(400.0, 300.0),
        );
        assert_eq!(reg, Vec3::new(-300.0, -250.0, 0.0));
    }

    #[test]
    fn transform_css_layout() {
        let t = MediaTransform {
            position: Vec3::new(50.0, 20.0, -120.0),
            rotation: Vec3::new(1.5, -2.0, 0.0),
            registration: Vec3::new(-300.0, -250.0, 0.0),
            pivot: Vec3::new(200.0, 150.0, 0.0),
        };
        assert_eq!(
            t.to_css(),
            "translate3d(350px, 270px, -120px) \
             translate3d(200px, 150px, 0px) \
             rotateX(1.5deg) rotateY(-2deg) rotateZ(0deg) \
             translate3d(-200px, -150px, -0px)"
        );
    }
}
