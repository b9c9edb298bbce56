//! Media classification and element description.
//!
//! A preview shows exactly one media file. Its kind is decided by the
//! lowercased extension; the DOM layer turns the resulting
//! [`MediaElementSpec`] into an `<img>` or `<video>` node.

use std::fmt;

/// What kind of element a file path should be displayed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Still image (`png`, `jpeg`, `jpg`, `gif`, `bmp`).
    Image,
    /// Video (`webm`, `mp4`, `ogv`).
    Video,
    /// Anything else. Nothing is rendered.
    Other,
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpeg", "jpg", "gif", "bmp"];
const VIDEO_EXTENSIONS: &[&str] = &["webm", "mp4", "ogv"];

/// Lowercased text after the last `.` in `path`, or `""` when there is none.
#[must_use]
pub fn file_extension(path: &str) -> String {
    path.rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

/// Classify a file path by its extension.
#[must_use]
pub fn classify(path: &str) -> MediaKind {
    kind_for_extension(&file_extension(path))
}

fn kind_for_extension(ext: &str) -> MediaKind {
    if IMAGE_EXTENSIONS.contains(&ext) {
        MediaKind::Image
    } else if VIDEO_EXTENSIONS.contains(&ext) {
        MediaKind::Video
    } else {
        MediaKind::Other
    }
}

/// Escape text the way a browser serialises a text node.
///
/// Only `&`, `<`, `>` and the no-break space are replaced; quotes are kept
/// so ordinary file names survive as element sources.
#[must_use]
pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}

/// HTML tag used for a media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaTag {
    /// `<img>`
    Img,
    /// `<video>`
    Video,
}

impl MediaTag {
    /// Tag name as passed to `document.createElement`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Img => "img",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for MediaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything needed to build the media element, independent of the DOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaElementSpec {
    /// Element tag.
    pub tag: MediaTag,
    /// Sanitised source path.
    pub src: String,
    /// Identifying `id` attribute: `"preview " + extension`.
    pub id: String,
    /// Start playing as soon as possible (video only).
    pub autoplay: bool,
    /// Restart at the end (video only).
    pub looping: bool,
    /// Show native playback controls (video only).
    pub controls: bool,
}

/// A single media file selected for preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    file: String,
    extension: String,
    kind: MediaKind,
}

impl Media {
    /// Sanitise and classify `path`.
    #[must_use]
    pub fn new(path: &str) -> Self {
        let file = html_escape(path);
        let extension = file_extension(&file);
        let kind = kind_for_extension(&extension);
        log::debug!("media {file:?} classified as {kind:?}");
        Self {
            file,
            extension,
            kind,
        }
    }

    /// Sanitised file path.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Lowercased extension.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Detected media kind.
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Value of the element's `id` attribute.
    #[must_use]
    pub fn element_id(&self) -> String {
        format!("preview {}", self.extension)
    }

    /// Describe the element to create, or `None` for [`MediaKind::Other`].
    #[must_use]
    pub fn element_spec(&self) -> Option<MediaElementSpec> {
        let tag = match self.kind {
            MediaKind::Image => MediaTag::Img,
            MediaKind::Video => MediaTag::Video,
            MediaKind::Other => {
                log::warn!("no preview element for {:?}", self.file);
                return None;
            }
        };
        let is_video = tag == MediaTag::Video;
        Some(MediaElementSpec {
            tag,
            src: self.file.clone(),
            id: self.element_id(),
            autoplay: is_video,
            looping: is_video,
            controls: is_video,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_examples() {
        assert_eq!(classify("shot.PNG"), MediaKind::Image);
        assert_eq!(classify("clip.mp4"), MediaKind::Video);
        assert_eq!(classify("notes.txt"), MediaKind::Other);
    }

    #[test]
    fn classify_every_known_extension() {
        for ext in IMAGE_EXTENSIONS {
            assert_eq!(classify(&format!("a.{ext}")), MediaKind::Image);
        }
        for ext in VIDEO_EXTENSIONS {
            let path = format!("a.{}", ext.to_uppercase());
            assert_eq!(classify(&path), MediaKind::Video);
        }
    }

    #[test]
    fn classify_uses_last_suffix_only() {
        assert_eq!(classify("archive.png.txt"), MediaKind::Other);
        assert_eq!(classify("movie.txt.WebM"), MediaKind::Video);
        assert_eq!(classify("dir.d/photo.jpeg"), MediaKind::Image);
    }

    #[test]
    fn paths_without_suffix_are_other() {
        assert_eq!(classify("README"), MediaKind::Other);
        assert_eq!(classify(""), MediaKind::Other);
        assert_eq!(classify("trailing."), MediaKind::Other);
        assert_eq!(file_extension("README"), "");
    }

    #[test]
    fn escape_html_specials() {
        assert_eq!(html_escape("<a>&b"), "&lt;a&gt;&amp;b");
        assert_eq!(html_escape("plain/path.png"), "plain/path.png");
    }

    #[test]
    fn escape_keeps_quotes() {
        assert_eq!(html_escape(r#"say "hi".png"#), r#"say "hi".png"#);
        let spec = Media::new("John's shot.png").element_spec().unwrap();
        assert_eq!(spec.src, "John's shot.png");
    }

    #[test]
    fn escape_no_break_space() {
        assert_eq!(html_escape("a\u{a0}b.png"), "a&nbsp;b.png");
        let media = Media::new("holiday\u{a0}photo.jpg");
        assert_eq!(media.file(), "holiday&nbsp;photo.jpg");
        assert_eq!(media.kind(), MediaKind::Image);
    }

    #[test]
    fn image_spec() {
        let media = Media::new("shots/Screen.JPG");
        let spec = media.element_spec().unwrap();
        assert_eq!(spec.tag, MediaTag::Img);
        assert_eq!(spec.src, "shots/Screen.JPG");
        assert_eq!(spec.id, "preview jpg");
        assert!(!spec.autoplay && !spec.looping && !spec.controls);
    }

    #[test]
    fn video_spec_enables_playback() {
        let spec = Media::new("clip.ogv").element_spec().unwrap();
        assert_eq!(spec.tag, MediaTag::Video);
        assert_eq!(spec.tag.name(), "video");
        assert!(spec.autoplay && spec.looping && spec.controls);
        assert_eq!(spec.id, "preview ogv");
    }

    #[test]
    fn other_has_no_spec() {
        let media = Media::new("notes.txt");
        assert_eq!(media.kind(), MediaKind::Other);
        assert!(media.element_spec().is_none());
    }

    #[test]
    fn source_is_sanitised() {
        let media = Media::new("a<b>.gif");
        assert_eq!(media.file(), "a&lt;b&gt;.gif");
        assert_eq!(media.kind(), MediaKind::Image);
    }
}
