use winit::window::CursorIcon;

/// Window configuration.
///
/// `width` and `height` are the back-buffer size in pixels. The window opens
/// at that size in logical pixels and the back buffer is scaled to fill it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl WindowConfig {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            ..Self::default()
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "brush".to_string(),
            width: 1280,
            height: 720,
            resizable: true,
        }
    }
}

/// System mouse cursor shapes.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Cursor {
    #[default]
    Arrow,
    /// Text insertion beam.
    Edit,
    Wait,
    CrossHair,
    /// Four-way move arrow.
    Size,
    /// Action not allowed.
    No,
    Hand,
}

impl From<Cursor> for CursorIcon {
    fn from(cursor: Cursor) -> Self {
        match cursor {
            Cursor::Arrow => CursorIcon::Default,
            Cursor::Edit => CursorIcon::Text,
            Cursor::Wait => CursorIcon::Wait,
            Cursor::CrossHair => CursorIcon::Crosshair,
            Cursor::Size => CursorIcon::Move,
            Cursor::No => CursorIcon::NotAllowed,
            Cursor::Hand => CursorIcon::Pointer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = WindowConfig::default();
        assert_eq!(c.title, "brush");
        assert_eq!((c.width, c.height), (1280, 720));
        assert!(c.resizable);
    }

    #[test]
    fn new_keeps_other_defaults() {
        let c = WindowConfig::new("Example - Painter", 640, 480);
        assert_eq!(c.title, "Example - Painter");
        assert_eq!((c.width, c.height), (640, 480));
        assert!(c.resizable);
    }

    #[test]
    fn cursors_map_to_system_icons() {
        assert_eq!(CursorIcon::from(Cursor::Arrow), CursorIcon::Default);
        assert_eq!(CursorIcon::from(Cursor::Edit), CursorIcon::Text);
        assert_eq!(CursorIcon::from(Cursor::Hand), CursorIcon::Pointer);
        assert_eq!(CursorIcon::from(Cursor::No), CursorIcon::NotAllowed);
    }
}
