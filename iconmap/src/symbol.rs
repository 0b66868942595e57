//! The authoritative symbol enumeration the composite mapping must cover.
//!
//! Values are glyph code points. Members below [`MODERN_RANGE_START`] carry
//! the very old WinJS-era points and are translated before catalog lookups;
//! members at or above it already use the modern Segoe range.
//! [`Symbol::Placeholder`] is the one member that is deliberately left
//! unmapped; treat any other uncovered member as an error, never extend the
//! exception.

use std::fmt::Display;

/// First code point of the modern Segoe symbol range.
pub const MODERN_RANGE_START: u32 = 0xE700;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Symbol {
    Previous = 0xE100,
    Next = 0xE101,
    Play = 0xE102,
    Pause = 0xE103,
    Edit = 0xE104,
    Save = 0xE105,
    Clear = 0xE106,
    Delete = 0xE107,
    Remove = 0xE108,
    Add = 0xE109,
    Cancel = 0xE10A,
    Accept = 0xE10B,
    More = 0xE10C,
    Redo = 0xE10D,
    Undo = 0xE10E,
    Home = 0xE10F,
    Up = 0xE110,
    Forward = 0xE111,
    Back = 0xE112,
    Favorite = 0xE113,
    Camera = 0xE114,
    Setting = 0xE115,
    Video = 0xE116,
    Sync = 0xE117,
    Download = 0xE118,
    Mail = 0xE119,
    Find = 0xE11A,
    Help = 0xE11B,
    Upload = 0xE11C,
    Placeholder = 0xE18A,
    GlobalNavigationButton = 0xE700,
    ChevronDown = 0xE70D,
    ChevronUp = 0xE70E,
    People = 0xE716,
    Phone = 0xE717,
    Pin = 0xE718,
    Stop = 0xE71A,
    Link = 0xE71B,
    Filter = 0xE71C,
    Zoom = 0xE71E,
    ZoomOut = 0xE71F,
    Microphone = 0xE720,
    Attach = 0xE723,
    Send = 0xE724,
    Refresh = 0xE72C,
    Share = 0xE72D,
    Lock = 0xE72E,
    CheckMark = 0xE73E,
    Print = 0xE749,
    Contact = 0xE77B,
    Calendar = 0xE787,
    Page = 0xE7C3,
    View = 0xE890,
    Switch = 0xE8AB,
    Copy = 0xE8C8,
}

impl Symbol {
    /// Every member, in declaration order.
    pub fn all() -> &'static [Symbol] {
        &[
            Symbol::Previous,
            Symbol::Next,
            Symbol::Play,
            Symbol::Pause,
            Symbol::Edit,
            Symbol::Save,
            Symbol::Clear,
            Symbol::Delete,
            Symbol::Remove,
            Symbol::Add,
            Symbol::Cancel,
            Symbol::Accept,
            Symbol::More,
            Symbol::Redo,
            Symbol::Undo,
            Symbol::Home,
            Symbol::Up,
            Symbol::Forward,
            Symbol::Back,
            Symbol::Favorite,
            Symbol::Camera,
            Symbol::Setting,
            Symbol::Video,
            Symbol::Sync,
            Symbol::Download,
            Symbol::Mail,
            Symbol::Find,
            Symbol::Help,
            Symbol::Upload,
            Symbol::Placeholder,
            Symbol::GlobalNavigationButton,
            Symbol::ChevronDown,
            Symbol::ChevronUp,
            Symbol::People,
            Symbol::Phone,
            Symbol::Pin,
            Symbol::Stop,
            Symbol::Link,
            Symbol::Filter,
            Symbol::Zoom,
            Symbol::ZoomOut,
            Symbol::Microphone,
            Symbol::Attach,
            Symbol::Send,
            Symbol::Refresh,
            Symbol::Share,
            Symbol::Lock,
            Symbol::CheckMark,
            Symbol::Print,
            Symbol::Contact,
            Symbol::Calendar,
            Symbol::Page,
            Symbol::View,
            Symbol::Switch,
            Symbol::Copy,
        ]
    }

    pub fn value(&self) -> u32 {
        *self as u32
    }

    /// Whether the raw value predates the modern Segoe range.
    pub fn is_legacy_value(&self) -> bool {
        self.value() < MODERN_RANGE_START
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Previous => "Previous",
            Symbol::Next => "Next",
            Symbol::Play => "Play",
            Symbol::Pause => "Pause",
            Symbol::Edit => "Edit",
            Symbol::Save => "Save",
            Symbol::Clear => "Clear",
            Symbol::Delete => "Delete",
            Symbol::Remove => "Remove",
            Symbol::Add => "Add",
            Symbol::Cancel => "Cancel",
            Symbol::Accept => "Accept",
            Symbol::More => "More",
            Symbol::Redo => "Redo",
            Symbol::Undo => "Undo",
            Symbol::Home => "Home",
            Symbol::Up => "Up",
            Symbol::Forward => "Forward",
            Symbol::Back => "Back",
            Symbol::Favorite => "Favorite",
            Symbol::Camera => "Camera",
            Symbol::Setting => "Setting",
            Symbol::Video => "Video",
            Symbol::Sync => "Sync",
            Symbol::Download => "Download",
            Symbol::Mail => "Mail",
            Symbol::Find => "Find",
            Symbol::Help => "Help",
            Symbol::Upload => "Upload",
            Symbol::Placeholder => "Placeholder",
            Symbol::GlobalNavigationButton => "GlobalNavigationButton",
            Symbol::ChevronDown => "ChevronDown",
            Symbol::ChevronUp => "ChevronUp",
            Symbol::People => "People",
            Symbol::Phone => "Phone",
            Symbol::Pin => "Pin",
            Symbol::Stop => "Stop",
            Symbol::Link => "Link",
            Symbol::Filter => "Filter",
            Symbol::Zoom => "Zoom",
            Symbol::ZoomOut => "ZoomOut",
            Symbol::Microphone => "Microphone",
            Symbol::Attach => "Attach",
            Symbol::Send => "Send",
            Symbol::Refresh => "Refresh",
            Symbol::Share => "Share",
            Symbol::Lock => "Lock",
            Symbol::CheckMark => "CheckMark",
            Symbol::Print => "Print",
            Symbol::Contact => "Contact",
            Symbol::Calendar => "Calendar",
            Symbol::Page => "Page",
            Symbol::View => "View",
            Symbol::Switch => "Switch",
            Symbol::Copy => "Copy",
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
