//! Bundled catalog tables.
//!
//! Each table is a `(code point, canonical name)` list extracted from the
//! upstream icon set metadata. Table order is the catalog enumeration order;
//! keep new entries in ascending code point order.

use crate::catalog::IconSet;

pub(crate) fn entries(icon_set: IconSet) -> &'static [(u32, &'static str)] {
    match icon_set {
        IconSet::Undefined => &[],
        IconSet::FluentUISystemFilled => FLUENT_UI_SYSTEM_FILLED,
        IconSet::FluentUISystemRegular => FLUENT_UI_SYSTEM_REGULAR,
        IconSet::LineAwesomeBrands => LINE_AWESOME_BRANDS,
        IconSet::LineAwesomeRegular => LINE_AWESOME_REGULAR,
        IconSet::LineAwesomeSolid => LINE_AWESOME_SOLID,
        // Segoe Fluent retained the Segoe MDL2 code points, so the two sets
        // share one table.
        IconSet::SegoeFluent | IconSet::SegoeMDL2Assets => SEGOE,
        IconSet::SegoeUISymbol => SEGOE_UI_SYMBOL,
    }
}

static SEGOE: &[(u32, &str)] = &[
    (0xE700, "GlobalNavigationButton"),
    (0xE706, "Brightness"),
    (0xE70D, "ChevronDown"),
    (0xE70E, "ChevronUp"),
    (0xE70F, "Edit"),
    (0xE710, "Add"),
    (0xE711, "Cancel"),
    (0xE712, "More"),
    (0xE713, "Settings"),
    (0xE714, "Video"),
    (0xE715, "Mail"),
    (0xE716, "People"),
    (0xE717, "Phone"),
    (0xE718, "Pin"),
    (0xE719, "Shop"),
    (0xE71A, "Stop"),
    (0xE71B, "Link"),
    (0xE71C, "Filter"),
    (0xE71E, "Zoom"),
    (0xE71F, "ZoomOut"),
    (0xE720, "Microphone"),
    (0xE721, "Search"),
    (0xE722, "Camera"),
    (0xE723, "Attach"),
    (0xE724, "Send"),
    (0xE72A, "Forward"),
    (0xE72B, "Back"),
    (0xE72C, "Refresh"),
    (0xE72D, "Share"),
    (0xE72E, "Lock"),
    (0xE734, "FavoriteStar"),
    (0xE738, "Remove"),
    (0xE73E, "CheckMark"),
    (0xE749, "Print"),
    (0xE74A, "Up"),
    (0xE74D, "Delete"),
    (0xE74E, "Save"),
    (0xE768, "Play"),
    (0xE769, "Pause"),
    (0xE76B, "ChevronLeft"),
    (0xE76C, "ChevronRight"),
    (0xE77B, "Contact"),
    (0xE787, "Calendar"),
    (0xE7A6, "Redo"),
    (0xE7A7, "Undo"),
    (0xE7C3, "Page"),
    (0xE80F, "Home"),
    (0xE890, "View"),
    (0xE894, "Clear"),
    (0xE895, "Sync"),
    (0xE896, "Download"),
    (0xE897, "Help"),
    (0xE898, "Upload"),
    (0xE8AB, "Switch"),
    (0xE8C8, "Copy"),
    (0xE8E5, "OpenFile"),
    (0xE8FB, "Accept"),
];

// The very old WinJS-era symbol range.
static SEGOE_UI_SYMBOL: &[(u32, &str)] = &[
    (0xE100, "Previous"),
    (0xE101, "Next"),
    (0xE102, "Play"),
    (0xE103, "Pause"),
    (0xE104, "Edit"),
    (0xE105, "Save"),
    (0xE106, "Clear"),
    (0xE107, "Delete"),
    (0xE108, "Remove"),
    (0xE109, "Add"),
    (0xE10A, "Cancel"),
    (0xE10B, "Accept"),
    (0xE10C, "More"),
    (0xE10D, "Redo"),
    (0xE10E, "Undo"),
    (0xE10F, "Home"),
    (0xE110, "Up"),
    (0xE111, "Forward"),
    (0xE112, "Back"),
    (0xE113, "Favorite"),
    (0xE114, "Camera"),
    (0xE115, "Setting"),
    (0xE116, "Video"),
    (0xE117, "Sync"),
    (0xE118, "Download"),
    (0xE119, "Mail"),
    (0xE11A, "Find"),
    (0xE11B, "Help"),
    (0xE11C, "Upload"),
    (0xE18A, "Placeholder"),
];

static FLUENT_UI_SYSTEM_REGULAR: &[(u32, &str)] = &[
    (0xF101, "ic_fluent_add_20_regular"),
    (0xF102, "ic_fluent_add_24_regular"),
    (0xF103, "ic_fluent_arrow_clockwise_20_regular"),
    (0xF104, "ic_fluent_arrow_download_20_regular"),
    (0xF105, "ic_fluent_arrow_left_20_regular"),
    (0xF106, "ic_fluent_arrow_left_24_regular"),
    (0xF107, "ic_fluent_arrow_redo_20_regular"),
    (0xF108, "ic_fluent_arrow_right_20_regular"),
    (0xF109, "ic_fluent_arrow_swap_20_regular"),
    (0xF10A, "ic_fluent_arrow_sync_20_regular"),
    (0xF10B, "ic_fluent_arrow_undo_20_regular"),
    (0xF10C, "ic_fluent_arrow_up_20_regular"),
    (0xF10D, "ic_fluent_arrow_upload_20_regular"),
    (0xF10E, "ic_fluent_attach_20_regular"),
    (0xF10F, "ic_fluent_brightness_high_20_regular"),
    (0xF110, "ic_fluent_calendar_ltr_20_regular"),
    (0xF111, "ic_fluent_call_20_regular"),
    (0xF112, "ic_fluent_camera_20_regular"),
    (0xF113, "ic_fluent_cart_20_regular"),
    (0xF114, "ic_fluent_checkmark_20_regular"),
    (0xF115, "ic_fluent_checkmark_circle_20_regular"),
    (0xF116, "ic_fluent_chevron_down_20_regular"),
    (0xF117, "ic_fluent_chevron_down_24_regular"),
    (0xF118, "ic_fluent_chevron_left_20_regular"),
    (0xF119, "ic_fluent_chevron_right_20_regular"),
    (0xF11A, "ic_fluent_chevron_up_20_regular"),
    (0xF11B, "ic_fluent_copy_20_regular"),
    (0xF11C, "ic_fluent_delete_20_regular"),
    (0xF11D, "ic_fluent_dismiss_20_regular"),
    (0xF11E, "ic_fluent_dismiss_circle_20_regular"),
    (0xF11F, "ic_fluent_document_20_regular"),
    (0xF120, "ic_fluent_edit_20_regular"),
    (0xF121, "ic_fluent_eye_20_regular"),
    (0xF122, "ic_fluent_filter_20_regular"),
    (0xF123, "ic_fluent_folder_open_20_regular"),
    (0xF124, "ic_fluent_home_20_regular"),
    (0xF125, "ic_fluent_home_24_regular"),
    (0xF126, "ic_fluent_link_20_regular"),
    (0xF127, "ic_fluent_lock_closed_20_regular"),
    (0xF128, "ic_fluent_mail_20_regular"),
    (0xF129, "ic_fluent_mic_20_regular"),
    (0xF12A, "ic_fluent_more_horizontal_20_regular"),
    (0xF12B, "ic_fluent_navigation_20_regular"),
    (0xF12C, "ic_fluent_pause_20_regular"),
    (0xF12D, "ic_fluent_people_20_regular"),
    (0xF12E, "ic_fluent_person_20_regular"),
    (0xF12F, "ic_fluent_pin_20_regular"),
    (0xF130, "ic_fluent_play_20_regular"),
    (0xF131, "ic_fluent_print_16_regular"),
    (0xF132, "ic_fluent_print_24_regular"),
    (0xF133, "ic_fluent_question_circle_20_regular"),
    (0xF134, "ic_fluent_save_20_regular"),
    (0xF135, "ic_fluent_search_20_regular"),
    (0xF136, "ic_fluent_send_20_regular"),
    (0xF137, "ic_fluent_settings_20_regular"),
    (0xF138, "ic_fluent_share_20_regular"),
    (0xF139, "ic_fluent_star_20_regular"),
    (0xF13A, "ic_fluent_star_24_regular"),
    (0xF13B, "ic_fluent_stop_20_regular"),
    (0xF13C, "ic_fluent_subtract_20_regular"),
    (0xF13D, "ic_fluent_video_20_regular"),
    (0xF13E, "ic_fluent_zoom_in_20_regular"),
    (0xF13F, "ic_fluent_zoom_out_20_regular"),
];

static FLUENT_UI_SYSTEM_FILLED: &[(u32, &str)] = &[
    (0xF201, "ic_fluent_checkmark_20_filled"),
    (0xF202, "ic_fluent_heart_16_filled"),
    (0xF203, "ic_fluent_heart_24_filled"),
    (0xF204, "ic_fluent_home_16_filled"),
    (0xF205, "ic_fluent_home_24_filled"),
    (0xF206, "ic_fluent_home_32_filled"),
    (0xF207, "ic_fluent_pin_20_filled"),
    (0xF208, "ic_fluent_star_20_filled"),
    (0xF209, "ic_fluent_star_24_filled"),
];

static LINE_AWESOME_SOLID: &[(u32, &str)] = &[
    (0xF002, "search"),
    (0xF004, "heart"),
    (0xF005, "star"),
    (0xF007, "user"),
    (0xF00C, "check"),
    (0xF00D, "times"),
    (0xF013, "cog"),
    (0xF015, "home"),
    (0xF019, "download"),
    (0xF023, "lock"),
    (0xF067, "plus"),
    (0xF068, "minus"),
    (0xF095, "phone"),
    (0xF0E0, "envelope"),
];

static LINE_AWESOME_REGULAR: &[(u32, &str)] = &[
    (0xF004, "heart"),
    (0xF005, "star"),
    (0xF007, "user"),
    (0xF024, "flag"),
    (0xF073, "calendar"),
];

static LINE_AWESOME_BRANDS: &[(u32, &str)] = &[
    (0xF082, "facebook-square"),
    (0xF099, "twitter"),
    (0xF09B, "github"),
    (0xF167, "youtube"),
];
