//! Reusable cell formats for the referral workbook.

use rust_xlsxwriter::Format;

/// Header row fill, a light blue.
const HEADER_FILL: u32 = 0xCC_E5FF;

/// Banner row fill on the summary sheet, a light yellow.
const BANNER_FILL: u32 = 0xFF_F2CC;

/// The small set of formats every sheet shares.
pub struct SheetStyles {
    pub header: Format,
    pub banner: Format,
    pub wrapped: Format,
}

impl SheetStyles {
    pub fn new() -> Self {
        Self {
            header: Format::new().set_bold().set_background_color(HEADER_FILL),
            banner: Format::new().set_bold().set_background_color(BANNER_FILL),
            wrapped: Format::new().set_text_wrap(),
        }
    }
}

impl Default for SheetStyles {
    fn default() -> Self {
        Self::new()
    }
}
