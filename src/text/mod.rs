//! Text overlay: initials, font discovery, Parley layout and centred autofit drawing.

mod font;
mod initials;
mod layout;
mod overlay;

pub use font::{FONT_PATH_ENV, FontAsset, SYSTEM_FONT_CANDIDATES, discover_font};
pub use initials::initials;
pub use layout::TextLayoutEngine;
pub use overlay::{INITIAL_SIZE_RATIO, MAX_WIDTH_RATIO, autofit_font_size, draw_text};
