/// Everforest dark-medium console palette
///
/// Color constants for the `colored` crate (CLI output). These only style the
/// tool's own messages; generated themes always come from the palette file.

// Accents
pub const RED: (u8, u8, u8) = (230, 126, 128);
pub const ORANGE: (u8, u8, u8) = (230, 152, 117);
pub const YELLOW: (u8, u8, u8) = (219, 188, 127);
pub const GREEN: (u8, u8, u8) = (167, 192, 128);
pub const AQUA: (u8, u8, u8) = (131, 192, 146);
pub const BLUE: (u8, u8, u8) = (127, 187, 179);
pub const PURPLE: (u8, u8, u8) = (214, 153, 182);

// Text colors
pub const FG: (u8, u8, u8) = (211, 198, 170);
pub const GRAY1: (u8, u8, u8) = (122, 132, 120);
pub const GRAY2: (u8, u8, u8) = (133, 146, 137);
