// Design system tokens for consistent styling

use iced::Color;

// Font sizes
pub const FONT_SM: f32 = 13.0;
pub const FONT_MD: f32 = 14.0;
pub const FONT_LG: f32 = 16.0;
pub const FONT_XL: f32 = 24.0;

// Spacing
pub const SPACING_XS: u16 = 2;
pub const SPACING_SM: u16 = 5;
pub const SPACING_MD: u16 = 10;
pub const SPACING_LG: u16 = 20;

// Heights
pub const TABLE_HEIGHT: f32 = 280.0;

// Colors
pub const COLOR_CONVERTED: Color = Color::from_rgb(0.3, 0.8, 1.0);
pub const COLOR_MUTED: Color = Color::from_rgb(0.5, 0.5, 0.5);

// Input limits
pub const MAX_INPUT_LENGTH: usize = 32;

// Window
pub const WINDOW_WIDTH: f32 = 560.0;
pub const WINDOW_HEIGHT: f32 = 680.0;
