// Copyright (C) Pavel Grebnev 2023-2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

mod color_utils;
mod profile_theme;
mod tag_encoding;

pub use color_utils::{
    contrast_overlay_color, contrast_text_color, is_bright, parse_css_hex, to_css_hex,
};
pub use profile_theme::ProfileTheme;
pub use tag_encoding::{decode, encode, DecodeError};
