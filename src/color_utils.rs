// Copyright (C) Pavel Grebnev 2023-2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

pub fn is_bright(color: u32) -> bool {
    let r = ((color >> 16) & 0xff) as f64;
    let g = ((color >> 8) & 0xff) as f64;
    let b = (color & 0xff) as f64;
    // perceptual luminance, ITU-R BT.601 weights
    let brightness = 0.299 * r + 0.587 * g + 0.114 * b;
    return brightness > 128.0;
}

pub fn to_css_hex(color: u32) -> String {
    return format!("#{:06x}", color & 0x00ff_ffff);
}

pub fn parse_css_hex(text: &str) -> Option<u32> {
    let text = text.trim();
    // allow the user to omit "#"
    let hex = text.strip_prefix('#').unwrap_or(text);
    if hex.len() != 6 || !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

pub fn contrast_overlay_color(background: u32) -> u32 {
    if is_bright(background) {
        0xffffff
    } else {
        0x000000
    }
}

pub fn contrast_text_color(background: u32) -> u32 {
    if is_bright(background) {
        0x303030
    } else {
        0xefefef
    }
}
