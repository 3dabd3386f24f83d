// Copyright (C) Pavel Grebnev 2023-2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use crate::color_utils::to_css_hex;
use crate::profile_theme::ProfileTheme;
use thiserror::Error;

// Unicode "tag" block (U+E0000..U+E007F), renders as zero-width in normal text
const TAG_BLOCK_OFFSET: u32 = 0xe0000;
const PRINTABLE_ASCII_FIRST: u32 = 0x20;
const PRINTABLE_ASCII_LAST: u32 = 0x7f;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("the text contains no embedded payload")]
    NoPayload,
    #[error("the embedded payload is malformed")]
    MalformedPayload,
}

pub fn encode(primary: u32, accent: u32) -> String {
    let message = format!("[{},{}]", to_css_hex(primary), to_css_hex(accent));
    // the leading space separates the invisible run from the visible bio text
    return format!(" {}", encode_message(&message));
}

pub fn decode(text: &str) -> Result<ProfileTheme, DecodeError> {
    let message = decode_message(text);
    if message.is_empty() {
        return Err(DecodeError::NoPayload);
    }
    parse_theme_message(&message).ok_or(DecodeError::MalformedPayload)
}

// Shifts every printable ASCII scalar of the message into the tag block,
// dropping everything the encoding can't represent.
fn encode_message(message: &str) -> String {
    message
        .chars()
        .map(|character| character as u32)
        .filter(|code| (PRINTABLE_ASCII_FIRST..=PRINTABLE_ASCII_LAST).contains(code))
        .filter_map(|code| char::from_u32(code + TAG_BLOCK_OFFSET))
        .collect()
}

// Collects the tag-block scalars from the text, ignoring everything visible
fn decode_message(text: &str) -> String {
    text.chars()
        .map(|character| character as u32)
        .filter(|code| {
            (TAG_BLOCK_OFFSET + PRINTABLE_ASCII_FIRST..=TAG_BLOCK_OFFSET + PRINTABLE_ASCII_LAST)
                .contains(code)
        })
        .filter_map(|code| char::from_u32(code - TAG_BLOCK_OFFSET))
        .collect()
}

// expects the "[#rrggbb,#rrggbb]" payload produced by encode()
fn parse_theme_message(message: &str) -> Option<ProfileTheme> {
    let inner = message.strip_prefix('[')?.strip_suffix(']')?;
    let (primary_text, accent_text) = inner.split_once(',')?;
    let primary = parse_color_field(primary_text)?;
    let accent = parse_color_field(accent_text)?;
    Some(ProfileTheme::new(primary, accent))
}

fn parse_color_field(text: &str) -> Option<u32> {
    let hex = text.strip_prefix('#')?;
    // uppercase is accepted since the payload travels through user clipboards
    if hex.len() != 6 || !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}
