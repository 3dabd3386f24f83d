use crate::tag_encoding;
use crate::tag_encoding::DecodeError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileTheme {
    #[serde(with = "css_hex")]
    pub primary: u32,
    #[serde(with = "css_hex")]
    pub accent: u32,
}

impl Default for ProfileTheme {
    fn default() -> Self {
        // the colors the encoder form starts with
        ProfileTheme {
            primary: 0xd2e5db,
            accent: 0xd2e5db,
        }
    }
}

impl ProfileTheme {
    pub fn new(primary: u32, accent: u32) -> Self {
        Self { primary, accent }
    }

    pub fn encode(&self) -> String {
        tag_encoding::encode(self.primary, self.accent)
    }

    pub fn decode(text: &str) -> Result<ProfileTheme, DecodeError> {
        tag_encoding::decode(text)
    }
}

mod css_hex {
    use crate::color_utils::{parse_css_hex, to_css_hex};
    use serde::Deserialize;

    pub fn serialize<S: serde::Serializer>(color: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_css_hex(*color))
    }

    pub fn deserialize<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_css_hex(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("'{}' is not a #rrggbb color", text)))
    }
}
