use serde::{Deserialize, Serialize};
use std::fmt;

/// The aspect ratios the catalog is allowed to request. Request-only: the
/// API never echoes the ratio back, so the type does not deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "4:3")]
    Standard,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Standard => "4:3",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inline image bytes as the API returns them: a MIME type plus
/// base64-encoded data. Not retained after the file is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratios_serialize_to_wire_strings() {
        assert_eq!(
            serde_json::to_string(&AspectRatio::Square).unwrap(),
            "\"1:1\""
        );
        assert_eq!(
            serde_json::to_string(&AspectRatio::Widescreen).unwrap(),
            "\"16:9\""
        );
        assert_eq!(AspectRatio::Standard.as_str(), "4:3");
    }
}
