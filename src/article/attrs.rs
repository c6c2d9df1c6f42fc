use crate::de;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Attributes for a heading inside the body (i.e. `<h1>`, `<h2>`, ...)
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct HeadingAttrs {
    /// The level of the heading (i.e. `1` for `<h1>`)
    #[serde(default = "default_level")]
    pub level: u8,
}

fn default_level() -> u8 {
    1
}

impl Default for HeadingAttrs {
    fn default() -> Self {
        Self { level: 1 }
    }
}

/// Attributes for an embedded `<iframe>`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct IframeAttrs {
    /// Source URL
    #[serde(deserialize_with = "de::deserialize_or_default")]
    pub src: String,
    /// Width in pixels
    pub width: String,
    /// Height in pixels
    pub height: String,
    /// Border, sent either as a number or a string
    pub frameborder: Value,
    /// Whether the frame may go fullscreen
    pub allowfullscreen: String,
}

impl Default for IframeAttrs {
    fn default() -> Self {
        Self {
            src: String::new(),
            width: String::from("560"),
            height: String::from("315"),
            frameborder: Value::from(1),
            allowfullscreen: String::from("true"),
        }
    }
}

/// Attributes for the file of an inline image or a gallery item
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct FileAttrs {
    /// Source URL, if uploaded
    pub src: Option<String>,
    /// The crops of the image, as stored by the media service
    pub crop_sizes: Value,
}

impl Default for FileAttrs {
    fn default() -> Self {
        Self {
            src: None,
            crop_sizes: Value::Array(Vec::new()),
        }
    }
}

/// Attributes for an oEmbed node
#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OembedAttrs {
    /// Source URL
    pub src: Option<String>,
    /// Width
    pub width: Option<Value>,
    /// Height
    pub height: Option<Value>,
}

/// Attributes for content the editor could not identify
#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct UnidentifiedAttrs {
    /// The raw content
    pub content: Value,
}

/// Attributes for the `hidden_text` mark
#[derive(Debug, Hash, Eq, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HiddenTextAttrs {
    /// Whether the text is currently hidden
    pub active: bool,
}

impl Default for HiddenTextAttrs {
    fn default() -> Self {
        Self { active: true }
    }
}

/// Attributes for an editorial note
#[derive(Debug, Default, Hash, Eq, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NoteAttrs {
    /// The note
    pub note: Option<String>,
}

/// The attributes for a hyperlink
#[derive(Debug, Hash, Eq, Clone, PartialEq, Deserialize, Serialize)]
pub struct LinkAttrs {
    /// The URL the link points to
    pub href: String,
    /// The title of the link
    #[serde(default)]
    pub title: Option<String>,
    /// The browsing context to open the link in
    #[serde(default = "default_target")]
    pub target: String,
}

fn default_target() -> String {
    String::from("_self")
}
