//! Base64 converter
//!
//! Encodes UTF-8 text to standard base64 and decodes it back. Decoded bytes
//! that look like a PNG or JPEG image, or decoded text that is itself an
//! image data URI, additionally produce an [`ImagePreview`].

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::{OutputRegion, Phase, ToolDescriptor, ToolKey, ToolSession, Transform};
use crate::error::{Error, Result, ToolError};

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G'];
const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8];
const DATA_URI_PREFIX: &str = "data:image/";
const DATA_URI_MARKER: &str = ";base64,";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Base64Mode {
    /// Text to base64
    #[default]
    Encode,
    /// Base64 to text or image
    Decode,
}

impl Base64Mode {
    pub fn label(self) -> &'static str {
        match self {
            Base64Mode::Encode => "Encode (Text → Base64)",
            Base64Mode::Decode => "Decode (Base64 → Text/Image)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Recognize an image by its magic bytes
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(PNG_SIGNATURE) {
            Some(ImageFormat::Png)
        } else if bytes.starts_with(JPEG_SIGNATURE) {
            Some(ImageFormat::Jpeg)
        } else {
            None
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }
}

/// Raw image bytes ready to be decoded for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

/// Converter output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base64Output {
    pub text: String,
    pub preview: Option<ImagePreview>,
}

/// Encode UTF-8 text as standard base64
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Strict decode: whitespace is ignored, alphabet and padding must be valid
pub fn decode_bytes(input: &str) -> std::result::Result<Vec<u8>, ToolError> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    STANDARD
        .decode(cleaned.as_bytes())
        .map_err(|_| ToolError::InvalidBase64)
}

fn preview_from_data_uri(text: &str) -> Option<ImagePreview> {
    let rest = text.trim().strip_prefix(DATA_URI_PREFIX)?;
    let (_, payload) = rest.split_once(DATA_URI_MARKER)?;
    let bytes = decode_bytes(payload).ok()?;
    let format = ImageFormat::sniff(&bytes)?;
    Some(ImagePreview { format, bytes })
}

/// Decode base64 to text, with an image preview when the content is an image
pub fn decode(input: &str) -> std::result::Result<Base64Output, ToolError> {
    let bytes = decode_bytes(input)?;

    if let Some(format) = ImageFormat::sniff(&bytes) {
        return Ok(Base64Output {
            text: String::from_utf8_lossy(&bytes).into_owned(),
            preview: Some(ImagePreview { format, bytes }),
        });
    }

    let text = String::from_utf8(bytes).map_err(|_| ToolError::NotUtf8)?;
    let preview = preview_from_data_uri(&text);
    Ok(Base64Output { text, preview })
}

#[derive(Debug, Default)]
pub struct Base64Converter {
    mode: Base64Mode,
    session: ToolSession<Base64Output>,
    path: String,
}

impl Base64Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &ToolSession<Base64Output> {
        &self.session
    }

    pub fn input_mut(&mut self) -> &mut String {
        self.session.input_mut()
    }

    pub fn mode(&self) -> Base64Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Base64Mode) {
        self.mode = mode;
    }

    pub fn output(&self) -> Option<&Base64Output> {
        self.session.output()
    }

    pub fn preview(&self) -> Option<&ImagePreview> {
        self.output().and_then(|o| o.preview.as_ref())
    }

    /// Path field used by the "Load file" action
    pub fn path_mut(&mut self) -> &mut String {
        &mut self.path
    }

    /// Put raw file bytes into the input as base64 and switch to decode mode
    pub fn load_bytes(&mut self, bytes: &[u8]) {
        debug!("Loaded {} bytes into base64 converter", bytes.len());
        self.session.set_input(STANDARD.encode(bytes));
        self.session.clear_state();
        self.mode = Base64Mode::Decode;
    }

    /// Read a file from disk and load it with [`Self::load_bytes`].
    ///
    /// A read failure is also shown as the tool's error.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                let error = Error::FileReadFailed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                };
                warn!("{}", error);
                self.session.fail(error.to_string());
                return Err(error);
            }
        };
        self.path = path.display().to_string();
        self.load_bytes(&bytes);
        Ok(())
    }
}

impl Transform for Base64Converter {
    fn descriptor(&self) -> &'static ToolDescriptor {
        ToolKey::Base64.descriptor()
    }

    fn input(&self) -> &str {
        self.session.input()
    }

    fn set_input(&mut self, text: String) {
        self.session.set_input(text);
    }

    fn run_transform(&mut self) {
        let outcome = match self.mode {
            Base64Mode::Encode => Ok(Base64Output {
                text: encode(self.session.input()),
                preview: None,
            }),
            Base64Mode::Decode => decode(self.session.input()),
        };
        if let Err(e) = &outcome {
            debug!("Base64 {:?} failed: {}", self.mode, e);
        }
        self.session.apply(outcome);
    }

    fn phase(&self) -> Phase {
        self.session.phase()
    }

    fn error(&self) -> Option<&str> {
        self.session.error()
    }

    fn copy_text(&self, region: OutputRegion) -> Option<String> {
        match region {
            OutputRegion::Main => self.output().map(|o| o.text.clone()),
            _ => None,
        }
    }

    fn clear_all(&mut self) {
        self.session.reset();
        self.mode = Base64Mode::default();
        self.path.clear();
    }
}
