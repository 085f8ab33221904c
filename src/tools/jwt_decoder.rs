//! JWT decoder
//!
//! Splits a compact JWT into its three segments and decodes the header and
//! payload. The signature is passed through untouched: nothing is validated
//! or verified, this is a structure viewer only.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{OutputRegion, Phase, ToolDescriptor, ToolKey, ToolSession, Transform};
use crate::error::{JwtSegment, ToolError};

/// base64url with optional padding, as produced by most JWT libraries
const BASE64URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Registered claims that carry a NumericDate
const TIME_CLAIMS: [&str; 3] = ["iat", "nbf", "exp"];

/// A NumericDate claim from the payload
#[derive(Debug, Clone, PartialEq)]
pub struct TimeClaim {
    pub name: &'static str,
    pub seconds: i64,
    pub at: Option<DateTime<Utc>>,
}

impl TimeClaim {
    /// Human-readable UTC timestamp, or the raw number if out of range
    pub fn display(&self) -> String {
        match self.at {
            Some(at) => at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            None => self.seconds.to_string(),
        }
    }

    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.at.map(|at| at <= now).unwrap_or(false)
    }
}

/// Decoded token parts
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedJwt {
    pub header: Value,
    pub payload: Value,
    /// Third segment, verbatim
    pub signature: String,
    header_text: String,
    payload_text: String,
}

impl DecodedJwt {
    /// Header pretty-printed with two-space indentation
    pub fn header_text(&self) -> &str {
        &self.header_text
    }

    /// Payload pretty-printed with two-space indentation
    pub fn payload_text(&self) -> &str {
        &self.payload_text
    }

    /// `iat`, `nbf` and `exp` claims present in the payload, in that order
    pub fn time_claims(&self) -> Vec<TimeClaim> {
        TIME_CLAIMS
            .iter()
            .filter_map(|&name| {
                let value = self.payload.get(name)?;
                let seconds = value
                    .as_i64()
                    .or_else(|| value.as_f64().map(|f| f.trunc() as i64))?;
                Some(TimeClaim {
                    name,
                    seconds,
                    at: DateTime::from_timestamp(seconds, 0),
                })
            })
            .collect()
    }
}

fn decode_segment(segment: &str, which: JwtSegment) -> Result<Value, ToolError> {
    // Tolerate the standard alphabet too; some tools emit it by mistake.
    let normalized: String = segment
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = BASE64URL
        .decode(normalized.as_bytes())
        .map_err(|_| ToolError::JwtBase64 { segment: which })?;

    serde_json::from_slice(&bytes).map_err(|e| ToolError::JwtJson {
        segment: which,
        reason: e.to_string(),
    })
}

/// Decode a compact JWT without verifying it
pub fn decode_jwt(token: &str) -> Result<DecodedJwt, ToolError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(ToolError::JwtPartCount { found: parts.len() });
    }

    let header = decode_segment(parts[0], JwtSegment::Header)?;
    let payload = decode_segment(parts[1], JwtSegment::Payload)?;

    // Serializing a parsed Value cannot fail; fall back to compact form anyway.
    let header_text = serde_json::to_string_pretty(&header).unwrap_or_else(|_| header.to_string());
    let payload_text =
        serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string());

    Ok(DecodedJwt {
        header,
        payload,
        signature: parts[2].to_string(),
        header_text,
        payload_text,
    })
}

#[derive(Debug, Default)]
pub struct JwtDecoder {
    session: ToolSession<DecodedJwt>,
}

impl JwtDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &ToolSession<DecodedJwt> {
        &self.session
    }

    pub fn input_mut(&mut self) -> &mut String {
        self.session.input_mut()
    }

    pub fn decoded(&self) -> Option<&DecodedJwt> {
        self.session.output()
    }
}

impl Transform for JwtDecoder {
    fn descriptor(&self) -> &'static ToolDescriptor {
        ToolKey::Jwt.descriptor()
    }

    fn input(&self) -> &str {
        self.session.input()
    }

    fn set_input(&mut self, text: String) {
        self.session.set_input(text);
    }

    fn run_transform(&mut self) {
        let outcome = decode_jwt(self.session.input().trim());
        match &outcome {
            Ok(jwt) => debug!("Decoded JWT with {} time claims", jwt.time_claims().len()),
            Err(e) => debug!("JWT decode failed: {}", e),
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
        let jwt = self.decoded()?;
        match region {
            OutputRegion::Header => Some(jwt.header_text().to_string()),
            OutputRegion::Payload => Some(jwt.payload_text().to_string()),
            OutputRegion::Main => Some(format!("{}\n{}", jwt.header_text(), jwt.payload_text())),
        }
    }

    fn clear_all(&mut self) {
        self.session.reset();
    }
}
