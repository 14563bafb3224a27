use crate::Result;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

/// Padded input: padding must complete the final quantum exactly.
const PADDED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical)
        .with_decode_allow_trailing_bits(true),
);

/// Unpadded input.
const UNPADDED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Decode a base64-encoded image into its raw bytes.
///
/// Follows the forgiving-base64 rules of `atob`: whitespace anywhere in the
/// input is skipped, padding may be omitted, but padding that is present must
/// be complete. Every other character must belong to the standard alphabet.
pub fn decode_image_base64(image_data: &str) -> Result<Vec<u8>> {
    let compact: Vec<u8> = image_data
        .bytes()
        .filter(|b| !is_forgiving_whitespace(*b))
        .collect();
    let engine = if compact.contains(&b'=') {
        &PADDED
    } else {
        &UNPADDED
    };
    Ok(engine.decode(compact)?)
}

// Forgiving-base64 whitespace: no vertical tab, unlike `u8::is_ascii_whitespace`.
fn is_forgiving_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0C' | b'\r')
}
