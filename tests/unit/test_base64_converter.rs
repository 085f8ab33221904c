//! Unit tests for the Base64 converter

#[path = "../test_utils/mod.rs"]
mod test_utils;

use devtoolbox::tools::base64_converter::{decode, encode};
use devtoolbox::tools::{Base64Converter, Base64Mode, ImageFormat, OutputRegion, Phase, Transform};
use devtoolbox::ui::image_preview::decode_color_image;
use test_utils::{MemoryClipboard, TINY_PNG_BASE64};

#[test]
fn test_text_both_ways() {
    assert_eq!(encode("hi"), "aGk=");
    assert_eq!(encode("héllo ✓"), "aMOpbGxvIOKckw==");
    assert_eq!(decode("aGk=").unwrap().text, "hi");
    assert_eq!(decode(" aGVs\nbG8= ").unwrap().text, "hello");
}

#[test]
fn test_invalid_input_messages() {
    assert_eq!(decode("!!").unwrap_err().to_string(), "Invalid Base64 string");
    assert_eq!(decode("aGk").unwrap_err().to_string(), "Invalid Base64 string");
    assert!(decode("/w==")
        .unwrap_err()
        .to_string()
        .starts_with("Conversion error"));
}

#[test]
fn test_png_gets_preview() {
    let output = decode(TINY_PNG_BASE64).unwrap();
    let preview = output.preview.unwrap();
    assert_eq!(preview.format, ImageFormat::Png);
    assert_eq!(preview.format.mime(), "image/png");

    let image = decode_color_image(&preview.bytes).unwrap();
    assert_eq!(image.size, [1, 1]);
}

#[test]
fn test_data_uri_gets_preview() {
    let uri = format!("data:image/png;base64,{}", TINY_PNG_BASE64);
    let output = decode(&encode(&uri)).unwrap();
    assert_eq!(output.text, uri);
    assert_eq!(output.preview.map(|p| p.format), Some(ImageFormat::Png));
}

#[test]
fn test_tool_modes() {
    let mut tool = Base64Converter::new();
    tool.set_input("hi".to_string());
    tool.run_transform();
    assert_eq!(tool.output().map(|o| o.text.as_str()), Some("aGk="));

    tool.set_mode(Base64Mode::Decode);
    tool.set_input("not base64".to_string());
    tool.run_transform();
    assert_eq!(tool.phase(), Phase::Error);
    assert_eq!(tool.error(), Some("Invalid Base64 string"));
}

#[test]
fn test_load_bytes_switches_to_decode() {
    let mut tool = Base64Converter::new();
    tool.load_bytes(b"hello");
    assert_eq!(tool.mode(), Base64Mode::Decode);
    assert_eq!(tool.input(), "aGVsbG8=");
    assert_eq!(tool.phase(), Phase::Empty);

    tool.run_transform();
    let mut clipboard = MemoryClipboard::new();
    assert!(tool.copy_output(OutputRegion::Main, &mut clipboard));
    assert_eq!(clipboard.contents(), Some("hello"));
}

#[test]
fn test_load_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");
    std::fs::write(&path, "file body").unwrap();

    let mut tool = Base64Converter::new();
    tool.load_file(&path).unwrap();
    assert_eq!(tool.path_mut().as_str(), path.display().to_string());
    tool.run_transform();
    assert_eq!(tool.output().map(|o| o.text.as_str()), Some("file body"));

    tool.clear_all();
    assert_eq!(tool.mode(), Base64Mode::Encode);
    assert!(tool.path_mut().is_empty());
    assert_eq!(tool.input(), "");
}
