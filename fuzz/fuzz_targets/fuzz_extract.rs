#![no_main]
use libfuzzer_sys::fuzz_target;
use list_comparer::extract::{extract_bytes, DocumentKind, ExtractOptions};

/// Fuzz document extraction.
///
/// Arbitrary bytes are fed to every extractor; malformed input must come
/// back as an error, never a panic.
fuzz_target!(|data: &[u8]| {
    let options = ExtractOptions { dedupe: true };
    for kind in [
        DocumentKind::PlainText,
        DocumentKind::Spreadsheet,
        DocumentKind::WordProcessor,
    ] {
        if let Ok(items) = extract_bytes(data, kind, &options) {
            assert!(items.iter().all(|item| !item.trim().is_empty()));
        }
    }
});
