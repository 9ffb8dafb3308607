//! Word-processor documents (`.docx`): paragraph text, one item per line.

use super::split_lines;
use crate::error::{ListCompareError, ParseErrorKind, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

const DOCUMENT_PART: &str = "word/document.xml";

fn corrupt(message: impl std::fmt::Display) -> ListCompareError {
    ListCompareError::parse(
        "reading Word document",
        ParseErrorKind::CorruptDocument(message.to_string()),
    )
}

pub(super) fn parse_docx(bytes: &[u8]) -> Result<Vec<String>> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(corrupt)?;
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| corrupt(format!("{DOCUMENT_PART}: {e}")))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml).map_err(corrupt)?;

    Ok(split_lines(&document_text(&xml)?))
}

/// Raw text of a WordprocessingML body.
///
/// Paragraphs end with a newline; `w:tab` and `w:br` inside a `w:r` run
/// become a tab and a newline. Only text inside `w:t` runs is kept, so
/// tab-stop definitions under `w:pPr` contribute nothing.
fn document_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run = false;
    let mut in_run_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"w:r" => in_run = true,
                b"w:t" => in_run_text = in_run,
                b"w:tab" if in_run => text.push('\t'),
                b"w:br" | b"w:cr" if in_run => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"w:tab" if in_run => text.push('\t'),
                b"w:br" | b"w:cr" if in_run => text.push('\n'),
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:r" => in_run = false,
                b"w:t" => in_run_text = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_run_text => {
                text.push_str(&e.unescape().map_err(corrupt)?);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(corrupt(format!(
                    "malformed XML at position {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn docx(document_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCUMENT_PART, zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Alice</w:t></w:r></w:p>
    <w:p><w:r><w:t xml:space="preserve">  Bob </w:t></w:r><w:r><w:t>by</w:t></w:r></w:p>
    <w:p/>
    <w:p><w:r><w:t>Carol</w:t><w:br/><w:t>Dave &amp; Eve</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn test_paragraphs_become_items() {
        let items = parse_docx(&docx(BODY)).unwrap();
        assert_eq!(items, vec!["Alice", "Bob by", "Carol", "Dave & Eve"]);
    }

    #[test]
    fn test_tabs_are_kept_inside_items() {
        let text = document_text(
            r#"<w:document><w:body><w:p><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t></w:r></w:p></w:body></w:document>"#,
        )
        .unwrap();
        assert_eq!(text, "a\tb\n");
    }

    #[test]
    fn test_tab_stop_definitions_are_not_text() {
        let text = document_text(concat!(
            r#"<w:document><w:body><w:p>"#,
            r#"<w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/><w:tab w:val="right" w:pos="9000"></w:tab></w:tabs></w:pPr>"#,
            r#"<w:r><w:t>Acme</w:t><w:tab/><w:t>Ltd</w:t></w:r>"#,
            r#"</w:p></w:body></w:document>"#,
        ))
        .unwrap();
        assert_eq!(text, "Acme\tLtd\n");
    }

    #[test]
    fn test_missing_document_part() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = parse_docx(&bytes).unwrap_err();
        assert!(matches!(
            err,
            ListCompareError::Parse {
                source: ParseErrorKind::CorruptDocument(_),
                ..
            }
        ));
    }

    #[test]
    fn test_not_a_zip() {
        assert!(parse_docx(b"plain text pretending to be docx").is_err());
    }

    #[test]
    fn test_malformed_xml() {
        let err = parse_docx(&docx("<w:document><w:body><w:p></w:body>")).unwrap_err();
        assert!(err.to_string().contains("Word document"));
    }
}
