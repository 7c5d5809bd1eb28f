use opnsense_guide::builder;
use opnsense_guide::config::GuideConfig;
use opnsense_guide::fonts;
use sha2::{Digest, Sha256};

fn render_guide_pdf() -> Option<Vec<u8>> {
    let config = GuideConfig::from_manifest_dir();
    if !fonts::fonts_available(&config) {
        return None;
    }

    let document = builder::build_document(&config).expect("build guide document");
    let mut bytes = Vec::new();
    document.render(&mut bytes).expect("render guide document");
    Some(bytes)
}

fn scrub_pdf(bytes: &[u8]) -> Vec<u8> {
    fn scrub_segment(data: &mut [u8], tag: &[u8], terminator: u8) {
        let mut index = 0;
        while index + tag.len() < data.len() {
            if data[index..].starts_with(tag) {
                let mut cursor = index + tag.len();
                while cursor < data.len() {
                    let byte = data[cursor];
                    if byte == terminator {
                        break;
                    }
                    if terminator == b')' {
                        data[cursor] = b'0';
                    } else if !matches!(byte, b'<' | b'>' | b' ' | b'\n' | b'\r' | b'\t') {
                        data[cursor] = b'0';
                    }
                    cursor += 1;
                }
                index = cursor;
            } else {
                index += 1;
            }
        }
    }

    fn scrub_xml(data: &mut [u8], start: &[u8], end: &[u8]) {
        let mut offset = 0;
        while offset + start.len() < data.len() {
            if let Some(start_pos) = data[offset..]
                .windows(start.len())
                .position(|window| window == start)
            {
                let start_index = offset + start_pos + start.len();
                if let Some(end_pos) = data[start_index..]
                    .windows(end.len())
                    .position(|window| window == end)
                {
                    for byte in &mut data[start_index..start_index + end_pos] {
                        if !matches!(*byte, b'<' | b'>' | b'/' | b' ' | b'\n' | b'\r' | b'\t') {
                            *byte = b'0';
                        }
                    }
                    offset = start_index + end_pos + end.len();
                } else {
                    break;
                }
            } else {
                break;
            }
        }
    }

    let mut normalized = bytes.to_vec();
    scrub_segment(&mut normalized, b"/CreationDate(", b')');
    scrub_segment(&mut normalized, b"/ModDate(", b')');
    scrub_segment(&mut normalized, b"/ID[", b']');
    scrub_segment(&mut normalized, b"/Producer(", b')');
    scrub_xml(&mut normalized, b"<xmp:CreateDate>", b"</xmp:CreateDate>");
    scrub_xml(&mut normalized, b"<xmp:ModifyDate>", b"</xmp:ModifyDate>");
    scrub_xml(
        &mut normalized,
        b"<xmp:MetadataDate>",
        b"</xmp:MetadataDate>",
    );
    scrub_xml(
        &mut normalized,
        b"<xmpMM:DocumentID>",
        b"</xmpMM:DocumentID>",
    );
    scrub_xml(
        &mut normalized,
        b"<xmpMM:InstanceID>",
        b"</xmpMM:InstanceID>",
    );
    scrub_xml(&mut normalized, b"<xmpMM:VersionID>", b"</xmpMM:VersionID>");
    normalized
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    let normalized = scrub_pdf(bytes);
    let digest = Sha256::digest(&normalized);
    digest.into()
}

fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
    haystack
        .windows(needle.len())
        .filter(|window| *window == needle)
        .count()
}

#[test]
fn renders_non_empty_output() {
    let Some(bytes) = render_guide_pdf() else {
        eprintln!(
            "Skipping renders_non_empty_output: bundled fonts missing. Set OPNSENSE_GUIDE_FONTS_DIR or copy them to assets/fonts."
        );
        return;
    };
    assert!(
        bytes.starts_with(b"%PDF"),
        "rendered output should be a PDF file"
    );
    assert!(bytes.len() > 10_000, "guide should span multiple pages");
}

#[test]
fn guide_has_multiple_pages() {
    let Some(bytes) = render_guide_pdf() else {
        eprintln!(
            "Skipping guide_has_multiple_pages: bundled fonts missing. Set OPNSENSE_GUIDE_FONTS_DIR or copy them to assets/fonts."
        );
        return;
    };
    // Cover, TOC, 15 chapters and 3 appendices each start a new page.
    let pages = count_occurrences(&bytes, b"/Type /Page");
    assert!(pages >= 19, "expected at least 19 pages, found {pages}");
}

#[test]
fn rendering_is_deterministic() {
    let Some(bytes_a) = render_guide_pdf() else {
        eprintln!(
            "Skipping rendering_is_deterministic: bundled fonts missing. Set OPNSENSE_GUIDE_FONTS_DIR or copy them to assets/fonts."
        );
        return;
    };
    let Some(bytes_b) = render_guide_pdf() else {
        eprintln!(
            "Skipping rendering_is_deterministic: bundled fonts missing. Set OPNSENSE_GUIDE_FONTS_DIR or copy them to assets/fonts."
        );
        return;
    };

    assert_eq!(bytes_a.len(), bytes_b.len(), "PDF sizes should match");

    let hash_a = normalized_hash(&bytes_a);
    let hash_b = normalized_hash(&bytes_b);

    assert_eq!(
        hash_a, hash_b,
        "PDF renders must be deterministic after metadata normalization"
    );
}
