//! Generic flavor adapter behaviour against a scripted clipboard.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use cb_core::{AcquisitionConfig, ClipboardError, ClipboardPort};
use cb_platform::{FlavorClipboard, FlavorSource, TextFlavor};

const SNIPPET: &str = "<fmxmlsnippet type=\"FMObjectList\"><Field name=\"Total\"/></fmxmlsnippet>";

#[derive(Default)]
struct FakeSource {
    texts: HashMap<&'static str, String>,
    failing_text: Vec<&'static str>,
    flavors: Vec<(&'static str, Result<Vec<u8>, &'static str>)>,
    reject_multi_flavor: bool,
    reject_plain_write: bool,
    writes: Mutex<Vec<(String, Option<String>)>>,
}

fn key(flavor: TextFlavor) -> &'static str {
    match flavor {
        TextFlavor::Plain => "plain",
        TextFlavor::Html => "html",
        TextFlavor::Rtf => "rtf",
    }
}

impl FlavorSource for FakeSource {
    fn read_text(&self, flavor: TextFlavor) -> Result<Option<String>> {
        let key = key(flavor);
        if self.failing_text.contains(&key) {
            return Err(anyhow!("{key} flavor threw"));
        }
        Ok(self.texts.get(key).cloned())
    }

    fn available_flavors(&self) -> Result<Vec<String>> {
        Ok(self.flavors.iter().map(|(name, _)| name.to_string()).collect())
    }

    fn read_bytes(&self, flavor: &str) -> Result<Option<Vec<u8>>> {
        match self.flavors.iter().find(|(name, _)| *name == flavor) {
            Some((_, Ok(bytes))) => Ok(Some(bytes.clone())),
            Some((_, Err(reason))) => Err(anyhow!("{reason}")),
            None => Ok(None),
        }
    }

    fn write_text(&self, text: &str) -> Result<()> {
        if self.reject_plain_write {
            return Err(anyhow!("pasteboard refused"));
        }
        self.writes.lock().unwrap().push((text.to_string(), None));
        Ok(())
    }

    fn write_text_with_flavor(&self, text: &str, flavor: &str) -> Result<()> {
        if self.reject_multi_flavor {
            return Err(anyhow!("custom flavor refused"));
        }
        self.writes
            .lock()
            .unwrap()
            .push((text.to_string(), Some(flavor.to_string())));
        Ok(())
    }
}

fn clipboard(source: FakeSource) -> FlavorClipboard<FakeSource> {
    FlavorClipboard::new(source, AcquisitionConfig::default())
}

#[test]
fn test_plain_text_wins() {
    let mut source = FakeSource::default();
    source.texts.insert("plain", format!("  {SNIPPET}\n"));
    source.texts.insert("html", "<p>ignored</p>".into());

    assert_eq!(clipboard(source).read_text(), Ok(Some(SNIPPET.to_string())));
}

#[test]
fn test_failing_flavor_is_skipped() {
    let mut source = FakeSource::default();
    source.failing_text = vec!["plain", "html"];
    source.texts.insert("rtf", "{\\rtf1 hello}".into());

    assert_eq!(
        clipboard(source).read_text(),
        Ok(Some("{\\rtf1 hello}".to_string()))
    );
}

#[test]
fn test_unreadable_plain_text_is_reported_when_nothing_else_works() {
    let mut source = FakeSource::default();
    source.failing_text = vec!["plain"];
    source.flavors = vec![("com.vendor.blob", Ok(b"\x00\x01no marker".to_vec()))];

    assert!(matches!(
        clipboard(source).read_text(),
        Err(ClipboardError::Unreadable(_))
    ));
}

#[test]
fn test_known_byte_flavor_is_decoded() {
    let mut bytes = vec![0xFF, 0xFE];
    bytes.extend(SNIPPET.encode_utf16().flat_map(u16::to_le_bytes));
    let mut source = FakeSource::default();
    source.texts.insert("plain", "   ".into());
    source.flavors = vec![("PUBLIC.UTF16-PLAIN-TEXT", Ok(bytes))];

    assert_eq!(clipboard(source).read_text(), Ok(Some(SNIPPET.to_string())));
}

#[test]
fn test_exhaustive_scan_extracts_from_vendor_flavor() {
    let mut payload = b"\x00\x01binary header".to_vec();
    payload.extend_from_slice(SNIPPET.as_bytes());
    payload.extend_from_slice(b"\x00trailer");

    let mut source = FakeSource::default();
    source.flavors = vec![
        ("com.example.broken", Err("flavor threw")),
        ("com.example.image", Ok(vec![0x89, b'P', b'N', b'G'])),
        ("dyn.ah62d4rv4gk8zuxnykk", Ok(payload)),
    ];

    let text = clipboard(source).read_text().unwrap().unwrap();
    assert!(text.contains(SNIPPET), "got: {text}");
}

#[test]
fn test_nothing_usable_yields_none() {
    let mut source = FakeSource::default();
    source.flavors = vec![("com.example.image", Ok(vec![0x89, b'P', b'N', b'G']))];
    assert_eq!(clipboard(source).read_text(), Ok(None));
}

#[test]
fn test_write_publishes_xml_flavor() {
    let clipboard = clipboard(FakeSource::default());
    clipboard.write_text(SNIPPET).unwrap();

    let writes = clipboard.source().writes.lock().unwrap();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].0, SNIPPET);
    assert!(writes[0].1.is_some());
}

#[test]
fn test_write_falls_back_to_plain_text() {
    let clipboard = clipboard(FakeSource {
        reject_multi_flavor: true,
        ..FakeSource::default()
    });
    clipboard.write_text(SNIPPET).unwrap();

    let writes = clipboard.source().writes.lock().unwrap();
    assert_eq!(writes.as_slice(), [(SNIPPET.to_string(), None)]);
}

#[test]
fn test_write_failure_is_unavailable() {
    let clipboard = clipboard(FakeSource {
        reject_multi_flavor: true,
        reject_plain_write: true,
        ..FakeSource::default()
    });
    assert!(matches!(
        clipboard.write_text(SNIPPET),
        Err(ClipboardError::Unavailable(_))
    ));
}

#[test]
fn test_dump_flavors_reports_each_flavor() {
    let mut source = FakeSource::default();
    source.flavors = vec![
        ("public.utf8-plain-text", Ok(SNIPPET.as_bytes().to_vec())),
        ("com.example.broken", Err("flavor threw")),
    ];

    let reports = clipboard(source).dump_flavors();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].probe.name.as_deref(), Some("public.utf8-plain-text"));
    assert!(reports[0].snippet_preview.is_some());
    assert_eq!(reports[1].len, 0);
}
