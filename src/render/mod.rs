// src/render/mod.rs
// Per-kind preview surfaces. These are deliberately opaque about payloads:
// a preview describes the document and the attached surface, it never parses
// the binary.

use std::collections::HashMap;
use std::fmt::Debug;

use crate::classify::FileKind;
use crate::document::DocumentRecord;

pub trait PreviewStrategy: Debug {
    fn build(&self, record: &DocumentRecord) -> Preview;
    fn supported_kinds(&self) -> Vec<FileKind>;
}

/// What a viewer window shows for one document.
#[derive(Debug, Clone)]
pub struct Preview {
    pub heading: String,
    pub lines: Vec<String>,
}

#[derive(Debug)]
pub struct PreviewRegistry {
    strategies: HashMap<FileKind, Box<dyn PreviewStrategy>>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        let mut strategies: HashMap<FileKind, Box<dyn PreviewStrategy>> = HashMap::new();

        // Register strategies
        for kind in PdfPreview.supported_kinds() {
            strategies.insert(kind, Box::new(PdfPreview));
        }
        for kind in WordPreview.supported_kinds() {
            strategies.insert(kind, Box::new(WordPreview));
        }
        for kind in SheetPreview.supported_kinds() {
            strategies.insert(kind, Box::new(SheetPreview));
        }
        for kind in ImagePreview.supported_kinds() {
            strategies.insert(kind, Box::new(ImagePreview));
        }
        for kind in SlidesPreview.supported_kinds() {
            strategies.insert(kind, Box::new(SlidesPreview));
        }
        for kind in MediaPreview.supported_kinds() {
            strategies.insert(kind, Box::new(MediaPreview));
        }

        Self { strategies }
    }

    pub fn preview(&self, record: &DocumentRecord) -> Preview {
        let kind = FileKind::from_name(&record.display_name);
        match self.strategies.get(&kind) {
            Some(strategy) => strategy.build(record),
            None => Preview {
                heading: "Unsupported File Type".to_string(),
                lines: describe(record, kind),
            },
        }
    }
}

impl Default for PreviewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn describe(record: &DocumentRecord, kind: FileKind) -> Vec<String> {
    vec![
        format!("Name:  {}", record.display_name),
        format!("Kind:  {kind}"),
        format!("Type:  {}", record.mime_hint),
        format!("Size:  {} bytes", record.binary.len()),
    ]
}

#[derive(Debug)]
struct PdfPreview;
impl PreviewStrategy for PdfPreview {
    fn build(&self, record: &DocumentRecord) -> Preview {
        let mut lines = describe(record, FileKind::Pdf);
        lines.push(String::new());
        lines.push("Rendering is delegated to the PDF canvas surface.".to_string());
        Preview {
            heading: "PDF document".to_string(),
            lines,
        }
    }

    fn supported_kinds(&self) -> Vec<FileKind> {
        vec![FileKind::Pdf]
    }
}

#[derive(Debug)]
struct WordPreview;
impl PreviewStrategy for WordPreview {
    fn build(&self, record: &DocumentRecord) -> Preview {
        let mut lines = describe(record, FileKind::Word);
        lines.push(String::new());
        lines.push("Editing is delegated to the word-processor surface.".to_string());
        Preview {
            heading: "Word document".to_string(),
            lines,
        }
    }

    fn supported_kinds(&self) -> Vec<FileKind> {
        vec![FileKind::Word]
    }
}

#[derive(Debug)]
struct SheetPreview;
impl PreviewStrategy for SheetPreview {
    fn build(&self, record: &DocumentRecord) -> Preview {
        let mut lines = describe(record, FileKind::Excel);
        lines.push(String::new());
        lines.push("Cells are delegated to the spreadsheet grid surface.".to_string());
        Preview {
            heading: "Spreadsheet".to_string(),
            lines,
        }
    }

    fn supported_kinds(&self) -> Vec<FileKind> {
        vec![FileKind::Excel]
    }
}

#[derive(Debug)]
struct ImagePreview;
impl PreviewStrategy for ImagePreview {
    fn build(&self, record: &DocumentRecord) -> Preview {
        let mut lines = describe(record, FileKind::Image);
        lines.push(String::new());
        lines.push("Pixels are delegated to the image canvas surface.".to_string());
        Preview {
            heading: "Image".to_string(),
            lines,
        }
    }

    fn supported_kinds(&self) -> Vec<FileKind> {
        vec![FileKind::Image]
    }
}

#[derive(Debug)]
struct SlidesPreview;
impl PreviewStrategy for SlidesPreview {
    fn build(&self, record: &DocumentRecord) -> Preview {
        let mut lines = describe(record, FileKind::Powerpoint);
        lines.push(String::new());
        // Slide-to-PDF conversion is a stub; only file details are shown.
        lines.push("Slide conversion is not implemented.".to_string());
        Preview {
            heading: "Presentation".to_string(),
            lines,
        }
    }

    fn supported_kinds(&self) -> Vec<FileKind> {
        vec![FileKind::Powerpoint]
    }
}

#[derive(Debug)]
struct MediaPreview;
impl PreviewStrategy for MediaPreview {
    fn build(&self, record: &DocumentRecord) -> Preview {
        let kind = FileKind::from_name(&record.display_name);
        let mut lines = describe(record, kind);
        lines.push(String::new());
        lines.push("Playback is delegated to the media surface.".to_string());
        Preview {
            heading: match kind {
                FileKind::Audio => "Audio".to_string(),
                _ => "Video".to_string(),
            },
            lines,
        }
    }

    fn supported_kinds(&self) -> Vec<FileKind> {
        vec![FileKind::Video, FileKind::Audio]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> DocumentRecord {
        DocumentRecord {
            id: "test".to_string(),
            binary: vec![0u8; 16],
            display_name: name.to_string(),
            mime_hint: crate::classify::mime_hint(name).to_string(),
        }
    }

    #[test]
    fn test_every_known_kind_has_a_strategy() {
        let registry = PreviewRegistry::new();
        for name in [
            "a.pdf", "b.docx", "c.xlsx", "d.png", "e.pptx", "f.mp4", "g.mp3",
        ] {
            let preview = registry.preview(&record(name));
            assert_ne!(preview.heading, "Unsupported File Type", "for {name}");
        }
    }

    #[test]
    fn test_unknown_kind_falls_back() {
        let registry = PreviewRegistry::new();
        let preview = registry.preview(&record("mystery.bin"));
        assert_eq!(preview.heading, "Unsupported File Type");
    }
}
