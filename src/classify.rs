// src/classify.rs
// Filename-suffix classification for the viewer registry and mime hints.

use serde::{Deserialize, Serialize};

/// Document categories the booth knows how to hand off to a preview surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    Pdf,
    Word,
    Excel,
    Image,
    Powerpoint,
    Video,
    Audio,
    Unknown,
}

impl FileKind {
    /// Classify by filename suffix, case-insensitive. Anything without a
    /// recognized extension is `Unknown`.
    pub fn from_name(name: &str) -> Self {
        match extension_of(name).as_deref() {
            Some("pdf") => FileKind::Pdf,
            Some("doc" | "docx" | "rtf" | "sfdt") => FileKind::Word,
            Some("xlsx" | "xls" | "csv") => FileKind::Excel,
            Some("jpg" | "jpeg" | "png") => FileKind::Image,
            Some("pptx" | "ppt" | "potx") => FileKind::Powerpoint,
            Some("mp4" | "webm" | "ogg") => FileKind::Video,
            Some("mp3" | "wav") => FileKind::Audio,
            _ => FileKind::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Pdf => "PDF",
            FileKind::Word => "WORD",
            FileKind::Excel => "EXCEL",
            FileKind::Image => "IMAGE",
            FileKind::Powerpoint => "POWERPOINT",
            FileKind::Video => "VIDEO",
            FileKind::Audio => "AUDIO",
            FileKind::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Best-effort mime type for a filename. Disk ingestion has no mime source,
/// so the suffix stands in for it.
pub fn mime_hint(name: &str) -> &'static str {
    match extension_of(name).as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("rtf") => "application/rtf",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some("xls") => "application/vnd.ms-excel",
        Some("csv") => "text/csv",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("pptx") => {
            "application/vnd.openxmlformats-officedocument.presentationml.presentation"
        }
        Some("ppt" | "potx") => "application/vnd.ms-powerpoint",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("ogg") => "video/ogg",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        _ => "application/octet-stream",
    }
}

fn extension_of(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, extension)| extension.to_lowercase())
}
