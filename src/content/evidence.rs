//! Evidence files shown in the evidence browser
//!
//! The archive is seeded with three files and never grows; what "opening"
//! a file does depends entirely on its status.

use super::{Classification, Id};
use serde::{Deserialize, Serialize};

/// Media type of an evidence file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvidenceKind {
    Video,
    Image,
    Audio,
}

impl EvidenceKind {
    pub fn icon(&self) -> &'static str {
        match self {
            EvidenceKind::Video => "▣",
            EvidenceKind::Image => "▦",
            EvidenceKind::Audio => "♫",
        }
    }
}

/// Whether a file can actually be opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvidenceStatus {
    Corrupted,
    Redacted,
    Available,
}

impl std::fmt::Display for EvidenceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvidenceStatus::Corrupted => write!(f, "CORRUPTED"),
            EvidenceStatus::Redacted => write!(f, "REDACTED"),
            EvidenceStatus::Available => write!(f, "AVAILABLE"),
        }
    }
}

/// An entry in the evidence archive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceFile {
    pub id: Id,
    pub name: String,
    pub kind: EvidenceKind,
    pub status: EvidenceStatus,
    pub classification: Classification,
    pub description: String,
}

impl EvidenceFile {
    pub fn new(
        name: &str,
        kind: EvidenceKind,
        status: EvidenceStatus,
        classification: Classification,
        description: &str,
    ) -> Self {
        Self {
            id: Id::new(),
            name: name.to_string(),
            kind,
            status,
            classification,
            description: description.to_string(),
        }
    }

    /// Canned "content" revealed when an available file is opened
    pub fn transcript(&self) -> &'static str {
        match self.name.as_str() {
            "AUDIO_LOG_47.wav" => {
                "TRANSCRIPT: \"The tall shadows... they move when you're not looking... \
                 He has no face but He sees everything...\""
            }
            "RECORDING_001.mp4" => {
                "METADATA: Multiple subjects show signs of proxy behavior. \
                 Operator entity visible in background."
            }
            "PHOTO_████.jpg" => {
                "IMAGE ANALYSIS: Operator symbol carved into tree. \
                 Dimensional distortion effects visible."
            }
            _ => "FILE CONTENT CORRUPTED OR CLASSIFIED",
        }
    }
}

/// The archive every session starts with
pub fn initial_evidence() -> Vec<EvidenceFile> {
    vec![
        EvidenceFile::new(
            "RECORDING_001.mp4",
            EvidenceKind::Video,
            EvidenceStatus::Corrupted,
            Classification::Secret,
            "Operator sighting - multiple witnesses",
        ),
        EvidenceFile::new(
            "PHOTO_████.jpg",
            EvidenceKind::Image,
            EvidenceStatus::Redacted,
            Classification::TopSecret,
            "Symbol manifestation in suburban area",
        ),
        EvidenceFile::new(
            "AUDIO_LOG_47.wav",
            EvidenceKind::Audio,
            EvidenceStatus::Available,
            Classification::Confidential,
            "Collective unconscious transmission",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_seeds_three_files() {
        let files = initial_evidence();
        assert_eq!(files.len(), 3);
        assert_eq!(files[0].status, EvidenceStatus::Corrupted);
        assert_eq!(files[1].status, EvidenceStatus::Redacted);
        assert_eq!(files[2].status, EvidenceStatus::Available);
    }

    #[test]
    fn known_files_have_transcripts() {
        for file in initial_evidence() {
            assert_ne!(file.transcript(), "FILE CONTENT CORRUPTED OR CLASSIFIED");
        }
    }
}
