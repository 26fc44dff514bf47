//! Topic detection for follow-up suggestions.
//!
//! Pattern-based topic detection over chat text: case-insensitive substring
//! matching against an ordered keyword table, no ML model and no scoring.
//! Each topic carries three authored follow-up questions that the chat
//! screen renders as suggestion chips under a bot reply.

use std::fmt;

/// Category tag used to select a set of follow-up question suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Pengertian,
    Hukum,
    Rukun,
    Jenis,
    Uang,
    Produktif,
    Digital,
    TataCara,
    Nazhir,
    Pembatalan,
    Manfaat,
    /// Fallback for text that matches no keyword group.
    Default,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Keyword groups in priority order. Evaluated top to bottom; the first
/// group with any keyword contained in the text wins. Kept as an ordered
/// slice rather than a map so the tie-break stays authored, not hashed.
const KEYWORD_GROUPS: &[(Topic, &[&str])] = &[
    (Topic::Pengertian, &["pengertian", "apa itu wakaf", "definisi", "maksud wakaf"]),
    (Topic::Hukum, &["hukum", "dalil", "wajib", "sunnah"]),
    (Topic::Rukun, &["rukun", "syarat", "wakif", "shighat"]),
    (Topic::Jenis, &["jenis", "macam", "kategori"]),
    (Topic::Uang, &["uang", "tunai"]),
    (Topic::Produktif, &["produktif"]),
    (Topic::Digital, &["digital", "online", "aplikasi"]),
    (Topic::TataCara, &["tata cara", "cara", "langkah", "prosedur", "ikrar"]),
    (Topic::Nazhir, &["nazhir", "pengelola"]),
    (Topic::Pembatalan, &["batal", "pembatalan", "ditarik"]),
    (Topic::Manfaat, &["manfaat", "keutamaan", "pahala"]),
];

impl Topic {
    /// Every topic, fallback included. Handy for table checks.
    pub const ALL: [Topic; 12] = [
        Topic::Pengertian,
        Topic::Hukum,
        Topic::Rukun,
        Topic::Jenis,
        Topic::Uang,
        Topic::Produktif,
        Topic::Digital,
        Topic::TataCara,
        Topic::Nazhir,
        Topic::Pembatalan,
        Topic::Manfaat,
        Topic::Default,
    ];

    /// Classifies free text into exactly one topic. Total: unmatched text
    /// lands on [`Topic::Default`].
    pub fn detect(text: &str) -> Topic {
        let text = text.to_lowercase();
        for (topic, keywords) in KEYWORD_GROUPS {
            if keywords.iter().any(|k| text.contains(k)) {
                return *topic;
            }
        }
        Topic::Default
    }

    pub fn label(&self) -> &'static str {
        match self {
            Topic::Pengertian => "pengertian",
            Topic::Hukum => "hukum",
            Topic::Rukun => "rukun",
            Topic::Jenis => "jenis",
            Topic::Uang => "uang",
            Topic::Produktif => "produktif",
            Topic::Digital => "digital",
            Topic::TataCara => "tatacara",
            Topic::Nazhir => "nazhir",
            Topic::Pembatalan => "pembatalan",
            Topic::Manfaat => "manfaat",
            Topic::Default => "default",
        }
    }

    /// Three follow-up questions shown as chips under a bot reply.
    pub fn suggestions(&self) -> [&'static str; 3] {
        match self {
            Topic::Pengertian => [
                "Apa hukum wakaf dalam Islam?",
                "Apa saja rukun wakaf?",
                "Apa perbedaan wakaf dengan sedekah?",
            ],
            Topic::Hukum => [
                "Apa dalil yang mendasari wakaf?",
                "Apakah wakaf wajib atau sunnah?",
                "Bagaimana hukum wakaf uang?",
            ],
            Topic::Rukun => [
                "Siapa saja yang boleh menjadi wakif?",
                "Apa syarat harta yang diwakafkan?",
                "Bagaimana shighat wakaf diucapkan?",
            ],
            Topic::Jenis => [
                "Apa itu wakaf produktif?",
                "Apa itu wakaf uang?",
                "Apa contoh wakaf keluarga?",
            ],
            Topic::Uang => [
                "Bagaimana cara berwakaf uang?",
                "Berapa nominal minimal wakaf uang?",
                "Lembaga apa yang menerima wakaf uang?",
            ],
            Topic::Produktif => [
                "Apa contoh wakaf produktif?",
                "Bagaimana hasil wakaf produktif disalurkan?",
                "Siapa yang mengelola wakaf produktif?",
            ],
            Topic::Digital => [
                "Bagaimana cara berwakaf secara online?",
                "Apakah wakaf melalui aplikasi itu sah?",
                "Platform apa saja untuk wakaf digital?",
            ],
            Topic::TataCara => [
                "Apa saja langkah ikrar wakaf?",
                "Dokumen apa yang diperlukan untuk berwakaf?",
                "Ke mana wakaf harus didaftarkan?",
            ],
            Topic::Nazhir => [
                "Apa tugas nazhir wakaf?",
                "Siapa yang mengawasi kinerja nazhir?",
                "Apakah nazhir mendapat imbalan?",
            ],
            Topic::Pembatalan => [
                "Apakah wakaf bisa dibatalkan?",
                "Bagaimana jika harta wakaf rusak?",
                "Apakah wakaf boleh ditarik kembali?",
            ],
            Topic::Manfaat => [
                "Apa manfaat wakaf bagi masyarakat?",
                "Apa keutamaan wakaf dalam Islam?",
                "Apakah pahala wakaf terus mengalir?",
            ],
            Topic::Default => [
                "Apa pengertian wakaf?",
                "Apa hukum wakaf dalam Islam?",
                "Bagaimana tata cara berwakaf?",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_group_match() {
        assert_eq!(Topic::detect("Apa hukum wakaf?"), Topic::Hukum);
        assert_eq!(Topic::detect("siapa nazhir di daerah saya"), Topic::Nazhir);
        assert_eq!(Topic::detect("wakaf lewat aplikasi"), Topic::Digital);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(Topic::detect("APA HUKUM WAKAF?"), Topic::Hukum);
        assert_eq!(Topic::detect("Wakaf PRODUKTIF itu gimana"), Topic::Produktif);
    }

    #[test]
    fn earlier_group_wins_regardless_of_text_order() {
        // "rukun" appears first in the text, but hukum is listed earlier.
        assert_eq!(Topic::detect("rukun dan hukum wakaf"), Topic::Hukum);
        assert_eq!(Topic::detect("jenis wakaf uang"), Topic::Jenis);
    }

    #[test]
    fn unmatched_text_falls_back_to_default() {
        assert_eq!(Topic::detect("xyz random text"), Topic::Default);
        assert_eq!(Topic::detect(""), Topic::Default);
    }

    #[test]
    fn hukum_scenario_returns_hukum_suggestions() {
        let topic = Topic::detect("Apa hukum wakaf?");
        assert_eq!(topic, Topic::Hukum);
        assert_eq!(topic.suggestions()[0], "Apa dalil yang mendasari wakaf?");
    }

    #[test]
    fn default_scenario_returns_default_suggestions() {
        let topic = Topic::detect("xyz random text");
        assert_eq!(topic.suggestions()[0], "Apa pengertian wakaf?");
    }

    #[test]
    fn every_topic_has_three_nonempty_suggestions() {
        for topic in Topic::ALL {
            let suggestions = topic.suggestions();
            assert_eq!(suggestions.len(), 3, "{topic} must have 3 suggestions");
            for s in suggestions {
                assert!(!s.is_empty(), "{topic} has an empty suggestion");
            }
        }
    }

    #[test]
    fn every_keyword_detects_its_own_group() {
        // Each keyword on its own must resolve to the group that owns it:
        // no earlier group may shadow a later group's keyword outright.
        for (expected, keywords) in KEYWORD_GROUPS {
            for k in *keywords {
                assert_eq!(Topic::detect(k), *expected, "keyword {k:?} shadowed");
            }
        }
    }

    #[test]
    fn labels_are_unique() {
        for a in Topic::ALL {
            for b in Topic::ALL {
                if a != b {
                    assert_ne!(a.label(), b.label());
                }
            }
        }
    }
}
