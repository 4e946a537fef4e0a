//! Daily devotional practice catalog backing the checklist.

/// One fixed checklist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyPractice {
    /// Stable id persisted in the checklist slot.
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const DAILY_PRACTICES: &[DailyPractice] = &[
    DailyPractice {
        id: "sholat_5_waktu",
        label: "Shalat 5 Waktu",
        description: "Tiang agama yang tak boleh goyah.",
    },
    DailyPractice {
        id: "tahajjud_malam",
        label: "Shalat Tahajjud",
        description: "Mencari ketenangan di sepertiga malam.",
    },
    DailyPractice {
        id: "tilawah_quran",
        label: "Tilawah Al-Quran",
        description: "Membasuh hati dengan kalam Ilahi.",
    },
    DailyPractice {
        id: "sedekah_harian",
        label: "Sedekah",
        description: "Membersihkan harta, melapangkan jiwa.",
    },
    DailyPractice {
        id: "dzikir_pagi_petang",
        label: "Dzikir Pagi & Petang",
        description: "Benteng diri dari segala kegundahan.",
    },
    DailyPractice {
        id: "shalawat_nabi",
        label: "Shalawat",
        description: "Mendapat syafaat dan ketenangan.",
    },
];

/// Looks up a catalog entry by id.
pub fn find_practice(id: &str) -> Option<&'static DailyPractice> {
    DAILY_PRACTICES.iter().find(|practice| practice.id == id)
}
