//! Reconciliation of the translated and raw chapter tracks.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::Chapter;
use crate::preferences::{PreferenceProvider, SHOW_ALL_RAWS_DEFAULT, SHOW_ALL_RAWS_KEY};

/// Which raw chapters make it into the reconciled list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChapterPolicy {
    /// Drop raw chapters whose number already has a translated release.
    #[default]
    PreferTranslated,
    /// Keep every raw chapter.
    IncludeAllRaw,
}

impl ChapterPolicy {
    pub fn from_show_all_raws(show_all_raws: bool) -> Self {
        if show_all_raws {
            Self::IncludeAllRaw
        } else {
            Self::PreferTranslated
        }
    }

    pub fn from_preferences<P: PreferenceProvider + ?Sized>(prefs: &P) -> Self {
        Self::from_show_all_raws(prefs.get_bool(SHOW_ALL_RAWS_KEY, SHOW_ALL_RAWS_DEFAULT))
    }
}

/// Merge both tracks into a single list, highest chapter number first.
///
/// Under [`ChapterPolicy::PreferTranslated`] a raw chapter is dropped when
/// *any* translated chapter has the same number. The output sort is stable:
/// for equal numbers translated chapters precede raw ones, and each track
/// keeps its own input order.
pub fn reconcile(translated: Vec<Chapter>, raw: Vec<Chapter>, policy: ChapterPolicy) -> Vec<Chapter> {
    let raw_total = raw.len();
    let raw: Vec<Chapter> = match policy {
        ChapterPolicy::IncludeAllRaw => raw,
        ChapterPolicy::PreferTranslated => {
            let translated_numbers: HashSet<u32> =
                translated.iter().map(|c| c.number.to_bits()).collect();
            raw.into_iter()
                .filter(|c| !translated_numbers.contains(&c.number.to_bits()))
                .collect()
        }
    };

    tracing::debug!(
        translated = translated.len(),
        raw_kept = raw.len(),
        raw_dropped = raw_total - raw.len(),
        ?policy,
        "Reconciled chapter tracks"
    );

    let mut chapters = translated;
    chapters.extend(raw);
    chapters.sort_by(|a, b| b.number.total_cmp(&a.number));
    chapters
}
