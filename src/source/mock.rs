//! Canned poem source for offline use and tests.

use std::time::Duration;

use async_trait::async_trait;
use rand::seq::IndexedRandom;

use crate::error::Outcome;
use crate::region::Region;
use crate::source::PoemSource;

/// Token replaced by the first keyword during personalization.
const FIRST_PLACEHOLDER: &str = "งาม";
/// Token replaced by the second keyword during personalization.
const SECOND_PLACEHOLDER: &str = "ใส";

/// Default artificial latency, matching a realistic remote round trip.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

const NORTH_POEMS: [&str; 2] = [
    "ภูเขาสูงใสใน ลานนาโบราณ\nดอกไม้บานสวย งามตาดุจใส\nลมหวานพัดมา เสียงธรรมชาติ\nใจเย็นสบาย ในแผ่นดินไทย",
    "เชียงใหม่งามตา วัดทองระยิบ\nดอยสุเทพสูง เสียงระฆังก้อง\nลือนามไกลโพ้น ศิลปะลานนา\nหัวใจคนไทย รักแผ่นดินนี้",
];

const SOUTH_POEMS: [&str; 2] = [
    "ทะเลใต้คลื่นใส ปลาแหวกว่าย\nเกาะเล็กเกาะใหญ่ งามเหลือคำ\nลมทะเลพัดเซา หอมกลิ่นเกลือ\nใต้ฟ้าใสสดใส สีฟ้าแสงทอง",
    "มะพร้าวริมชาย คลื่นใสซู่ซ่า\nอาหารใต้จัด รสเด็ดเผ็ดร้อน\nเรือประมงยาว แล่นผ่านคลื่น\nชาวใต้ใจดี ยิ้มแย้มต้อนรับ",
];

const NORTHEAST_POEMS: [&str; 2] = [
    "อีสานแผ่นดิน แห้งแล้งกว้างใหญ่\nข้าวโพดเหลือง ผลผลิตดี\nปลาร้าส้มตำ รสชาติถิ่นฐาน\nใจคนอีสาน อบอุ่นจริงใจ",
    "ไผ่ป่าไผ่เหลือง โบกสะบัดลม\nดินแดนอีสาน วัฒนธรรมดี\nแซ่บจี๊ดหอมหวล รสชาติจัดจ้าน\nฟ้าใสเวียงจันทน์ ถิ่นไทยแท้",
];

const CENTRAL_POEMS: [&str; 2] = [
    "กรุงเทพมหานคร เมืองใหญ่คึกคัก\nวัดพระแก้วงาม พระบรมราชวัง\nเจ้าพระยาไหล ผ่านใจกลางเมือง\nดินแดนกลางไทย มรดกโลกงาม",
    "นาข้าวเขียวขจี ในดินกลางไทย\nชาวนาใจดี ปลูกข้าวขาวขำ\nวัฒนธรรมดี งดงามยิ่งนัก\nแผ่นดินกลางไทย หัวใจของชาติ",
];

/// Deterministic canned-poem source with keyword substitution.
///
/// Picks uniformly among the region's canned set and personalizes the
/// text by substituting placeholder tokens with the first two keywords.
/// Always succeeds.
pub struct MockSource {
    delay: Duration,
}

impl MockSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The canned set used for a region code. Unrecognized codes fall
    /// back to the central set.
    pub fn poems_for(region_code: &str) -> &'static [&'static str] {
        match Region::from_code(region_code).unwrap_or(Region::Central) {
            Region::North => &NORTH_POEMS,
            Region::South => &SOUTH_POEMS,
            Region::Northeast => &NORTHEAST_POEMS,
            Region::Central => &CENTRAL_POEMS,
        }
    }

    /// Substitute placeholder tokens with the first two keywords.
    ///
    /// Keyword 0 replaces `งาม`, keyword 1 replaces `ใส`; keywords at
    /// index 2 and beyond are accepted but unused, matching the
    /// original behavior. Replacement is plain text substitution over
    /// all occurrences, not position-aware.
    fn personalize(poem: &str, keywords: &[String]) -> String {
        let mut text = poem.to_string();
        for (index, keyword) in keywords.iter().enumerate() {
            match index {
                0 => text = text.replace(FIRST_PLACEHOLDER, keyword),
                1 => text = text.replace(SECOND_PLACEHOLDER, keyword),
                _ => {}
            }
        }
        text
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl PoemSource for MockSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(&self, region_code: &str, keywords: &[String]) -> Outcome {
        // Exercise the same async contract as the remote source.
        tokio::time::sleep(self.delay).await;

        let set = Self::poems_for(region_code);
        let poem = set
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(CENTRAL_POEMS[0]);

        tracing::debug!(region = region_code, "serving canned poem");
        Ok(Self::personalize(poem, keywords))
    }
}
