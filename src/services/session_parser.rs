//! تجزیه متن برنامه هفتگی - لایه سرویس
//!
//! سلول برنامه یک بلوب HTML کوتاه است: چند خط جداشده با `<br>` که هر
//! خط یا یک جلسه کلاسی است یا اطلاعات امتحان. این سرویس خط‌های کلاسی را
//! به `Session` تبدیل می‌کند؛ خط امتحان به سرویس `exam` سپرده می‌شود.

use crate::models::{Session, TimeSlot};
use crate::services::day_classifier::classify_day;
use crate::services::normalizer::normalize;
use once_cell::sync::Lazy;
use regex::Regex;

/// جداکننده خطوط: `<br>`، `<br/>`، `<BR >` و مانند آن
static BR_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("الگوی ثابت جداکننده خط"));

/// الگوی بازه ساعت `H:MM-H:MM` با فاصله اختیاری دور خط تیره
static TIME_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2}):(\d{2})\s*-\s*(\d{1,2}):(\d{2})").expect("الگوی ثابت بازه ساعت")
});

/// نشانه خط مربوط به امتحان؛ این خطوط از برنامه هفتگی حذف می‌شوند
const EXAM_TOKEN: &str = "امتحان";

/// نشانه جلسه حل تمرین
const TUTORIAL_TOKEN: &str = "حل تمرین";

/// بازه ساعت استخراج‌شده از یک خط
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start_hour: u32,
    pub start_minute: u32,
    pub end_hour: u32,
    pub end_minute: u32,
}

/// استخراج اولین بازه ساعت از متن
pub fn extract_time_range(text: &str) -> Option<TimeRange> {
    let caps = TIME_RANGE.captures(text)?;
    Some(TimeRange {
        start_hour: caps[1].parse().ok()?,
        start_minute: caps[2].parse().ok()?,
        end_hour: caps[3].parse().ok()?,
        end_minute: caps[4].parse().ok()?,
    })
}

/// تجزیه بلوب برنامه یک درس به دنباله جلسه‌ها
///
/// هر خط: نرمال‌سازی، حذف خط خالی یا خط امتحان، تشخیص روز، تعیین بازه.
/// خطی که روز یا بازه شناخته‌شده نداشته باشد بی‌صدا حذف می‌شود؛ یک بلوب
/// می‌تواند صفر تا چند جلسه بدهد (مثلاً نظری + حل تمرین).
pub fn parse_schedule(schedule_html: &str) -> Vec<Session> {
    let mut sessions = Vec::new();

    for line in BR_SPLIT.split(schedule_html) {
        let text = normalize(line);
        if text.is_empty() || text.contains(EXAM_TOKEN) {
            continue;
        }

        let Some(day) = classify_day(&text) else {
            continue;
        };
        let Some(range) = extract_time_range(&text) else {
            continue;
        };
        let Some(slot) = TimeSlot::from_start_hour(range.start_hour) else {
            continue;
        };

        let is_tutorial = text.contains(TUTORIAL_TOKEN);
        sessions.push(Session {
            day,
            slot,
            is_tutorial,
            text,
        });
    }

    sessions
}
