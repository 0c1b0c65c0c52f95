use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// روزهای هفته آموزشی (شنبه تا چهارشنبه)
///
/// پنجشنبه در این دامنه کلاس ندارد و روز شناخته‌شده محسوب نمی‌شود.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Weekday {
    Saturday = 0,
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
}

impl Weekday {
    /// شاخص روز (۰ = شنبه)
    pub fn index(self) -> usize {
        self as usize
    }

    /// ساخت از شاخص
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Weekday::Saturday),
            1 => Some(Weekday::Sunday),
            2 => Some(Weekday::Monday),
            3 => Some(Weekday::Tuesday),
            4 => Some(Weekday::Wednesday),
            _ => None,
        }
    }

    /// نام فارسی روز
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Saturday => "شنبه",
            Weekday::Sunday => "یکشنبه",
            Weekday::Monday => "دوشنبه",
            Weekday::Tuesday => "سه‌شنبه",
            Weekday::Wednesday => "چهارشنبه",
        }
    }

    /// همه روزهای آموزشی به‌ترتیب
    pub fn all() -> [Weekday; 5] {
        [
            Weekday::Saturday,
            Weekday::Sunday,
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
        ]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// بازه‌های ثابت کلاسی در هر روز
///
/// مرزها نهادی‌اند نه عمومی: ساعت شروع ۱۲ و قبل از ۷ به هیچ بازه‌ای
/// نمی‌افتد و جلسه حذف می‌شود.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TimeSlot {
    S08,
    S10,
    S13,
    S15,
    S17,
}

impl TimeSlot {
    /// تعیین بازه از ساعت شروع جلسه
    pub fn from_start_hour(hour: u32) -> Option<Self> {
        match hour {
            7..=9 => Some(TimeSlot::S08),
            10..=11 => Some(TimeSlot::S10),
            13..=14 => Some(TimeSlot::S13),
            15..=16 => Some(TimeSlot::S15),
            h if h >= 17 => Some(TimeSlot::S17),
            _ => None,
        }
    }

    /// کلید دو رقمی بازه
    pub fn key(self) -> &'static str {
        match self {
            TimeSlot::S08 => "08",
            TimeSlot::S10 => "10",
            TimeSlot::S13 => "13",
            TimeSlot::S15 => "15",
            TimeSlot::S17 => "17",
        }
    }

    /// برچسب نمایشی بازه
    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::S08 => "08-10",
            TimeSlot::S10 => "10-12",
            TimeSlot::S13 => "13-15",
            TimeSlot::S15 => "15-17",
            TimeSlot::S17 => "17-19",
        }
    }

    /// همه بازه‌ها به‌ترتیب روز
    pub fn all() -> [TimeSlot; 5] {
        [
            TimeSlot::S08,
            TimeSlot::S10,
            TimeSlot::S13,
            TimeSlot::S15,
            TimeSlot::S17,
        ]
    }
}

/// یک جلسه کلاسی استخراج‌شده از یک خط متن برنامه
///
/// گذرا است و هر بار از `schedule_html` درس دوباره ساخته می‌شود.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub day: Weekday,
    pub slot: TimeSlot,
    /// آیا خط شامل «حل تمرین» است
    pub is_tutorial: bool,
    /// متن نرمال‌شده خط
    pub text: String,
}

/// وضعیت یک بلوک در خانه جدول هفتگی
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotStatus {
    /// تنها بلوک خانه
    Single,
    /// چند جلسه از همان درس؛ تداخل نیست
    MultiPart,
    /// دروس متفاوت در یک خانه؛ تداخل واقعی
    Conflict,
}

/// بلوک یک درس داخل یک خانه از جدول هفتگی
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotOccupant {
    pub course_id: String,
    pub course_name: String,
    pub professor: String,
    pub is_tutorial: bool,
    pub text: String,
    pub status: SlotStatus,
}

/// جدول هفتگی: هر خانه `(روز، بازه)` فهرست مرتب بلوک‌ها
pub type WeeklyGrid = BTreeMap<(Weekday, TimeSlot), Vec<SlotOccupant>>;
