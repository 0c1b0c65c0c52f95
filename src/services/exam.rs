//! استخراج امتحان و تداخل تاریخ‌ها - لایه سرویس
//!
//! تاریخ و ساعت امتحان از همان متن برنامه درس بیرون کشیده می‌شود.
//! فقط قاعده سخت‌گیرانه معتبر است: تاریخ باید بعد از کلمه «امتحان» و
//! داخل پرانتز باشد، و ساعت بعد از «ساعت:»؛ تاریخ‌های پراکنده در متن
//! ملاک نیستند.

use crate::models::{CourseRecord, ExamEntry};
use crate::services::normalizer::normalize;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::HashMap;

/// تاریخ داخل پرانتز بعد از «امتحان»: `YYYY/M/D` یا `YYYY.M.D`
static EXAM_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"امتحان.*?\((\d{4}[/.]\d{1,2}[/.]\d{1,2})\)").expect("الگوی ثابت تاریخ امتحان")
});

/// بازه ساعت بعد از «امتحان ... ساعت:»
static EXAM_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"امتحان.*?ساعت\s*:\s*(\d{1,2}:\d{2}\s*-\s*\d{1,2}:\d{2})")
        .expect("الگوی ثابت ساعت امتحان")
});

/// استخراج تاریخ امتحان از متن نرمال‌شده
pub fn extract_exam_date(text: &str) -> Option<String> {
    EXAM_DATE.captures(text).map(|caps| caps[1].to_string())
}

/// استخراج ساعت امتحان از متن نرمال‌شده
pub fn extract_exam_time(text: &str) -> Option<String> {
    EXAM_TIME.captures(text).map(|caps| caps[1].replace(' ', ""))
}

/// صفرپرکردن ماه و روز: `1403/3/5` ← `1403/03/05`
///
/// منبع داده صفرپرکردن را تضمین نمی‌کند؛ بدون این نرمال‌سازی،
/// گروه‌بندی و ترتیب واژگانی تاریخ‌ها غلط از آب درمی‌آید.
pub fn canonical_date(raw: &str) -> String {
    let parts: Vec<&str> = raw.split(['/', '.']).collect();
    if parts.len() != 3 {
        return raw.to_string();
    }
    format!("{}/{:0>2}/{:0>2}", parts[0], parts[1], parts[2])
}

/// ساخت برنامه امتحانات دروس انتخاب‌شده
///
/// هر تاریخی که بیش از یک درس داشته باشد، همه دروس آن تاریخ علامت
/// تداخل می‌گیرند. ترتیب خروجی: صعودی بر اساس تاریخ؛ دروس بدون تاریخ
/// آخر فهرست، مرتب بر اساس نام.
pub fn build_exam_schedule<'a, I>(courses: I) -> Vec<ExamEntry>
where
    I: IntoIterator<Item = &'a CourseRecord>,
{
    let mut entries: Vec<ExamEntry> = courses
        .into_iter()
        .map(|course| {
            let text = normalize(&course.schedule_text);
            ExamEntry {
                course_id: course.id.clone(),
                course_name: course.name.clone(),
                date: extract_exam_date(&text).map(|d| canonical_date(&d)),
                time: extract_exam_time(&text),
                conflict: false,
            }
        })
        .collect();

    let mut date_counts: HashMap<String, usize> = HashMap::new();
    for entry in &entries {
        if let Some(date) = &entry.date {
            *date_counts.entry(date.clone()).or_insert(0) += 1;
        }
    }
    for entry in entries.iter_mut() {
        if let Some(date) = &entry.date {
            if date_counts[date] > 1 {
                entry.conflict = true;
            }
        }
    }

    entries.sort_by(|a, b| match (&a.date, &b.date) {
        (Some(da), Some(db)) => da.cmp(db).then_with(|| a.course_name.cmp(&b.course_name)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.course_name.cmp(&b.course_name),
    });

    entries
}
