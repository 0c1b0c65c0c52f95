//! جدول هفتگی و تشخیص تداخل - لایه سرویس
//!
//! از جلسه‌های دروس انتخاب‌شده یک نگاشت `(روز، بازه) ← بلوک‌ها` می‌سازد و
//! وضعیت هر خانه را مشخص می‌کند. هر بار از صفر ساخته می‌شود؛ با مقیاس
//! چند ده درس انتخابی، بازمحاسبه کامل ساده‌تر و امن‌تر از به‌روزرسانی
//! تدریجی است.

use crate::models::{CourseRecord, SlotOccupant, SlotStatus, WeeklyGrid};
use crate::services::session_parser::parse_schedule;
use std::collections::BTreeSet;

/// ساخت جدول هفتگی از دروس انتخاب‌شده
///
/// قاعده وضعیت هر خانه:
/// - بیش از یک کد درس متمایز ← همه بلوک‌ها `Conflict`
/// - یک کد درس ولی چند بلوک ← همه `MultiPart` (مثلاً نظری + حل تمرین)
/// - یک بلوک تنها ← `Single`
pub fn build_weekly_grid<'a, I>(courses: I) -> WeeklyGrid
where
    I: IntoIterator<Item = &'a CourseRecord>,
{
    let mut grid = WeeklyGrid::new();

    for course in courses {
        for session in parse_schedule(&course.schedule_html) {
            grid.entry((session.day, session.slot))
                .or_default()
                .push(SlotOccupant {
                    course_id: course.id.clone(),
                    course_name: course.name.clone(),
                    professor: course.professor.clone(),
                    is_tutorial: session.is_tutorial,
                    text: session.text,
                    status: SlotStatus::Single,
                });
        }
    }

    for occupants in grid.values_mut() {
        let distinct = occupants
            .iter()
            .map(|o| o.course_id.as_str())
            .collect::<BTreeSet<_>>()
            .len();
        let status = if distinct > 1 {
            SlotStatus::Conflict
        } else if occupants.len() > 1 {
            SlotStatus::MultiPart
        } else {
            SlotStatus::Single
        };
        for occupant in occupants.iter_mut() {
            occupant.status = status;
        }
    }

    grid
}
