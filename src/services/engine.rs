//! موتور برنامه‌ریزی - لایه سرویس
//!
//! `ScheduleEngine` حالت را صریح و تزریق‌شده نگه می‌دارد: کاتالوگ دروس و
//! مجموعه انتخاب. هیچ حالت سراسری‌ای وجود ندارد و همه پرس‌وجوها خالص‌اند؛
//! جدول هفتگی و برنامه امتحانات با هر فراخوانی از صفر ساخته می‌شوند.

use crate::models::{CourseFilter, CourseRecord, ExamEntry, FilteredCourses, WeeklyGrid};
use crate::services::exam::build_exam_schedule;
use crate::services::normalizer::normalize;
use crate::services::timetable::build_weekly_grid;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info};

/// سقف پیش‌فرض تعداد درس در فهرست نمایش
pub const DEFAULT_DISPLAY_LIMIT: usize = 100;

/// موتور برنامه‌ریزی انتخاب واحد
#[derive(Debug, Default)]
pub struct ScheduleEngine {
    catalog: Vec<CourseRecord>,
    selection: BTreeSet<String>,
}

impl ScheduleEngine {
    /// ساخت موتور با کاتالوگ خالی
    pub fn new() -> Self {
        Self::default()
    }

    // ========== کاتالوگ ==========

    /// افزودن دروس به کاتالوگ با حذف تکراری‌ها بر اساس کد درس
    ///
    /// # بازگشت
    /// تعداد دروسی که واقعا اضافه شدند
    pub fn ingest<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = CourseRecord>,
    {
        let mut known: HashSet<String> = self.catalog.iter().map(|c| c.id.clone()).collect();
        let mut added = 0;
        for record in records {
            if record.id.is_empty() || known.contains(&record.id) {
                continue;
            }
            known.insert(record.id.clone());
            self.catalog.push(record);
            added += 1;
        }
        if added > 0 {
            info!("✓ {} درس جدید به کاتالوگ اضافه شد", added);
        }
        added
    }

    /// تعداد کل دروس کاتالوگ
    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    /// یافتن یک درس با کد
    pub fn course(&self, id: &str) -> Option<&CourseRecord> {
        self.catalog.iter().find(|c| c.id == id)
    }

    /// فهرست مرتب دانشکده‌ها برای پرکردن گزینه‌های فیلتر
    pub fn faculties(&self) -> Vec<String> {
        self.catalog
            .iter()
            .map(|c| c.faculty.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// فهرست مرتب گروه‌ها، در صورت نیاز محدود به یک دانشکده
    pub fn groups(&self, faculty: Option<&str>) -> Vec<String> {
        self.catalog
            .iter()
            .filter(|c| faculty.map_or(true, |f| c.faculty == f))
            .map(|c| c.group.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// فیلتر فهرست دروس
    ///
    /// خروجی به `limit` درس محدود می‌شود ولی `total` تعداد کل
    /// تطبیق‌یافته‌ها را نگه می‌دارد.
    pub fn filter_courses(&self, filter: &CourseFilter, limit: usize) -> FilteredCourses {
        let term = normalize(&filter.search).to_lowercase();
        let matched: Vec<&CourseRecord> = self
            .catalog
            .iter()
            .filter(|c| Self::matches(c, filter, &term))
            .collect();

        let total = matched.len();
        debug!("فیلتر: {} درس تطبیق یافت", total);
        FilteredCourses {
            courses: matched.into_iter().take(limit).cloned().collect(),
            total,
        }
    }

    fn matches(course: &CourseRecord, filter: &CourseFilter, term: &str) -> bool {
        if let Some(faculty) = &filter.faculty {
            if &course.faculty != faculty {
                return false;
            }
        }
        if let Some(group) = &filter.group {
            if &course.group != group {
                return false;
            }
        }
        if let Some(gender) = &filter.gender {
            if !course.gender.contains(gender.as_str()) {
                return false;
            }
        }
        if term.is_empty() {
            return true;
        }
        let name = normalize(&course.name).to_lowercase();
        let professor = normalize(&course.professor).to_lowercase();
        name.contains(term) || course.id.contains(term) || professor.contains(term)
    }

    // ========== مجموعه انتخاب ==========

    /// افزودن یا حذف یک درس از انتخاب‌ها
    ///
    /// # بازگشت
    /// وضعیت جدید: آیا درس اکنون انتخاب‌شده است
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selection.remove(id) {
            debug!("درس {} از انتخاب‌ها حذف شد", id);
            false
        } else {
            self.selection.insert(id.to_string());
            debug!("درس {} انتخاب شد", id);
            true
        }
    }

    /// آیا این درس انتخاب شده است؟
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// کدهای انتخاب‌شده
    pub fn selected_ids(&self) -> &BTreeSet<String> {
        &self.selection
    }

    /// پاک‌کردن کل انتخاب‌ها
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// بازیابی انتخاب‌های ذخیره‌شده، محدود به کدهای موجود در کاتالوگ
    ///
    /// # بازگشت
    /// تعداد کدهایی که واقعا بازیابی شدند
    pub fn restore_selection<I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let mut restored = 0;
        for id in ids {
            if self.course(&id).is_some() {
                self.selection.insert(id);
                restored += 1;
            } else {
                debug!("کد {} دیگر در کاتالوگ نیست و کنار گذاشته شد", id);
            }
        }
        restored
    }

    /// دروس انتخاب‌شده‌ای که هنوز در کاتالوگ موجودند
    pub fn selected_courses(&self) -> Vec<&CourseRecord> {
        self.selection
            .iter()
            .filter_map(|id| self.course(id))
            .collect()
    }

    // ========== خروجی‌های آماده نمایش ==========

    /// ساخت جدول هفتگی از انتخاب فعلی (بازمحاسبه کامل)
    pub fn weekly_grid(&self) -> WeeklyGrid {
        build_weekly_grid(self.selected_courses())
    }

    /// ساخت برنامه امتحانات مرتب و علامت‌خورده از انتخاب فعلی
    pub fn exam_schedule(&self) -> Vec<ExamEntry> {
        build_exam_schedule(self.selected_courses())
    }
}
