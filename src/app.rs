//! لایه برنامه
//!
//! جریان یک اجرا: بارگذاری کاتالوگ از پوشه، بازیابی انتخاب‌های
//! ذخیره‌شده، اعمال کدهای داده‌شده در خط فرمان، چاپ فهرست و جدول‌ها و
//! در پایان ذخیره دوباره انتخاب‌ها. چاپ متنی اینجا جایگزین لایه نمایش
//! است؛ موتور فقط مقدارهای آماده نمایش تحویل می‌دهد.

use crate::config::Config;
use crate::models::{
    CourseFilter, ExamEntry, GenderKind, SlotOccupant, SlotStatus, TimeSlot, Weekday,
};
use crate::services::catalog::load_catalog_dir;
use crate::services::engine::ScheduleEngine;
use crate::services::storage::{load_selection, save_selection};
use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

/// ساختار اصلی برنامه
pub struct App {
    config: Config,
    engine: ScheduleEngine,
}

/// آمار یک اجرا
#[derive(Debug, Default)]
struct RunStats {
    catalog_total: usize,
    restored: usize,
    toggled: usize,
}

impl App {
    /// ساخت برنامه با کاتالوگ خالی
    pub fn new(config: Config) -> Self {
        Self {
            config,
            engine: ScheduleEngine::new(),
        }
    }

    /// اجرای جریان کامل
    ///
    /// # پارامترها
    /// - `toggle_ids`: کدهای درسی که از خط فرمان باید انتخاب/لغو شوند
    pub fn run(&mut self, toggle_ids: &[String]) -> Result<()> {
        log_startup(&self.config);

        let mut stats = RunStats::default();

        // ۱. بارگذاری کاتالوگ
        let records = load_catalog_dir(Path::new(&self.config.catalog_dir))?;
        self.engine.ingest(records);
        stats.catalog_total = self.engine.catalog_len();

        if stats.catalog_total == 0 {
            warn!("⚠️ هیچ درسی در کاتالوگ پیدا نشد، برنامه پایان یافت");
            return Ok(());
        }

        // ۲. بازیابی انتخاب‌های ذخیره‌شده
        if let Some(ids) = load_selection(Path::new(&self.config.storage_path)) {
            stats.restored = self.engine.restore_selection(ids);
        }

        // ۳. اعمال کدهای خط فرمان
        for id in toggle_ids {
            if self.engine.course(id).is_none() {
                warn!("⚠️ کد {} در کاتالوگ نیست و نادیده گرفته شد", id);
                continue;
            }
            self.engine.toggle(id);
            stats.toggled += 1;
        }

        // ۴. خروجی‌ها
        self.print_course_list();
        self.print_timetable();
        self.print_exam_schedule();

        // ۵. ذخیره انتخاب‌ها
        save_selection(
            Path::new(&self.config.storage_path),
            self.engine.selected_ids(),
        )?;

        log_run_complete(&stats);
        Ok(())
    }

    /// چاپ فهرست دروس (محدود به سقف نمایش)
    fn print_course_list(&self) {
        let result = self
            .engine
            .filter_courses(&CourseFilter::default(), self.config.display_limit);

        println!("\n📚 فهرست دروس ({} درس):", result.total);
        for course in &result.courses {
            let mark = if self.engine.is_selected(&course.id) {
                "✔"
            } else {
                " "
            };
            let badge = GenderKind::classify(&course.gender).name();
            println!(
                "  [{}] {} | {} | {} | {}",
                mark, course.id, course.name, course.professor, badge
            );
        }
        if result.total > result.courses.len() {
            println!(
                "  ... و {} درس دیگر (سقف نمایش {})",
                result.total - result.courses.len(),
                self.config.display_limit
            );
        }
    }

    /// چاپ جدول هفتگی انتخاب‌ها
    fn print_timetable(&self) {
        let grid = self.engine.weekly_grid();

        println!("\n🗓️ جدول هفتگی:");
        for slot in TimeSlot::all() {
            println!("  ── بازه {} ──", slot.label());
            for day in Weekday::all() {
                let Some(occupants) = grid.get(&(day, slot)) else {
                    continue;
                };
                let blocks: Vec<String> = occupants.iter().map(format_occupant).collect();
                println!("    {}: {}", day.name(), blocks.join(" ، "));
            }
        }
    }

    /// چاپ برنامه امتحانات انتخاب‌ها
    fn print_exam_schedule(&self) {
        let entries = self.engine.exam_schedule();
        if entries.is_empty() {
            return;
        }

        println!("\n📝 برنامه امتحانات:");
        for entry in &entries {
            println!("  {}", format_exam_entry(entry));
        }
    }
}

/// قالب‌بندی یک بلوک جدول برای چاپ
fn format_occupant(occupant: &SlotOccupant) -> String {
    let kind = if occupant.is_tutorial { " (ت)" } else { "" };
    let status = match occupant.status {
        SlotStatus::Conflict => " ⛔ تداخل",
        SlotStatus::MultiPart => " ↻ چندبخشی",
        SlotStatus::Single => "",
    };
    format!("{}{}{} - {}", occupant.course_name, kind, status, occupant.professor)
}

/// قالب‌بندی یک ردیف برنامه امتحانات
fn format_exam_entry(entry: &ExamEntry) -> String {
    let date = entry.date.as_deref().unwrap_or("-");
    let time = entry.time.as_deref().unwrap_or("-");
    let mark = if entry.conflict { " ⛔ هم‌تاریخ" } else { "" };
    format!("{} | {} | {}{}", entry.course_name, date, time, mark)
}

// ========== توابع کمکی لاگ ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 شروع برنامه انتخاب واحد");
    info!("📁 پوشه کاتالوگ: {}", config.catalog_dir);
    info!("{}", "=".repeat(60));
}

fn log_run_complete(stats: &RunStats) {
    info!("{}", "─".repeat(60));
    info!(
        "✅ پایان اجرا: {} درس در کاتالوگ، {} انتخاب بازیابی‌شده، {} تغییر انتخاب",
        stats.catalog_total, stats.restored, stats.toggled
    );
    info!("{}", "─".repeat(60));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_occupant_marks_conflict_and_tutorial() {
        let occupant = SlotOccupant {
            course_id: "101".to_string(),
            course_name: "ریاضی".to_string(),
            professor: "استاد".to_string(),
            is_tutorial: true,
            text: "شنبه 08:00-10:00".to_string(),
            status: SlotStatus::Conflict,
        };
        let line = format_occupant(&occupant);
        assert!(line.contains("(ت)"));
        assert!(line.contains("تداخل"));
    }

    #[test]
    fn format_exam_entry_uses_dash_sentinels() {
        let entry = ExamEntry {
            course_id: "101".to_string(),
            course_name: "ریاضی".to_string(),
            date: None,
            time: None,
            conflict: false,
        };
        assert_eq!(format_exam_entry(&entry), "ریاضی | - | -");
    }
}
