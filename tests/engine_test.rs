//! تست یکپارچه جریان کامل: فایل HTML کاتالوگ ← موتور ← جدول و امتحانات

use entekhab_vahed::services::catalog::load_catalog_dir;
use entekhab_vahed::services::storage::{load_selection, save_selection};
use entekhab_vahed::{ScheduleEngine, SlotStatus, TimeSlot, Weekday};
use std::fs;

/// ساخت یک ردیف ۱۴ سلولی جدول گلستان
fn table_row(guard: &str, id: &str, name: &str, schedule: &str) -> String {
    let mut cells = vec![String::new(); 14];
    cells[0] = guard.to_string();
    cells[1] = "فنی و مهندسی".to_string();
    cells[3] = "مهندسی کامپیوتر".to_string();
    cells[4] = id.to_string();
    cells[5] = name.to_string();
    cells[11] = "مختلط".to_string();
    cells[12] = "دکتر محمدی".to_string();
    cells[13] = schedule.to_string();
    let tds: String = cells.iter().map(|c| format!("<td>{c}</td>")).collect();
    format!("<tr>{tds}</tr>")
}

fn sample_catalog_html() -> String {
    format!(
        "<html><body><table>{}{}{}{}</table></body></html>",
        // ردیف سرصفحه باید رد شود
        table_row("ردیف", "-", "-", "-"),
        table_row(
            "1",
            "1911001",
            "ریاضی مهندسی",
            "شنبه 08:00-10:00<br>یکشنبه 10:00-12:00<br>امتحان (1403/3/15) ساعت: 08:00-10:00",
        ),
        table_row(
            "2",
            "1911002",
            "فیزیک 2",
            "شنبه 09:00-10:30<br>امتحان (۱۴۰۳/۳/۱۵) ساعت: ۱۴:۰۰-۱۶:۰۰",
        ),
        table_row("3", "1911003", "کارگاه", "برنامه اعلام نشده"),
    )
}

#[test]
fn full_flow_from_html_to_grid_and_exams() {
    let dir = tempfile::tempdir().expect("ساخت پوشه موقت");
    fs::write(dir.path().join("golestan.html"), sample_catalog_html()).expect("نوشتن فایل");

    // بارگذاری کاتالوگ
    let records = load_catalog_dir(dir.path()).expect("خواندن پوشه کاتالوگ");
    let mut engine = ScheduleEngine::new();
    assert_eq!(engine.ingest(records), 3);

    // انتخاب دو درس هم‌زمان
    engine.toggle("1911001");
    engine.toggle("1911002");
    engine.toggle("1911003");

    // جدول هفتگی: شنبه 08 تداخل، یکشنبه 10 تک‌درس
    let grid = engine.weekly_grid();
    let sat = &grid[&(Weekday::Saturday, TimeSlot::S08)];
    assert_eq!(sat.len(), 2);
    assert!(sat.iter().all(|o| o.status == SlotStatus::Conflict));

    let sun = &grid[&(Weekday::Sunday, TimeSlot::S10)];
    assert_eq!(sun.len(), 1);
    assert_eq!(sun[0].course_id, "1911001");
    assert_eq!(sun[0].status, SlotStatus::Single);

    // امتحانات: هر دو درس هم‌تاریخ علامت تداخل دارند، درس بی‌برنامه آخر است
    let exams = engine.exam_schedule();
    assert_eq!(exams.len(), 3);
    assert_eq!(exams[0].date.as_deref(), Some("1403/03/15"));
    assert!(exams[0].conflict && exams[1].conflict);
    assert_eq!(exams[2].course_id, "1911003");
    assert_eq!(exams[2].date, None);
    assert!(!exams[2].conflict);
}

#[test]
fn selection_survives_persistence_and_drops_stale_ids() {
    let dir = tempfile::tempdir().expect("ساخت پوشه موقت");
    fs::write(dir.path().join("golestan.html"), sample_catalog_html()).expect("نوشتن فایل");
    let storage = dir.path().join("selection.json");

    // جلسه اول: انتخاب و ذخیره
    let mut engine = ScheduleEngine::new();
    engine.ingest(load_catalog_dir(dir.path()).expect("خواندن پوشه"));
    engine.toggle("1911001");
    engine.toggle("1911002");
    save_selection(&storage, engine.selected_ids()).expect("ذخیره انتخاب‌ها");

    // جلسه دوم: کاتالوگ کوچک‌تر شده و یکی از کدها دیگر وجود ندارد
    let mut next = ScheduleEngine::new();
    let records = load_catalog_dir(dir.path()).expect("خواندن پوشه");
    next.ingest(records.into_iter().filter(|r| r.id != "1911002"));

    let ids = load_selection(&storage).expect("بازیابی انتخاب‌ها");
    assert_eq!(next.restore_selection(ids), 1);
    assert!(next.is_selected("1911001"));
    assert!(!next.is_selected("1911002"));
}
