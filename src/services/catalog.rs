//! ورود کاتالوگ از فایل‌های HTML - لایه سرویس
//!
//! خروجی سامانه آموزش یک جدول HTML است با ستون‌های ثابت. هر ردیف داده
//! دست‌کم ۱۴ سلول دارد و ستون اول شماره ردیف است؛ ردیف‌های سرصفحه و
//! جمع‌بندی همین‌جا کنار گذاشته می‌شوند.

use crate::error::{AppResult, CatalogError};
use crate::models::CourseRecord;
use crate::services::normalizer::normalize;
use scraper::{ElementRef, Html, Selector};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// شماره ستون‌ها در جدول خروجی
const COL_GUARD: usize = 0;
const COL_FACULTY: usize = 1;
const COL_GROUP: usize = 3;
const COL_ID: usize = 4;
const COL_NAME: usize = 5;
const COL_GENDER: usize = 11;
const COL_PROFESSOR: usize = 12;
const COL_SCHEDULE: usize = 13;

/// حداقل تعداد سلول یک ردیف داده
const MIN_CELLS: usize = 14;

/// تجزیه یک سند HTML و استخراج ردیف‌های درس
///
/// ردیف‌های بدشکل بی‌صدا رد می‌شوند؛ حذف تکراری‌ها بر عهده
/// `ScheduleEngine::ingest` است.
pub fn parse_catalog_html(html: &str) -> Vec<CourseRecord> {
    let row_selector = Selector::parse("tr").expect("گزینشگر ثابت tr");
    let cell_selector = Selector::parse("td").expect("گزینشگر ثابت td");

    let document = Html::parse_document(html);
    let mut records = Vec::new();

    for row in document.select(&row_selector) {
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
        if cells.len() < MIN_CELLS {
            continue;
        }

        // ستون نگهبان باید یک عدد صحیح مثبت باشد
        let guard = normalize(&cell_text(cells[COL_GUARD]));
        if !guard.parse::<u64>().map(|n| n > 0).unwrap_or(false) {
            continue;
        }

        let id = normalize(&cell_text(cells[COL_ID]));
        if id.is_empty() {
            continue;
        }

        records.push(CourseRecord {
            id,
            name: normalize(&cell_text(cells[COL_NAME])),
            faculty: normalize(&cell_text(cells[COL_FACULTY])),
            group: normalize(&cell_text(cells[COL_GROUP])),
            gender: normalize(&cell_text(cells[COL_GENDER])),
            professor: normalize(&cell_text(cells[COL_PROFESSOR])),
            schedule_html: cells[COL_SCHEDULE].inner_html(),
            schedule_text: normalize(&cell_text(cells[COL_SCHEDULE])),
        });
    }

    records
}

/// متن ساده یک سلول، با فاصله بین تکه‌ها
fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<Vec<_>>().join(" ")
}

/// خواندن همه فایل‌های `.html`/`.htm` یک پوشه
///
/// فایلی که خوانده یا تجزیه نشود با هشدار رد می‌شود و بقیه ادامه
/// می‌یابند؛ فقط نبودِ خود پوشه خطاست.
pub fn load_catalog_dir(dir: &Path) -> AppResult<Vec<CourseRecord>> {
    if !dir.exists() {
        return Err(CatalogError::DirectoryNotFound {
            path: dir.display().to_string(),
        }
        .into());
    }

    let entries = fs::read_dir(dir).map_err(|source| CatalogError::ReadFailed {
        path: dir.display().to_string(),
        source,
    })?;

    let mut all_records = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CatalogError::ReadFailed {
            path: dir.display().to_string(),
            source,
        })?;
        let path = entry.path();
        let is_html = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("html") | Some("htm")
        );
        if !is_html {
            continue;
        }

        info!(
            "📄 در حال خواندن: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );
        match fs::read_to_string(&path) {
            Ok(html) => {
                let records = parse_catalog_html(&html);
                info!("✓ {} ردیف درس پیدا شد", records.len());
                all_records.extend(records);
            }
            Err(e) => {
                warn!("⚠️ خواندن فایل {} ناموفق بود: {}", path.display(), e);
            }
        }
    }

    Ok(all_records)
}
