//! ذخیره و بازیابی انتخاب‌ها - لایه سرویس
//!
//! مجموعه انتخاب به‌همراه زمان ذخیره در یک فایل JSON کوچک نگه داشته
//! می‌شود. خرابی فایل خطای سخت نیست: فقط هشدار و شروع از صفر.

use crate::error::{AppResult, StorageError};
use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

/// عمر مجاز رکورد ذخیره‌شده؛ قدیمی‌تر از این یک‌جا دور ریخته می‌شود
pub const MAX_AGE_DAYS: i64 = 30;

/// رکورد ذخیره‌شده انتخاب‌ها
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSelection {
    pub saved_at: DateTime<Local>,
    pub ids: Vec<String>,
}

/// نوشتن مجموعه انتخاب فعلی روی دیسک
pub fn save_selection(path: &Path, ids: &BTreeSet<String>) -> AppResult<()> {
    let record = SavedSelection {
        saved_at: Local::now(),
        ids: ids.iter().cloned().collect(),
    };
    let json = serde_json::to_string_pretty(&record)
        .map_err(|source| StorageError::EncodeFailed { source })?;
    fs::write(path, json).map_err(|source| StorageError::WriteFailed {
        path: path.display().to_string(),
        source,
    })?;
    Ok(())
}

/// بازیابی انتخاب‌های ذخیره‌شده
///
/// نبود فایل، خرابی JSON یا گذشتن عمر ۳۰ روزه همگی `None` برمی‌گردانند؛
/// پالایش شناسه‌های غایب از کاتالوگ بر عهده `ScheduleEngine` است.
pub fn load_selection(path: &Path) -> Option<Vec<String>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(e) => {
            warn!("⚠️ خواندن فایل انتخاب‌ها ناموفق بود: {}", e);
            return None;
        }
    };

    let record: SavedSelection = match serde_json::from_str(&content) {
        Ok(record) => record,
        Err(e) => {
            warn!("⚠️ فایل انتخاب‌های ذخیره‌شده قابل خواندن نیست، نادیده گرفته شد: {}", e);
            return None;
        }
    };

    let age = Local::now().signed_duration_since(record.saved_at);
    if age > Duration::days(MAX_AGE_DAYS) {
        info!("🗑️ انتخاب‌های ذخیره‌شده قدیمی‌تر از {} روزند و دور ریخته شدند", MAX_AGE_DAYS);
        return None;
    }

    Some(record.ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");

        let ids: BTreeSet<String> = ["101", "202"].iter().map(|s| s.to_string()).collect();
        save_selection(&path, &ids).unwrap();

        let restored = load_selection(&path).unwrap();
        assert_eq!(restored, vec!["101".to_string(), "202".to_string()]);
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_selection(&dir.path().join("نیست.json")), None);
    }

    #[test]
    fn corrupt_file_is_none_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");
        fs::write(&path, "{ خراب ").unwrap();
        assert_eq!(load_selection(&path), None);
    }

    #[test]
    fn stale_record_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");

        let record = SavedSelection {
            saved_at: Local::now() - Duration::days(MAX_AGE_DAYS + 1),
            ids: vec!["101".to_string()],
        };
        fs::write(&path, serde_json::to_string(&record).unwrap()).unwrap();

        assert_eq!(load_selection(&path), None);
    }

    #[test]
    fn fresh_record_survives() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");

        let record = SavedSelection {
            saved_at: Local::now() - Duration::days(MAX_AGE_DAYS - 1),
            ids: vec!["101".to_string()],
        };
        fs::write(&path, serde_json::to_string(&record).unwrap()).unwrap();

        assert_eq!(load_selection(&path), Some(vec!["101".to_string()]));
    }
}
