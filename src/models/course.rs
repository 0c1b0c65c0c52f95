use serde::{Deserialize, Serialize};

/// یک ردیف درس از کاتالوگ دانشگاه
///
/// بعد از ورود به کاتالوگ تغییر نمی‌کند؛ یکتایی `id` را لایه ورود
/// (حذف تکراری‌ها) تضمین می‌کند.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// کد درس (نرمال‌شده)
    pub id: String,
    /// نام درس
    pub name: String,
    /// دانشکده
    pub faculty: String,
    /// گروه آموزشی
    pub group: String,
    /// جنسیت (متن آزاد، ممکن است چند کلمه باشد)
    pub gender: String,
    /// نام استاد
    pub professor: String,
    /// سلول برنامه با نشانه‌گذاری خام (برای جداکردن خطوط روی `<br>`)
    pub schedule_html: String,
    /// متن ساده همان سلول (برای جست‌وجو و استخراج امتحان)
    pub schedule_text: String,
}

/// دسته‌بندی جنسیت برای نشان (badge) فهرست دروس
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenderKind {
    Male,
    Female,
    Mixed,
}

impl GenderKind {
    /// تشخیص دسته از متن آزاد ستون جنسیت
    ///
    /// اگر هر دو دسته در متن باشد، «خواهران» مقدم است.
    pub fn classify(gender: &str) -> Self {
        if gender.contains("زن") || gender.contains("خواهر") {
            return GenderKind::Female;
        }
        if gender.contains("مرد") || gender.contains("برادر") {
            return GenderKind::Male;
        }
        GenderKind::Mixed
    }

    /// نام استاندارد دسته
    pub fn name(self) -> &'static str {
        match self {
            GenderKind::Male => "برادران",
            GenderKind::Female => "خواهران",
            GenderKind::Mixed => "مختلط",
        }
    }
}

/// معیارهای فیلتر فهرست دروس
///
/// دانشکده و گروه تطبیق دقیق دارند؛ جنسیت تطبیق زیررشته‌ای
/// (ستون جنسیت متن آزاد است)؛ `search` روی نام، کد و استاد جست‌وجو می‌کند.
#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub faculty: Option<String>,
    pub group: Option<String>,
    pub gender: Option<String>,
    pub search: String,
}

/// نتیجه فیلتر: فهرست محدودشده به سقف نمایش به‌همراه تعداد کل
#[derive(Debug, Clone)]
pub struct FilteredCourses {
    pub courses: Vec<CourseRecord>,
    pub total: usize,
}
