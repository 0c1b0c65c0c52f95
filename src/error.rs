use thiserror::Error;

/// خطای سطح برنامه
///
/// موتور پردازش متن خطا ندارد و تکه‌های ناشناخته را بی‌صدا رد می‌کند؛
/// فقط مرزهای ورودی/خروجی (کاتالوگ، ذخیره‌سازی، پیکربندی) خطا می‌دهند.
#[derive(Debug, Error)]
pub enum AppError {
    /// خطای خواندن کاتالوگ
    #[error("خطای کاتالوگ: {0}")]
    Catalog(#[from] CatalogError),
    /// خطای ذخیره‌سازی انتخاب‌ها
    #[error("خطای ذخیره‌سازی: {0}")]
    Storage(#[from] StorageError),
    /// خطای پیکربندی
    #[error("خطای پیکربندی: {0}")]
    Config(#[from] ConfigError),
}

/// خطاهای ورود کاتالوگ
#[derive(Debug, Error)]
pub enum CatalogError {
    /// پوشه کاتالوگ وجود ندارد
    #[error("پوشه کاتالوگ وجود ندارد: {path}")]
    DirectoryNotFound { path: String },
    /// خواندن پوشه یا فایل ناموفق بود
    #[error("خواندن {path} ناموفق بود: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// خطاهای ذخیره‌سازی
#[derive(Debug, Error)]
pub enum StorageError {
    /// ساخت JSON ناموفق بود
    #[error("ساخت JSON انتخاب‌ها ناموفق بود: {source}")]
    EncodeFailed {
        #[source]
        source: serde_json::Error,
    },
    /// نوشتن فایل ناموفق بود
    #[error("نوشتن فایل انتخاب‌ها ({path}) ناموفق بود: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// خطاهای پیکربندی
#[derive(Debug, Error)]
pub enum ConfigError {
    /// خواندن فایل پیکربندی ناموفق بود
    #[error("خواندن فایل پیکربندی ({path}) ناموفق بود: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// تجزیه TOML ناموفق بود
    #[error("تجزیه فایل پیکربندی ({path}) ناموفق بود: {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// نوع نتیجه برنامه
pub type AppResult<T> = Result<T, AppError>;
