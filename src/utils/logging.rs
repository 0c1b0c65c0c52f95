//! راه‌اندازی لاگ با tracing
//!
//! سطح پیش‌فرض `info` است و با متغیر `RUST_LOG` قابل تغییر.

use tracing_subscriber::EnvFilter;

/// راه‌اندازی subscriber سراسری لاگ
///
/// چندبار صدازدن (مثلا در تست‌ها) بی‌خطر است.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
