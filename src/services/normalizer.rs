//! نرمال‌سازی متن - لایه سرویس
//!
//! حروف عربی، ارقام فارسی و فاصله‌های به‌هم‌ریخته خروجی سامانه آموزش را
//! یکدست می‌کند تا بقیه سرویس‌ها با یک شکل واحد کار کنند.

/// نرمال‌سازی یک رشته
///
/// - `ي` → `ی` و `ك` → `ک` و `ة` → `ه`
/// - ارقام فارسی `۰..۹` → ارقام ASCII
/// - نیم‌فاصله (U+200C) → فاصله معمولی
/// - هر دنباله فاصله/خط جدید → یک فاصله، و حذف فاصله ابتدا و انتها
///
/// تابع خالص و خطاناپذیر است؛ دو بار نرمال‌کردن همان نتیجه یک بار است.
pub fn normalize(input: &str) -> String {
    let mut mapped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            'ي' => mapped.push('ی'),
            'ك' => mapped.push('ک'),
            'ة' => mapped.push('ه'),
            '۰'..='۹' => {
                let digit = (ch as u32) - ('۰' as u32);
                mapped.push(char::from(b'0' + digit as u8));
            }
            '\u{200c}' => mapped.push(' '),
            other => mapped.push(other),
        }
    }
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}
