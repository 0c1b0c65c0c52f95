//! تشخیص روز هفته - لایه سرویس
//!
//! نام روزهای فارسی همه از کلمه پایه «شنبه» ساخته می‌شوند، پس ترتیب
//! بررسی مهم است: «یکشنبه» خودش زیررشته «شنبه» را دارد. قواعد در یک
//! جدول ترتیب‌دار نگهداری می‌شوند تا سیاست اولویت آزمون‌پذیر باشد.

use crate::models::Weekday;

/// یک قاعده تشخیص: الگوهای زیررشته‌ای و روز متناظر
///
/// `day == None` یعنی الگو شناخته می‌شود اما روز آموزشی نیست (پنجشنبه).
struct DayRule {
    patterns: &'static [&'static str],
    day: Option<Weekday>,
}

/// جدول قواعد به‌ترتیب اولویت
///
/// پنجشنبه اول بررسی می‌شود چون کلاس ندارد ولی الگویش شامل بقیه است؛
/// «شنبه» خالی آخر می‌آید تا داخل «یکشنبه» به اشتباه پیدا نشود.
/// هر روز دو شکل دارد: با فاصله داخلی و بدون آن (نیم‌فاصله قبلاً در
/// نرمال‌سازی به فاصله تبدیل شده است).
const DAY_RULES: &[DayRule] = &[
    DayRule {
        patterns: &["پنج شنبه", "پنجشنبه"],
        day: None,
    },
    DayRule {
        patterns: &["چهار شنبه", "چهارشنبه"],
        day: Some(Weekday::Wednesday),
    },
    DayRule {
        patterns: &["سه شنبه", "سهشنبه"],
        day: Some(Weekday::Tuesday),
    },
    DayRule {
        patterns: &["دو شنبه", "دوشنبه"],
        day: Some(Weekday::Monday),
    },
    DayRule {
        patterns: &["یک شنبه", "یکشنبه"],
        day: Some(Weekday::Sunday),
    },
    DayRule {
        patterns: &["شنبه"],
        day: Some(Weekday::Saturday),
    },
];

/// تشخیص روز هفته از متن نرمال‌شده
///
/// ورودی باید قبلاً از `normalize` گذشته باشد. اولین قاعده‌ای که یکی از
/// الگوهایش در متن باشد برنده است؛ اگر هیچ قاعده‌ای نگیرد `None`.
pub fn classify_day(normalized: &str) -> Option<Weekday> {
    for rule in DAY_RULES {
        if rule.patterns.iter().any(|p| normalized.contains(p)) {
            return rule.day;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::normalizer::normalize;

    #[test]
    fn recognizes_all_teaching_days() {
        assert_eq!(classify_day("شنبه 08:00"), Some(Weekday::Saturday));
        assert_eq!(classify_day("یکشنبه 08:00"), Some(Weekday::Sunday));
        assert_eq!(classify_day("دوشنبه 08:00"), Some(Weekday::Monday));
        assert_eq!(classify_day("سه شنبه 08:00"), Some(Weekday::Tuesday));
        assert_eq!(classify_day("چهارشنبه 08:00"), Some(Weekday::Wednesday));
    }

    #[test]
    fn thursday_is_not_a_teaching_day() {
        assert_eq!(classify_day("پنجشنبه 08:00"), None);
        assert_eq!(classify_day("پنج شنبه 08:00"), None);
    }

    #[test]
    fn sunday_does_not_fall_back_to_saturday() {
        // «یکشنبه» زیررشته «شنبه» را دارد؛ نباید شنبه تشخیص داده شود
        assert_eq!(classify_day("یکشنبه"), Some(Weekday::Sunday));
        assert_eq!(classify_day("یک شنبه"), Some(Weekday::Sunday));
    }

    #[test]
    fn priority_order_resolves_mixed_text() {
        // وقتی هر دو نام در متن باشند، قاعده با اولویت بالاتر برنده است
        assert_eq!(classify_day("سه شنبه یکشنبه"), Some(Weekday::Tuesday));
        assert_eq!(classify_day("یکشنبه چهارشنبه"), Some(Weekday::Wednesday));
    }

    #[test]
    fn zwnj_form_matches_after_normalization() {
        assert_eq!(
            classify_day(&normalize("سه\u{200c}شنبه 13:00-15:00")),
            Some(Weekday::Tuesday)
        );
    }

    #[test]
    fn unknown_text_is_unrecognized() {
        assert_eq!(classify_day("کلاس آنلاین"), None);
        assert_eq!(classify_day(""), None);
    }
}
