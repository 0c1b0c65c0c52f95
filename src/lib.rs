//! # انتخاب واحد
//!
//! ابزار برنامه‌ریزی انتخاب واحد دانشگاه بر پایه خروجی HTML سامانه آموزش
//!
//! ## معماری
//!
//! سیستم سه لایه دارد:
//!
//! ### ① لایه مدل‌ها (Models)
//! - `models/` - ساختارهای داده خالص: درس، جلسه، امتحان
//! - `CourseRecord` - یک ردیف درس از کاتالوگ
//! - `Session` / `SlotOccupant` - جلسه استخراج‌شده و جایگاه آن در جدول هفتگی
//!
//! ### ② لایه سرویس‌ها (Services)
//! - `services/` - پردازش متن برنامه و منطق تداخل
//! - `normalizer` - یکدست‌سازی حروف عربی/فارسی و ارقام
//! - `day_classifier` - جدول قواعد تشخیص روز هفته
//! - `session_parser` - تبدیل متن خام برنامه به جلسه‌ها
//! - `timetable` - ساخت جدول هفتگی و تشخیص تداخل
//! - `exam` - استخراج تاریخ/ساعت امتحان و تداخل تاریخ‌ها
//! - `catalog` - خواندن فایل‌های HTML و ساخت کاتالوگ
//! - `storage` - ذخیره و بازیابی انتخاب‌ها
//! - `engine` - نمای یکپارچه روی کاتالوگ و مجموعه انتخاب
//!
//! ### ③ لایه برنامه (App)
//! - `app` - بارگذاری کاتالوگ، بازیابی انتخاب‌ها، چاپ فهرست و جدول‌ها

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// دوباره‌صادرکردن انواع پرکاربرد
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{
    CourseFilter, CourseRecord, ExamEntry, FilteredCourses, GenderKind, Session, SlotOccupant,
    SlotStatus, TimeSlot, Weekday, WeeklyGrid,
};
pub use services::engine::ScheduleEngine;
pub use services::exam::{extract_exam_date, extract_exam_time};
pub use services::normalizer::normalize;
pub use services::session_parser::{extract_time_range, parse_schedule};
