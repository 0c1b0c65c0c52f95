use serde::{Deserialize, Serialize};

/// یک ردیف از برنامه امتحانات دروس انتخاب‌شده
///
/// تاریخ همیشه به شکل صفرپرشده `YYYY/MM/DD` نگه داشته می‌شود تا
/// مقایسه واژگانی همان ترتیب زمانی باشد. نبودِ تاریخ یا ساعت با
/// `None` مشخص می‌شود، نه رشته خالی.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamEntry {
    pub course_id: String,
    pub course_name: String,
    /// تاریخ امتحان به شکل `YYYY/MM/DD`
    pub date: Option<String>,
    /// ساعت امتحان به شکل `HH:MM-HH:MM`
    pub time: Option<String>,
    /// آیا درس دیگری در همین تاریخ امتحان دارد
    pub conflict: bool,
}
