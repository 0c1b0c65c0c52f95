pub mod course;
pub mod exam;
pub mod session;

pub use course::{CourseFilter, CourseRecord, FilteredCourses, GenderKind};
pub use exam::ExamEntry;
pub use session::{Session, SlotOccupant, SlotStatus, TimeSlot, Weekday, WeeklyGrid};
