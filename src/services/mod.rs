pub mod catalog;
pub mod day_classifier;
pub mod engine;
pub mod exam;
pub mod normalizer;
pub mod session_parser;
pub mod storage;
pub mod timetable;

pub use engine::ScheduleEngine;
