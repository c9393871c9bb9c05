pub mod blocks;
pub mod catalog;
pub mod course_details;
pub mod learning;
