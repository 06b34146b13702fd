pub mod home;
pub mod problem_detail;
