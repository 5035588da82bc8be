pub mod extract_service;
pub mod job_service;
pub mod match_service;
pub mod resume_service;
pub mod skill_service;
pub mod user_service;
