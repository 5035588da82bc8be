pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    job_service::JobService, skill_service::SkillService, user_service::UserService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub user_service: UserService,
    pub skill_service: SkillService,
    pub job_service: JobService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let user_service = UserService::new(pool.clone());
        let skill_service = SkillService::new(pool.clone());
        let job_service = JobService::new(pool.clone());

        Self {
            pool,
            user_service,
            skill_service,
            job_service,
        }
    }
}
