pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;
pub mod utils;

use std::sync::Arc;

use crate::database::store::PortalStore;
use crate::services::{
    auth_service::AuthService, catalog_service::CatalogService, quiz_service::QuizService,
    result_service::ResultService,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PortalStore>,
    pub auth_service: AuthService,
    pub catalog_service: CatalogService,
    pub quiz_service: QuizService,
    pub result_service: ResultService,
}

impl AppState {
    pub fn new(store: Arc<dyn PortalStore>, quiz_size: usize) -> Self {
        let auth_service = AuthService::new(store.clone());
        let catalog_service = CatalogService::new(store.clone());
        let quiz_service = QuizService::new(store.clone(), quiz_size);
        let result_service = ResultService::new(store.clone());

        Self {
            store,
            auth_service,
            catalog_service,
            quiz_service,
            result_service,
        }
    }
}
