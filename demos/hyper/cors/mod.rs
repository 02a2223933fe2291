use cors_gate::{Cors, CorsOptions};
use std::sync::Arc;

pub type SharedCors = Arc<Cors>;
pub type SharedAppState = Arc<AppState>;

pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> SharedAppState {
    let options = CorsOptions {
        origins: vec!["http://api.example.com".into()],
        methods: vec!["GET".into(), "POST".into()],
        allowed_headers: vec![
            "Content-Type".into(),
            "X-Requested-With".into(),
            "X-Example-Trace".into(),
        ],
        exposed_headers: vec!["X-Example-Trace".into()],
        credentials: true,
        max_age: 600,
        debug: true,
        ..CorsOptions::default()
    };

    Arc::new(AppState {
        cors: Arc::new(Cors::new(options)),
        greeting: "Welcome to the Hyper CORS demo!",
    })
}

pub mod middleware;
