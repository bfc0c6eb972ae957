use actix_web::web;

pub mod game;
pub mod health;
pub mod rooms;

/// Configure application routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Room lifecycle + game flow: /api/rooms/**
    cfg.service(
        web::scope("/api/rooms")
            .configure(rooms::configure_routes)
            .configure(game::configure_routes),
    );
}
