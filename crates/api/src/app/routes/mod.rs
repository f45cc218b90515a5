use axum::{
    Router,
    routing::{get, post, put},
};

pub mod auth;
pub mod deals;
pub mod system;
pub mod vehicles;

/// Routes reachable without a token.
pub fn public_router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/vehicles", post(vehicles::create_vehicle).get(vehicles::list_vehicles))
        .route("/deals", post(deals::create_deal))
        .route("/sold-vehicles", get(deals::sold_vehicles))
}

/// Routes behind the authentication gate.
pub fn protected_router() -> Router {
    Router::new()
        .route("/logout", post(auth::logout))
        .route("/password", put(auth::change_password))
        .route("/profile", get(auth::profile))
        .route("/my-vehicles", get(vehicles::my_vehicles))
}
