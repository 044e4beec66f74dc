//! API route definitions

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{application, auth, business, franchise, public, user};
use crate::middleware::auth_middleware;
use crate::AppState;

/// Build the /api router. Auth and public sub-routers are open; everything
/// else sits behind the bearer-token middleware.
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/public", public_routes())
        .nest("/users", user_routes(state.clone()))
        .nest("/businesses", business_routes(state.clone()))
        .nest("/franchises", franchise_routes(state.clone()))
        .nest("/applications", application_routes(state))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/businesses", get(public::list_businesses))
        .route("/businesses/:id", get(public::get_business))
        .route(
            "/businesses/industry/:industry",
            get(public::list_businesses_by_industry),
        )
        .route("/franchises", get(public::list_franchises))
        .route("/franchises/:id", get(public::get_franchise))
        .route(
            "/franchises/business/:business_id",
            get(public::list_franchises_by_business),
        )
}

fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(user::list_users))
        .route(
            "/:id",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

fn business_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(business::list_businesses).post(business::create_business),
        )
        .route(
            "/:id",
            get(business::get_business)
                .put(business::update_business)
                .delete(business::delete_business),
        )
        .route("/owner/:owner_id", get(business::list_businesses_by_owner))
        .route(
            "/industry/:industry",
            get(business::list_businesses_by_industry),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

fn franchise_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(franchise::list_franchises).post(franchise::create_franchise),
        )
        .route(
            "/:id",
            get(franchise::get_franchise)
                .put(franchise::update_franchise)
                .delete(franchise::delete_franchise),
        )
        .route(
            "/business/:business_id",
            get(franchise::list_franchises_by_business),
        )
        .route(
            "/industry/:industry",
            get(franchise::list_franchises_by_industry),
        )
        .route("/investment", get(franchise::list_franchises_by_investment))
        .route("/location", get(franchise::list_franchises_by_location))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

fn application_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(application::list_applications).post(application::create_application),
        )
        .route(
            "/:id",
            get(application::get_application)
                .put(application::update_application)
                .delete(application::delete_application),
        )
        .route(
            "/:id/status",
            patch(application::update_application_status),
        )
        .route(
            "/applicant/:applicant_id",
            get(application::list_applications_by_applicant),
        )
        .route(
            "/franchise/:franchise_id",
            get(application::list_applications_by_franchise),
        )
        .route(
            "/status/:status",
            get(application::list_applications_by_status),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
