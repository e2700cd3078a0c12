//! Thali JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use thali_app::{
    context::AppContext,
    seed::{ensure_admin, seed_menu},
};

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod config;
mod extensions;
mod foods;
mod healthcheck;
mod observability;
mod orders;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Thali JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init_logging(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    let app = AppContext::in_memory();

    if config.seed.seed_menu {
        match seed_menu(app.foods.as_ref()).await {
            Ok(count) => info!(count, "seeded menu"),
            Err(seed_error) => {
                error!("failed to seed menu: {seed_error}");

                process::exit(1);
            }
        }
    }

    if let Some((username, password)) = config.seed.admin() {
        if let Err(seed_error) = ensure_admin(app.users.as_ref(), username, password).await {
            error!("failed to create admin account: {seed_error}");

            process::exit(1);
        }

        info!(username, "admin account ready");
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("api")
                .hoop(auth::middleware::handler)
                .push(foods_router())
                .push(orders_router())
                .push(Router::with_path("register").post(auth::register::handler))
                .push(Router::with_path("login").post(auth::login::handler))
                .push(Router::with_path("logout").post(auth::logout::handler))
                .push(Router::with_path("user").get(auth::user::handler)),
        );

    let doc = OpenApi::new("Thali API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();
    let grace = config.server.shutdown_grace();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, grace).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}

fn foods_router() -> Router {
    Router::with_path("foods")
        .get(foods::index::handler)
        .post(foods::create::handler)
        .push(Router::with_path("category/{category}").get(foods::category::handler))
        .push(
            Router::with_path("{id}")
                .get(foods::get::handler)
                .put(foods::update::handler)
                .delete(foods::delete::handler),
        )
}

fn orders_router() -> Router {
    // `user` is matched before `{id}`
    Router::with_path("orders")
        .get(orders::index::handler)
        .post(orders::create::handler)
        .push(Router::with_path("user").get(orders::user::handler))
        .push(
            Router::with_path("{id}")
                .get(orders::get::handler)
                .push(Router::with_path("status").patch(orders::status::handler)),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::AUTHORIZATION,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::{
        orders::OrderResponse,
        test_helpers::{Mocks, TEST_TOKEN, customer, order},
    };

    use super::*;

    #[tokio::test]
    async fn test_user_orders_route_is_not_taken_as_an_id() -> TestResult {
        let owner = customer().id;
        let mut mocks = Mocks::signed_in(customer());

        mocks.orders.expect_get_order().never();
        mocks
            .orders
            .expect_list_orders_by_user()
            .once()
            .return_once(move |_| Ok(vec![order(1, owner)]));

        let service = mocks.service(Router::with_path("api").push(orders_router()));

        let mut res = TestClient::get("http://example.com/api/orders/user")
            .add_header(AUTHORIZATION, format!("Bearer {TEST_TOKEN}"), true)
            .send(&service)
            .await;

        let body: Vec<OrderResponse> = res.take_json().await?;

        assert_eq!(body.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_non_numeric_food_id_returns_400() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.foods.expect_get_food().never();

        let service = mocks.service(Router::with_path("api").push(foods_router()));

        let res = TestClient::get("http://example.com/api/foods/abc")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
