//src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/forgot-password", post(handlers::auth::forgot_password))
        .route("/reset-password", post(handlers::auth::reset_password));

    // Rotas de usuário (protegidas pelo middleware)
    let user_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .route("/me/navigation", get(handlers::auth::get_my_navigation))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let company_routes = Router::new()
        .route(
            "/",
            post(handlers::company::create_company)
                .get(handlers::company::list_companies)
                .delete(handlers::company::delete_company),
        )
        .route("/{id}/summary", get(handlers::company::company_summary))
        .route("/leave", post(handlers::company::leave_company))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let membership_routes = Router::new()
        .route(
            "/",
            post(handlers::membership::create_join_request)
                .get(handlers::membership::list_join_requests),
        )
        .route("/{id}/accept", post(handlers::membership::accept_join_request))
        .route("/{id}/reject", post(handlers::membership::reject_join_request))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let attendance_routes = Router::new()
        .route(
            "/",
            post(handlers::attendance::mark_attendance)
                .get(handlers::attendance::list_attendance),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let leave_routes = Router::new()
        .route(
            "/",
            post(handlers::leave::create_leave_request)
                .get(handlers::leave::list_leave_requests),
        )
        .route("/mine", get(handlers::leave::my_leave_requests))
        .route("/{id}/grant", post(handlers::leave::grant_leave))
        .route("/{id}/reject", post(handlers::leave::reject_leave))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let chat_routes = Router::new()
        .route(
            "/",
            post(handlers::chat::send_message).get(handlers::chat::list_messages),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api/users", user_routes)
        .nest("/api/companies", company_routes)
        .nest("/api/join-requests", membership_routes)
        .nest("/api/attendance", attendance_routes)
        .nest("/api/leave-requests", leave_routes)
        .nest("/api/messages", chat_routes)
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
