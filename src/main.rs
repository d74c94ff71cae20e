use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use prep_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let cors_origin = config.cors_origin.clone();

    let state = AppState::new(config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::root)
            .service(handlers::health_check)
            .service(handlers::register_user)
            .service(handlers::login_user)
            .service(handlers::get_user)
            .service(handlers::update_topics)
            .service(handlers::update_companies)
            .service(handlers::create_question)
            .service(handlers::list_questions)
            .service(handlers::get_question)
            .service(handlers::metadata_topics)
            .service(handlers::metadata_companies)
            .service(handlers::start_quiz)
            .service(handlers::submit_quiz)
            .service(handlers::quiz_results)
            .service(handlers::get_analytics)
            .service(handlers::get_checklist)
            .service(handlers::ai_chat)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
