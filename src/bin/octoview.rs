use actix_web::{error, middleware, web, App, HttpServer, Result};
use octoview::config::Opts;
use octoview::{handlers, CONFIG};

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    let (_handle, _opt) = Opts::parse_from_args();
    let config = &*CONFIG;
    let state = config.clone().into_state();
    let state2 = state.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .default_service(web::route().to(not_found))
            .service(web::scope("/api/github").configure(handlers::github::init))
            .service(web::scope("/health").configure(handlers::health::init))
            .configure(handlers::pages::init)
    })
    .workers(1)
    .keep_alive(std::time::Duration::from_secs(300))
    .bind(("0.0.0.0", state2.config.port))?
    .run()
    .await
}

async fn not_found() -> Result<&'static str> {
    Err(error::ErrorNotFound("route not found"))
}
