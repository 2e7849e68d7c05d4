use std::io;
use std::sync::Arc;

use ntex::web;
use ntex::web::HttpRequest;
use ntex_files::NamedFile;
use spdlog::{error, info};

use crate::config::Config;
use crate::post_processor::*;
use crate::post_store::PostStore;
use crate::query_string::QueryString;

struct AppState {
    store: PostStore,
    config: Config,
}

fn query_string(req: &HttpRequest) -> QueryString {
    QueryString::from(req.uri().query().unwrap_or(""))
}

fn json_response(result: io::Result<String>) -> web::HttpResponse {
    match result {
        Ok(body) => web::HttpResponse::Ok()
            .content_type("application/json")
            .body(body),
        Err(e) => {
            error!("Error building response: {}", e);
            web::HttpResponse::InternalServerError()
                .body(format!("Error loading posts: {}", e))
        }
    }
}

fn not_found(slug: &str) -> web::HttpResponse {
    web::HttpResponse::NotFound()
        .content_type("application/json")
        .body(format!(r#"{{"error":"post not found","slug":{}}}"#, serde_json::Value::from(slug)))
}

#[web::get("/api/posts")]
async fn posts(req: HttpRequest, state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let query = PostQuery::from_query_string(&query_string(&req));
    json_response(list_posts(&state.store, &state.config.defaults, &query))
}

#[web::get("/api/posts/{slug}")]
async fn post(slug: web::types::Path<String>, state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let slug = slug.into_inner();
    match view_post(&state.store, &state.config.defaults, &slug) {
        Ok(Some(body)) => json_response(Ok(body)),
        Ok(None) => not_found(&slug),
        Err(e) => json_response(Err(e)),
    }
}

#[web::get("/api/posts/{slug}/others")]
async fn other_posts(req: HttpRequest, slug: web::types::Path<String>, state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let slug = slug.into_inner();
    let count = query_string(&req).get_limit(state.config.defaults.latest_count);
    json_response(latest_posts(&state.store, &state.config.defaults, count, Some(&slug)))
}

#[web::get("/api/latest")]
async fn latest(req: HttpRequest, state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let count = query_string(&req).get_limit(state.config.defaults.latest_count);
    json_response(latest_posts(&state.store, &state.config.defaults, count, None))
}

#[web::get("/api/categories")]
async fn categories(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    json_response(list_categories(&state.store))
}

#[web::get("/api/tags")]
async fn tags(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    json_response(list_tags(&state.store))
}

#[web::get("/api/slugs")]
async fn slugs(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    json_response(list_slugs(&state.store))
}

#[web::get("/public/{file_name}")]
async fn public_files(path: web::types::Path<String>, state: web::types::State<Arc<AppState>>) -> Result<NamedFile, web::Error> {
    get_public_file(&state.config.paths.public_dir, &path.into_inner())
}

pub async fn server_run(config: Config) -> io::Result<()> {
    let store = PostStore::with_extension(&config.paths.posts_dir, &config.defaults.extension);

    // A missing posts directory is a configuration error, fail before binding.
    let post_slugs = store.slugs()?;
    info!("Serving {} posts from {}", post_slugs.len(), store.root_dir().display());
    for slug in post_slugs.iter() {
        info!("Post: {}", slug);
    }

    let bind_addr = config.server.address.clone();
    let bind_port = config.server.port;
    let app_state = Arc::new(AppState {
        store,
        config,
    });

    web::HttpServer::new(move || {
        web::App::new()
            .state(app_state.clone())
            .service(posts)
            .service(other_posts)
            .service(post)
            .service(latest)
            .service(categories)
            .service(tags)
            .service(slugs)
            .service(public_files)
    })
        .bind((bind_addr, bind_port))?
        .run()
        .await
}
