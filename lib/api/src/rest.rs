use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use gamesage_core::{GameSage, QueryAnswer, RankedResult, GAMENET_GAMES_URL};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Deserialize)]
struct QueryParams {
    text: Option<String>,
}

#[derive(Serialize)]
struct GameNetResponse {
    user_submitted_text: String,
    most_related_games_str: String,
    least_related_games_str: String,
}

#[derive(Serialize)]
struct QueryResponse {
    query: String,
    normalized_text: String,
    most_related: Vec<RelatedGame>,
    least_related: Vec<RelatedGame>,
}

#[derive(Serialize)]
struct RelatedGame {
    id: String,
    title: String,
    score: f32,
    link: String,
}

impl From<RankedResult> for RelatedGame {
    fn from(result: RankedResult) -> Self {
        let link = format!("{}{}", GAMENET_GAMES_URL, result.id);
        Self {
            id: result.id,
            title: result.title,
            score: result.score,
            link,
        }
    }
}

pub struct RestApi;

impl RestApi {
    pub async fn start(sage: Arc<GameSage>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(sage.clone()))
                .configure(configure)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

/// Register every route. Expects `web::Data<Arc<GameSage>>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/query", web::get().to(query))
        .route("/submittedText={text}", web::get().to(submitted_text));
}

async fn health(sage: web::Data<Arc<GameSage>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "catalog_size": sage.catalog().len()
    })))
}

/// Legacy GameNet endpoint, lists rendered as `id&score,...`
async fn submitted_text(
    sage: web::Data<Arc<GameSage>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let text = path.into_inner();
    match answer(&sage, text.clone()).await {
        Ok(answer) => {
            let (most, least) = answer.gamenet_strings();
            Ok(HttpResponse::Ok().json(GameNetResponse {
                user_submitted_text: text,
                most_related_games_str: most,
                least_related_games_str: least,
            }))
        }
        Err(response) => Ok(response),
    }
}

async fn query(
    sage: web::Data<Arc<GameSage>>,
    params: web::Query<QueryParams>,
) -> ActixResult<HttpResponse> {
    let Some(text) = params.into_inner().text else {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Missing 'text' query parameter"
        })));
    };

    match answer(&sage, text.clone()).await {
        Ok(answer) => Ok(HttpResponse::Ok().json(QueryResponse {
            query: text,
            normalized_text: answer.normalized_text,
            most_related: answer.most_related.into_iter().map(Into::into).collect(),
            least_related: answer.least_related.into_iter().map(Into::into).collect(),
        })),
        Err(response) => Ok(response),
    }
}

/// Run the query on the blocking pool; failures become 500 JSON bodies
async fn answer(sage: &web::Data<Arc<GameSage>>, text: String) -> Result<QueryAnswer, HttpResponse> {
    debug!(text = %text, "answering query");
    let sage = Arc::clone(sage.get_ref());
    match web::block(move || sage.answer_query(&text)).await {
        Ok(Ok(answer)) => Ok(answer),
        Ok(Err(e)) => {
            error!("Query failed: {}", e);
            Err(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            })))
        }
        Err(e) => {
            error!("Query worker failed: {}", e);
            Err(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Query could not be processed"
            })))
        }
    }
}
