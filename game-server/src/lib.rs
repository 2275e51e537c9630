use std::sync::Arc;
use uuid::Uuid;
use warp::Filter;
use warp::http::StatusCode;

use crate::gesture_service::GestureService;
use crate::session_manager::SessionManager;
use game_types::{
    ConfigureRequest, Difficulty, ErrorResponse, GameError, GestureRequest, GestureResponse,
    PlayRequest, SessionId,
};

pub mod config;
pub mod gesture_service;
pub mod session_manager;

pub const SESSION_COOKIE: &str = "session_id";
const DEFAULT_PERSONALITY: &str = "rusty";
const MAX_BODY_BYTES: u64 = 64 * 1024;

pub fn create_routes(
    session_manager: Arc<SessionManager>,
    gesture_service: Arc<GestureService>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // Clone for filters
    let session_manager_filter = warp::any().map({
        let session_manager = session_manager.clone();
        move || session_manager.clone()
    });

    let gesture_filter = warp::any().map({
        let gesture_service = gesture_service.clone();
        move || gesture_service.clone()
    });

    let session_cookie = warp::cookie::optional::<String>(SESSION_COOKIE);

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", StatusCode::OK));

    let configure = warp::path!("api" / "configure")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(session_cookie.clone())
        .and(session_manager_filter.clone())
        .and_then(handle_configure);

    let play = warp::path!("api" / "play")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(session_cookie.clone())
        .and(session_manager_filter.clone())
        .and_then(handle_play);

    let reset = warp::path!("api" / "reset")
        .and(warp::post())
        .and(session_cookie.clone())
        .and(session_manager_filter.clone())
        .and_then(handle_reset);

    let stats = warp::path!("api" / "stats")
        .and(warp::get())
        .and(session_cookie)
        .and(session_manager_filter)
        .and_then(handle_stats);

    // Classification is stateless and needs no session
    let gesture = warp::path!("api" / "gesture")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(gesture_filter)
        .and_then(handle_gesture);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST"]);

    health
        .or(configure)
        .or(play)
        .or(reset)
        .or(stats)
        .or(gesture)
        .with(cors)
        .with(warp::log("snake_water_gun"))
}

fn parse_session_cookie(cookie: Option<String>) -> Option<SessionId> {
    cookie.and_then(|value| Uuid::parse_str(value.trim()).ok())
}

fn with_session_cookie(reply: impl warp::Reply, session_id: SessionId) -> impl warp::Reply {
    warp::reply::with_header(
        reply,
        "set-cookie",
        format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax"),
    )
}

fn error_reply(error: GameError) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(
        warp::reply::json(&ErrorResponse::from(error)),
        StatusCode::BAD_REQUEST,
    )
}

async fn handle_configure(
    request: ConfigureRequest,
    cookie: Option<String>,
    session_manager: Arc<SessionManager>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let session_id = session_manager.ensure_session(parse_session_cookie(cookie));

    let difficulty = match request.difficulty.as_deref() {
        Some(name) => {
            let difficulty = Difficulty::from_name_or_default(name);
            if difficulty.as_str() != name.trim().to_lowercase() {
                tracing::warn!("Unknown difficulty '{}', using {}", name, difficulty);
            }
            difficulty
        }
        None => Difficulty::default(),
    };
    let personality = request
        .personality
        .as_deref()
        .unwrap_or(DEFAULT_PERSONALITY);

    let reply = match session_manager
        .configure(&session_id, difficulty, personality)
        .await
    {
        Ok(summary) => warp::reply::with_status(warp::reply::json(&summary), StatusCode::OK),
        Err(e) => {
            tracing::info!("Rejected configuration for session {}: {}", session_id, e);
            error_reply(e)
        }
    };

    Ok(with_session_cookie(reply, session_id))
}

async fn handle_play(
    request: PlayRequest,
    cookie: Option<String>,
    session_manager: Arc<SessionManager>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let session_id = session_manager.ensure_session(parse_session_cookie(cookie));

    let reply = match request.user_move {
        None => warp::reply::with_status(
            warp::reply::json(&ErrorResponse::message("No move provided")),
            StatusCode::BAD_REQUEST,
        ),
        Some(raw_move) => match session_manager.play(&session_id, &raw_move).await {
            Ok(result) => warp::reply::with_status(warp::reply::json(&result), StatusCode::OK),
            Err(e) => error_reply(e),
        },
    };

    Ok(with_session_cookie(reply, session_id))
}

async fn handle_reset(
    cookie: Option<String>,
    session_manager: Arc<SessionManager>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let session_id = session_manager.ensure_session(parse_session_cookie(cookie));
    session_manager.reset(&session_id).await;
    let stats = session_manager.stats(&session_id).await;
    Ok(with_session_cookie(warp::reply::json(&stats), session_id))
}

async fn handle_stats(
    cookie: Option<String>,
    session_manager: Arc<SessionManager>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let session_id = session_manager.ensure_session(parse_session_cookie(cookie));
    let stats = session_manager.stats(&session_id).await;
    Ok(with_session_cookie(warp::reply::json(&stats), session_id))
}

async fn handle_gesture(
    request: GestureRequest,
    gesture_service: Arc<GestureService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let response = match gesture_service.classify_frame(request.landmarks) {
        Ok(result) => GestureResponse {
            gesture: result.label().map(str::to_string),
            available: true,
        },
        Err(e) => {
            tracing::debug!("Gesture frame ignored: {}", e);
            GestureResponse {
                gesture: None,
                available: false,
            }
        }
    };

    Ok(warp::reply::json(&response))
}
