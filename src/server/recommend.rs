//! Recommendation and mood API route handlers.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::catalog::ContentType;
use crate::error::AppError;
use crate::mood::{detect_with_source, DetectionSource, MoodLabel, MOOD_KEYWORDS};
use crate::session::Session;
use crate::types::{
    CatalogStatsResponse, DetectRequest, DetectResponse, ListMoodsResponse, MoodInfo,
    RecommendRequest, RecommendResponse, RecommendedItem,
};

use super::AppState;

/// GET /api/v1/moods
///
/// List the canonical moods in keyword-priority order.
pub async fn list_moods(State(_state): State<AppState>) -> Json<ListMoodsResponse> {
    let moods: Vec<MoodInfo> = MOOD_KEYWORDS
        .iter()
        .map(|entry| MoodInfo {
            id: entry.mood.to_string(),
            keywords: entry.keywords.iter().map(|k| k.to_string()).collect(),
        })
        .collect();

    let count = moods.len();
    Json(ListMoodsResponse { moods, count })
}

/// GET /api/v1/catalog/stats
pub async fn catalog_stats(State(state): State<AppState>) -> Json<CatalogStatsResponse> {
    let mut tables = HashMap::new();
    for content_type in ContentType::ALL {
        tables.insert(
            content_type.to_string(),
            state.catalog.table(content_type).len(),
        );
    }

    Json(CatalogStatsResponse {
        total: state.catalog.total_items(),
        tables,
    })
}

/// POST /api/v1/mood/detect
///
/// Resolve free text to a canonical mood. Never fails; empty or neutral
/// text resolves to calm.
pub async fn detect_mood(
    State(_state): State<AppState>,
    Json(req): Json<DetectRequest>,
) -> Json<DetectResponse> {
    let (mood, source) = detect_with_source(&req.text);
    Json(DetectResponse { mood, source })
}

/// POST /api/v1/recommend
///
/// Produce recommendations for a mood (given or detected from text) and a
/// content type. The session's cached set is served when the
/// (mood, content_type) key is unchanged.
pub async fn recommend(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let (mood, mood_source) = resolve_mood(req.mood, req.text.as_deref())?;

    let top_n = req.top_n.unwrap_or(state.config.recommend.default_top_n);
    if top_n == 0 {
        return Err(AppError::BadRequest("top_n must be positive".to_string()));
    }

    let mut sessions = state.sessions.write().await;
    let (session_id, session) = sessions.get_or_create(req.session_id);
    let set = session.recommend(
        &state.catalog,
        &state.recommender,
        mood,
        req.content_type,
        top_n,
    );

    Ok(Json(RecommendResponse {
        session_id,
        mood,
        mood_source,
        mode: set.mode,
        items: set.entries.iter().map(RecommendedItem::from).collect(),
    }))
}

/// POST /api/v1/sessions/:id/shuffle
///
/// Re-order the session's cached result set in place; no re-query.
pub async fn shuffle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecommendResponse>, AppError> {
    let mut sessions = state.sessions.write().await;
    let session: &mut Session = sessions
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

    let key = session.cached_key().ok_or_else(|| {
        AppError::BadRequest("Session has no recommendations to shuffle".to_string())
    })?;
    let set = session.shuffle().ok_or_else(|| {
        AppError::Internal("Session lost its cached recommendations".to_string())
    })?;

    Ok(Json(RecommendResponse {
        session_id: id,
        mood: key.mood,
        mood_source: None,
        mode: set.mode,
        items: set.entries.iter().map(RecommendedItem::from).collect(),
    }))
}

/// DELETE /api/v1/sessions/:id
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut sessions = state.sessions.write().await;
    if sessions.remove(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {id} not found")))
    }
}

/// Exactly one of `mood` and `text` is the authoritative mood source.
fn resolve_mood(
    mood: Option<MoodLabel>,
    text: Option<&str>,
) -> Result<(MoodLabel, Option<DetectionSource>), AppError> {
    match (mood, text) {
        (Some(_), Some(_)) => Err(AppError::BadRequest(
            "Provide either mood or text, not both".to_string(),
        )),
        (Some(mood), None) => Ok((mood, None)),
        (None, Some(text)) => {
            let (mood, source) = detect_with_source(text);
            Ok((mood, Some(source)))
        }
        (None, None) => Err(AppError::BadRequest(
            "Either mood or text must be provided".to_string(),
        )),
    }
}
