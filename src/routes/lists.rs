use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use serde::{Deserialize, Serialize};

use crate::auth::middleware::{AuthUser, OptionalAuth};
use crate::entities::{game, game_list, game_list_game};
use crate::error::AppError;
use crate::state::AppState;

const LIST_NOT_FOUND: &str = "List not found";
const DUPLICATE_NAME: &str = "A list with this name already exists";

/// Game list router, nested under `/list`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_public).post(create_list))
        .route("/me", get(list_mine))
        .route("/{id}", get(get_list).put(update_list).delete(delete_list))
}

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct CreateListRequest {
    name: String,
    description: Option<String>,
    is_private: bool,
}

#[derive(Debug, Deserialize)]
struct UpdateListRequest {
    name: Option<String>,
    description: Option<String>,
    is_private: Option<bool>,
    games: Option<Vec<GameEntry>>,
}

/// A game submitted inside a list update. Carries the full attribute set so
/// an id unknown to the catalog can be inserted from it.
#[derive(Debug, Deserialize)]
struct GameEntry {
    id: i32,
    title: String,
    thumbnail: Option<String>,
    short_description: Option<String>,
    game_url: Option<String>,
    genre: Option<String>,
    platform: Option<String>,
    publisher: Option<String>,
    developer: Option<String>,
    release_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct ListResponse {
    id: i32,
    name: String,
    description: Option<String>,
    user: String,
    is_private: bool,
    games: Vec<GameResponse>,
}

#[derive(Debug, Serialize)]
struct GameResponse {
    id: i32,
    title: String,
    thumbnail: Option<String>,
    short_description: Option<String>,
    game_url: Option<String>,
    genre: Option<String>,
    platform: Option<String>,
    publisher: Option<String>,
    developer: Option<String>,
    release_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct ListsResponse {
    data: Vec<ListResponse>,
}

#[derive(Debug, Serialize)]
struct DeleteListResponse {
    data: bool,
}

// ============================================================================
// Handlers
// ============================================================================

/// `POST /list/` — Create a new game list owned by the caller.
async fn create_list(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<CreateListRequest>,
) -> Result<impl IntoResponse, AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }

    tracing::debug!(name = %req.name, "Creating list");

    let now = chrono::Utc::now();
    let list = game_list::ActiveModel {
        name: ActiveValue::Set(req.name),
        description: ActiveValue::Set(req.description),
        user: ActiveValue::Set(user),
        is_private: ActiveValue::Set(req.is_private),
        created_at: ActiveValue::Set(now.into()),
        updated_at: ActiveValue::Set(now.into()),
        ..Default::default()
    };

    let list = list
        .insert(&state.db)
        .await
        .map_err(|e| AppError::from_save_error(e, DUPLICATE_NAME))?;

    Ok(Json(to_list_response(list, Vec::new())))
}

/// `GET /list/` — All public lists. No authentication required.
async fn list_public(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let lists = game_list::Entity::find()
        .filter(game_list::Column::IsPrivate.eq(false))
        .order_by_asc(game_list::Column::Id)
        .all(&state.db)
        .await?;

    let mut data = Vec::with_capacity(lists.len());
    for list in lists {
        let games = load_games(&state.db, &list).await?;
        data.push(to_list_response(list, games));
    }

    Ok(Json(ListsResponse { data }))
}

/// `GET /list/me` — All lists owned by the caller, regardless of privacy.
async fn list_mine(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let lists = game_list::Entity::find()
        .filter(game_list::Column::User.eq(user))
        .order_by_asc(game_list::Column::Id)
        .all(&state.db)
        .await?;

    let mut data = Vec::with_capacity(lists.len());
    for list in lists {
        let games = load_games(&state.db, &list).await?;
        data.push(to_list_response(list, games));
    }

    Ok(Json(ListsResponse { data }))
}

/// `GET /list/{id}` — Fetch a list if it is public or owned by the caller.
///
/// A private list owned by someone else is indistinguishable from a
/// nonexistent id: both answer 404.
async fn get_list(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let visibility = match user {
        Some(user) => Condition::any()
            .add(game_list::Column::IsPrivate.eq(false))
            .add(game_list::Column::User.eq(user)),
        None => Condition::any().add(game_list::Column::IsPrivate.eq(false)),
    };

    let list = game_list::Entity::find()
        .filter(game_list::Column::Id.eq(id))
        .filter(visibility)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(LIST_NOT_FOUND.to_string()))?;

    let games = load_games(&state.db, &list).await?;
    Ok(Json(to_list_response(list, games)))
}

/// `DELETE /list/{id}` — Delete a list owned by the caller.
///
/// Ownership is part of the delete statement itself, so there is no window
/// between checking ownership and acting on it.
async fn delete_list(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let result = game_list::Entity::delete_many()
        .filter(game_list::Column::Id.eq(id))
        .filter(game_list::Column::User.eq(user))
        .exec(&state.db)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound(LIST_NOT_FOUND.to_string()));
    }

    tracing::debug!(id, "Deleted list");
    Ok(Json(DeleteListResponse { data: true }))
}

/// `PUT /list/{id}` — Update a list owned by the caller.
///
/// Each field is optional; an absent field keeps its stored value. When games
/// are supplied, entries are resolved against the catalog by id — an existing
/// row wins over the submitted attributes, a missing one is created from them
/// — and the list's collection is replaced with the result, in request order.
async fn update_list(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
    Json(req): Json<UpdateListRequest>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;

    let list = game_list::Entity::find()
        .filter(game_list::Column::Id.eq(id))
        .filter(game_list::Column::User.eq(user))
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::NotFound(LIST_NOT_FOUND.to_string()))?;

    let mut replaced_games = None;
    if let Some(entries) = req.games {
        let mut games = Vec::with_capacity(entries.len());
        for entry in entries {
            games.push(find_or_create_game(&txn, entry).await?);
        }

        // Replace: delete existing associations, then insert in request order
        game_list_game::Entity::delete_many()
            .filter(game_list_game::Column::GameListId.eq(list.id))
            .exec(&txn)
            .await?;

        for game in &games {
            game_list_game::ActiveModel {
                game_list_id: ActiveValue::Set(list.id),
                game_id: ActiveValue::Set(game.id),
            }
            .insert(&txn)
            .await?;
        }

        replaced_games = Some(games);
    }

    let mut active: game_list::ActiveModel = list.into();
    if let Some(name) = req.name {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest("Name cannot be empty".to_string()));
        }
        active.name = ActiveValue::Set(name);
    }
    if let Some(description) = req.description {
        active.description = ActiveValue::Set(Some(description));
    }
    if let Some(is_private) = req.is_private {
        active.is_private = ActiveValue::Set(is_private);
    }
    active.updated_at = ActiveValue::Set(chrono::Utc::now().into());

    let list = active
        .update(&txn)
        .await
        .map_err(|e| AppError::from_save_error(e, DUPLICATE_NAME))?;

    let games = match replaced_games {
        Some(games) => games,
        None => load_games(&txn, &list).await?,
    };

    txn.commit().await?;

    tracing::debug!(id, "Updated list");
    Ok(Json(to_list_response(list, games)))
}

// ============================================================================
// Helpers
// ============================================================================

/// Resolve a submitted game against the catalog: an existing row is reused
/// unchanged, an unknown id is inserted from the submitted attributes.
async fn find_or_create_game<C>(db: &C, entry: GameEntry) -> Result<game::Model, AppError>
where
    C: ConnectionTrait,
{
    if let Some(existing) = game::Entity::find_by_id(entry.id).one(db).await? {
        return Ok(existing);
    }

    let created = game::ActiveModel {
        id: ActiveValue::Set(entry.id),
        title: ActiveValue::Set(entry.title),
        thumbnail: ActiveValue::Set(entry.thumbnail),
        short_description: ActiveValue::Set(entry.short_description),
        game_url: ActiveValue::Set(entry.game_url),
        genre: ActiveValue::Set(entry.genre),
        platform: ActiveValue::Set(entry.platform),
        publisher: ActiveValue::Set(entry.publisher),
        developer: ActiveValue::Set(entry.developer),
        release_date: ActiveValue::Set(entry.release_date),
    }
    .insert(db)
    .await?;

    Ok(created)
}

/// Load a list's games through the junction table, id-ascending.
async fn load_games<C>(db: &C, list: &game_list::Model) -> Result<Vec<game::Model>, AppError>
where
    C: ConnectionTrait,
{
    let games = list
        .find_related(game::Entity)
        .order_by_asc(game::Column::Id)
        .all(db)
        .await?;
    Ok(games)
}

fn to_list_response(list: game_list::Model, games: Vec<game::Model>) -> ListResponse {
    ListResponse {
        id: list.id,
        name: list.name,
        description: list.description,
        user: list.user,
        is_private: list.is_private,
        games: games.into_iter().map(to_game_response).collect(),
    }
}

fn to_game_response(game: game::Model) -> GameResponse {
    GameResponse {
        id: game.id,
        title: game.title,
        thumbnail: game.thumbnail,
        short_description: game.short_description,
        game_url: game.game_url,
        genre: game.genre,
        platform: game.platform,
        publisher: game.publisher,
        developer: game.developer,
        release_date: game.release_date,
    }
}
