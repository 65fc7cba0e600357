use axum::{
    Form, Router,
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, post},
};
use minijinja::context;
use tracing::error;

use crate::crud;
use crate::crud::user::{NewUser, UserChanges};
use crate::error::AppError;
use crate::router::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/create", post(create_user))
        .route("/update/{id}", post(update_user))
        .route("/delete/{id}", post(delete_user))
}

async fn list_users(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let users = crud::user::list_users(&state.db).await?;

    let tmpl = state.templates.get_template("users.html")?;
    let html = tmpl.render(context! { users => users, active => "users" })?;
    Ok(Html(html))
}

async fn create_user(State(state): State<AppState>, Form(input): Form<NewUser>) -> Redirect {
    if let Err(e) = crud::user::create_user(&state.db, input).await {
        error!("failed to create user: {e}");
    }
    Redirect::to("/users")
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(changes): Form<UserChanges>,
) -> Redirect {
    if let Err(e) = crud::user::update_user(&state.db, id, changes).await {
        error!("failed to update user {id}: {e}");
    }
    Redirect::to("/users")
}

async fn delete_user(State(state): State<AppState>, Path(id): Path<i32>) -> Redirect {
    if let Err(e) = crud::user::delete_user(&state.db, id).await {
        error!("failed to delete user {id}: {e}");
    }
    Redirect::to("/users")
}
