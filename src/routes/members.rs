use axum::{
    Form, Router,
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, post},
};
use minijinja::context;
use tracing::error;

use crate::crud;
use crate::crud::member::{MemberChanges, NewMember};
use crate::error::AppError;
use crate::router::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_members))
        .route("/create", post(create_member))
        .route("/update/{id}", post(update_member))
        .route("/delete/{id}", post(delete_member))
}

async fn list_members(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let members = crud::member::list_members_with_profile(&state.db).await?;
    let users = crud::user::list_users(&state.db).await?;

    let tmpl = state.templates.get_template("members.html")?;
    let html = tmpl.render(context! {
        members => members,
        users => users,
        active => "members",
    })?;
    Ok(Html(html))
}

async fn create_member(State(state): State<AppState>, Form(input): Form<NewMember>) -> Redirect {
    if let Err(e) = crud::member::create_member(&state.db, input).await {
        error!("failed to create member: {e}");
    }
    Redirect::to("/members")
}

async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(changes): Form<MemberChanges>,
) -> Redirect {
    if let Err(e) = crud::member::update_member(&state.db, id, changes).await {
        error!("failed to update member {id}: {e}");
    }
    Redirect::to("/members")
}

async fn delete_member(State(state): State<AppState>, Path(id): Path<i32>) -> Redirect {
    if let Err(e) = crud::member::delete_member(&state.db, id).await {
        error!("failed to delete member {id}: {e}");
    }
    Redirect::to("/members")
}
