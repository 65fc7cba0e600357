use axum::{
    Form, Router,
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, post},
};
use minijinja::context;
use tracing::error;

use crate::crud;
use crate::crud::address::{AddressChanges, NewAddress};
use crate::error::AppError;
use crate::router::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_addresses))
        .route("/create", post(create_address))
        .route("/update/{id}", post(update_address))
        .route("/delete/{id}", post(delete_address))
}

async fn list_addresses(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let addresses = crud::address::list_addresses(&state.db).await?;
    let members = crud::member::list_members_with_profile(&state.db).await?;

    let tmpl = state.templates.get_template("addresses.html")?;
    let html = tmpl.render(context! {
        addresses => addresses,
        members => members,
        active => "addresses",
    })?;
    Ok(Html(html))
}

async fn create_address(State(state): State<AppState>, Form(input): Form<NewAddress>) -> Redirect {
    if let Err(e) = crud::address::create_address(&state.db, input).await {
        error!("failed to create address: {e}");
    }
    Redirect::to("/addresses")
}

async fn update_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(changes): Form<AddressChanges>,
) -> Redirect {
    if let Err(e) = crud::address::update_address(&state.db, id, changes).await {
        error!("failed to update address for member {id}: {e}");
    }
    Redirect::to("/addresses")
}

async fn delete_address(State(state): State<AppState>, Path(id): Path<i32>) -> Redirect {
    if let Err(e) = crud::address::delete_address(&state.db, id).await {
        error!("failed to delete address for member {id}: {e}");
    }
    Redirect::to("/addresses")
}
