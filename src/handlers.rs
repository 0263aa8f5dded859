use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};

use crate::config::DEFAULT_TITLE;
use crate::errors::WikiError;
use crate::router::{edit_path, found, view_path, PageTitle, SaveBody};
use crate::types::{AppState, Page};
use crate::utils::escape_html;

/// Handle root path requests
pub async fn handle_root() -> Response {
    log::debug!("Root request, redirecting to {}", DEFAULT_TITLE);
    found(&view_path(DEFAULT_TITLE))
}

/// Show a page with known titles linked, or send the user to create it
pub async fn handle_view(
    State(state): State<AppState>,
    PageTitle(title): PageTitle,
) -> Result<Response, WikiError> {
    log::info!("View request received: '{}'", title);

    let page = match state.store.load(&title).await {
        Ok(page) => page,
        Err(e) => {
            log::info!("{}, redirecting to edit", e);
            return Ok(found(&edit_path(&title)));
        }
    };

    let body = state.linker.rewrite(&page.body);
    let html = state.templates.render("view", &page.title, &body).map_err(|e| {
        log::error!("Failed to render view for '{}': {}", title, e);
        e
    })?;
    Ok(Html(html).into_response())
}

/// Show the edit form, blank when the page does not exist yet
pub async fn handle_edit(
    State(state): State<AppState>,
    PageTitle(title): PageTitle,
) -> Result<Response, WikiError> {
    log::info!("Edit request received: '{}'", title);

    let page = match state.store.load(&title).await {
        Ok(page) => page,
        Err(e) => {
            log::debug!("{}, starting blank", e);
            Page::blank(&title)
        }
    };

    let body = escape_html(&page.body_text());
    let html = state.templates.render("edit", &page.title, &body).map_err(|e| {
        log::error!("Failed to render edit for '{}': {}", title, e);
        e
    })?;
    Ok(Html(html).into_response())
}

/// Persist the submitted body and go back to the page
pub async fn handle_save(
    State(state): State<AppState>,
    PageTitle(title): PageTitle,
    SaveBody(body): SaveBody,
) -> Result<Response, WikiError> {
    log::info!("Save request received: '{}' ({} bytes)", title, body.len());

    let page = Page::new(title, body);
    state.store.save(&page).await?;
    Ok(found(&view_path(&page.title)))
}
