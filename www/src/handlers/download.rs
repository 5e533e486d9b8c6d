//! Download page handlers
//!
//! Serves the "Get SVNKit Library" page. The response is always a full page;
//! feed problems only show up as an empty release table.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::page::{encode_page, HTML_CONTENT_TYPE};
use crate::AppState;

/// GET /download/library.php
///
/// Returns the download page encoded as ISO-8859-1.
pub async fn get_library_page(State(state): State<AppState>) -> Response {
    let html = state.download_page.render().await;

    (
        [(header::CONTENT_TYPE, HTML_CONTENT_TYPE)],
        encode_page(&html),
    )
        .into_response()
}
