use axum::response::Html;
use minijinja::context;

use crate::core::error::AppError;
use crate::shared::constants::{
    ALLOWED_IMAGE_EXTENSIONS, APP_TITLE, DEFAULT_LOCATION, MAX_UPLOAD_SIZE_MB,
    SUGGESTED_ISSUE_TYPES,
};
use crate::shared::templates::render_template;

/// Serve the single-page reporting UI
pub async fn index() -> Result<Html<String>, AppError> {
    let accept = ALLOWED_IMAGE_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",");

    let html = render_template(
        "index.html",
        context! {
            title => APP_TITLE,
            issue_types => SUGGESTED_ISSUE_TYPES,
            default_location => DEFAULT_LOCATION,
            max_upload_mb => MAX_UPLOAD_SIZE_MB,
            accept => accept,
        },
    )
    .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_renders_form_and_limits() {
        let Html(html) = index().await.unwrap();

        assert!(html.contains("<title>Civic Issue Reporter</title>"));
        assert!(html.contains(r#"accept=".png,.jpg,.jpeg""#));
        assert!(html.contains("<option>Broken Streetlight</option>"));
        assert!(html.contains("const MAX_UPLOAD_BYTES = 5 * 1024 * 1024;"));
    }
}
