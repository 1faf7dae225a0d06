//! Template retrieval.
//!
//! Responsibilities:
//! - Issue exactly one `template.get` call per query.
//! - Turn an empty result set into [`ClientError::NotFound`].
//!
//! Non-responsibilities:
//! - Retries, pagination and caching. Transport retries happen below the
//!   [`Session`] seam; everything else is the caller's business.

use tracing::debug;

use crate::client::ZabbixClient;
use crate::error::{ClientError, Result};
use crate::models::{Template, TemplateGetParams};
use crate::session::Session;

/// JSON-RPC method name for template queries.
pub const TEMPLATE_GET_METHOD: &str = "template.get";

/// Query templates matching `params`.
///
/// Returns the decoded templates in server order. Any error from the session
/// is returned unchanged.
///
/// # Errors
///
/// Returns [`ClientError::NotFound`] when the server returns no templates.
pub async fn get_templates<S: Session>(
    session: &mut S,
    params: &TemplateGetParams,
) -> Result<Vec<Template>> {
    let templates: Vec<Template> = session.get(TEMPLATE_GET_METHOD, params).await?;

    if templates.is_empty() {
        return Err(ClientError::NotFound);
    }

    debug!(count = templates.len(), "Retrieved templates");
    Ok(templates)
}

impl ZabbixClient {
    /// Query templates matching `params`. See [`get_templates`].
    pub async fn get_templates(&mut self, params: &TemplateGetParams) -> Result<Vec<Template>> {
        get_templates(self, params).await
    }
}
