//! Path extractors.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use gigbook_core::types::DbId;

use crate::error::AppError;

/// The `{id}` segment of an entity route.
///
/// An id that does not parse as an integer is treated like an unknown page,
/// so `/venues/abc` renders the 404 page rather than a plain-text rejection.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub DbId);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "Unparseable entity id");
                AppError::PageNotFound
            })?;
        Ok(Self(id))
    }
}
