//! Custom extractors.

use std::convert::Infallible;

use axum::extract::{Form, FromRequest, Query, Request};

use crate::api::dto::StatParams;

/// Extracts [`StatParams`] the way HTML form values are resolved.
///
/// Pairs from an urlencoded request body come first, then pairs from the
/// query string, whatever the method. The first `id` wins. A missing or
/// undecodable body or query contributes nothing, so extraction never
/// rejects and a request without any `id` carries the empty id.
#[derive(Debug, Clone)]
pub struct StatForm(pub StatParams);

impl<S> FromRequest<S> for StatForm
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = Query::<Vec<(String, String)>>::try_from_uri(req.uri())
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        // For GET and HEAD, `Form` reads the query string again; the query
        // pairs are then just repeated after themselves.
        let body = Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map(|Form(pairs)| pairs)
            .unwrap_or_default();

        Ok(Self(StatParams::from_pairs(body.iter().chain(query.iter()))))
    }
}
