//! # Media Endpoints

use shared::Media;

use super::client::ApiClient;
use super::request::{path_id, ApiRequest};
use crate::core::error::Result;

#[tracing::instrument(skip(client))]
pub async fn get_media_by_id(client: &ApiClient, id: &str) -> Result<Media> {
    let id = path_id(id)?;
    client.send(ApiRequest::get(format!("/media/{id}"))).await
}

/// Delete a media item. The response body is ignored.
#[tracing::instrument(skip(client))]
pub async fn delete_media(client: &ApiClient, id: &str) -> Result<()> {
    let id = path_id(id)?;
    tracing::info!("Deleting media");
    client.send_empty(ApiRequest::delete(format!("/media/{id}"))).await
}
