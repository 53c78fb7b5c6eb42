use crate::shared::api_utils::api_base;
use contracts::domain::a001_valid_preparation::{
    ValidPreparation, ValidPreparationDto, ValidPreparationList,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

pub const API_PATH: &str = "/api/v1/valid_preparations";

fn list_url(base: &str, page: u64, limit: u64) -> String {
    format!("{}{}?page={}&limit={}", base, API_PATH, page, limit)
}

fn search_url(base: &str, query: &str) -> String {
    format!(
        "{}{}/search?q={}",
        base,
        API_PATH,
        urlencoding::encode(query.trim())
    )
}

fn item_url(base: &str, id: u64) -> String {
    format!("{}{}/{}", base, API_PATH, id)
}

/// Get one page of valid preparations
pub async fn list_valid_preparations(
    page: u64,
    limit: u64,
) -> Result<ValidPreparationList, String> {
    let url = list_url(&api_base(), page, limit);

    let response = Request::get(&url).send().await.map_err(request_failed)?;
    let data: ValidPreparationList = parse(response).await?;
    log::debug!(
        "loaded {} valid preparations (page {})",
        data.data.len(),
        data.pagination.page
    );
    Ok(data)
}

/// Search valid preparations by name or description
pub async fn search_valid_preparations(query: &str) -> Result<Vec<ValidPreparation>, String> {
    let url = search_url(&api_base(), query);

    let response = Request::get(&url).send().await.map_err(request_failed)?;
    let data: Vec<ValidPreparation> = parse(response).await?;
    log::debug!("search {:?} matched {} valid preparations", query, data.len());
    Ok(data)
}

/// Get a valid preparation by ID
pub async fn fetch_valid_preparation(id: u64) -> Result<ValidPreparation, String> {
    let url = item_url(&api_base(), id);

    let response = Request::get(&url).send().await.map_err(request_failed)?;
    if response.status() == 404 {
        log::error!("valid preparation {} not found", id);
        return Err("Not found".to_string());
    }
    parse(response).await
}

/// Create a valid preparation from a form
pub async fn create_valid_preparation(
    dto: &ValidPreparationDto,
) -> Result<ValidPreparation, String> {
    dto.validate().map_err(|e| e.to_string())?;

    let url = format!("{}{}", api_base(), API_PATH);
    let response = Request::post(&url)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(request_failed)?;
    parse(response).await
}

/// Update an existing valid preparation
pub async fn update_valid_preparation(
    id: u64,
    dto: &ValidPreparationDto,
) -> Result<ValidPreparation, String> {
    dto.validate().map_err(|e| e.to_string())?;

    let url = item_url(&api_base(), id);
    let response = Request::put(&url)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(request_failed)?;
    parse(response).await
}

/// Archive (soft-delete) a valid preparation
pub async fn archive_valid_preparation(id: u64) -> Result<(), String> {
    let url = item_url(&api_base(), id);

    let response = Request::delete(&url).send().await.map_err(request_failed)?;
    if !response.ok() {
        log::error!(
            "archiving valid preparation {} failed: HTTP {}",
            id,
            response.status()
        );
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

fn request_failed(e: gloo_net::Error) -> String {
    log::error!("valid preparations request failed: {}", e);
    format!("Request failed: {}", e)
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        log::error!("{} returned HTTP {}", response.url(), response.status());
        return Err(format!("HTTP error: {}", response.status()));
    }

    response.json().await.map_err(|e| {
        log::error!("failed to parse {}: {}", response.url(), e);
        format!("Failed to parse response: {}", e)
    })
}
