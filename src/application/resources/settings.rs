use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::http::HttpClient;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

const SETTINGS: Endpoint = Endpoint::get("/odata/Settings");
const UPDATE_SETTINGS: Endpoint = Endpoint::put("/odata/Settings");
const FEATURE_FLAGS: Endpoint = Endpoint::get("/odata/Settings/FeatureFlags");
const UPDATE_FEATURE_FLAGS: Endpoint = Endpoint::put("/odata/Settings/FeatureFlags");
const LICENSE: Endpoint = Endpoint::get("/odata/Settings/License");
const AUTHENTICATION: Endpoint = Endpoint::get("/odata/Settings/Authentication");
const UPDATE_AUTHENTICATION: Endpoint = Endpoint::put("/odata/Settings/Authentication");

/// Client for `/odata/Settings`
pub struct SettingsClient {
    http_client: Arc<HttpClient>,
}

impl SettingsClient {
    /// Creates a new settings client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Gets the tenant settings
    pub async fn get_settings(&self) -> Result<Value, AppError> {
        self.http_client.send(SETTINGS.request()).await
    }

    /// Updates the tenant settings
    pub async fn update_settings<B: Serialize + ?Sized>(
        &self,
        settings: &B,
    ) -> Result<Value, AppError> {
        self.http_client
            .send(UPDATE_SETTINGS.request().with_json(settings)?)
            .await
    }

    pub async fn get_feature_flags(&self) -> Result<Value, AppError> {
        self.http_client.send(FEATURE_FLAGS.request()).await
    }

    pub async fn update_feature_flags<B: Serialize + ?Sized>(
        &self,
        flags: &B,
    ) -> Result<Value, AppError> {
        self.http_client
            .send(UPDATE_FEATURE_FLAGS.request().with_json(flags)?)
            .await
    }

    pub async fn get_license_settings(&self) -> Result<Value, AppError> {
        self.http_client.send(LICENSE.request()).await
    }

    pub async fn get_authentication_settings(&self) -> Result<Value, AppError> {
        self.http_client.send(AUTHENTICATION.request()).await
    }

    pub async fn update_authentication_settings<B: Serialize + ?Sized>(
        &self,
        settings: &B,
    ) -> Result<Value, AppError> {
        self.http_client
            .send(UPDATE_AUTHENTICATION.request().with_json(settings)?)
            .await
    }
}
