// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Remote access to the activities API.

use crate::error::{ClientError, ErrorResponse};
use crate::models::{Activity, ActivityPatch};
use std::future::Future;
use uuid::Uuid;

/// The calls the cache store makes against the server. Any of them may fail.
pub trait ActivitiesApi {
    fn list(&self) -> impl Future<Output = Result<Vec<Activity>, ClientError>> + Send;

    fn details(&self, id: Uuid) -> impl Future<Output = Result<Activity, ClientError>> + Send;

    fn create(&self, activity: &Activity)
        -> impl Future<Output = Result<(), ClientError>> + Send;

    fn update(&self, activity: &Activity)
        -> impl Future<Output = Result<(), ClientError>> + Send;

    fn delete(&self, id: Uuid) -> impl Future<Output = Result<(), ClientError>> + Send;
}

/// HTTP client for the activities API.
#[derive(Clone)]
pub struct HttpActivitiesApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpActivitiesApi {
    /// `base_url` is the server root, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn activities_url(&self) -> String {
        format!("{}/api/activities", self.base_url)
    }

    fn activity_url(&self, id: Uuid) -> String {
        format!("{}/api/activities/{}", self.base_url, id)
    }

    /// Turn a non-success status into the matching client error.
    async fn check_response(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.json::<ErrorResponse>().await.ok();
        // reqwest and axum share the `http` crate, so the status converts directly.
        Err(ClientError::from_response(status, body))
    }
}

impl ActivitiesApi for HttpActivitiesApi {
    async fn list(&self) -> Result<Vec<Activity>, ClientError> {
        let response = self.http.get(self.activities_url()).send().await?;
        let activities = self.check_response(response).await?.json().await?;
        Ok(activities)
    }

    async fn details(&self, id: Uuid) -> Result<Activity, ClientError> {
        let response = self.http.get(self.activity_url(id)).send().await?;
        let activity = self.check_response(response).await?.json().await?;
        Ok(activity)
    }

    async fn create(&self, activity: &Activity) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.activities_url())
            .json(activity)
            .send()
            .await?;
        self.check_response(response).await?;
        Ok(())
    }

    async fn update(&self, activity: &Activity) -> Result<(), ClientError> {
        let patch = ActivityPatch::from(activity.clone());
        let response = self
            .http
            .put(self.activity_url(activity.id))
            .json(&patch)
            .send()
            .await?;
        self.check_response(response).await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        let response = self.http.delete(self.activity_url(id)).send().await?;
        self.check_response(response).await?;
        Ok(())
    }
}
