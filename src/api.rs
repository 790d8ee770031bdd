// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::balances::BalancesReport;
use crate::book::Book;
use crate::config::Config;
use crate::error::{BookclipError, Result};
use crate::models::{BookPayload, SavedQueries, SavedQuery};
use crate::utils::http_client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const MAX_RETRIES: u32 = 5;
const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

/// Supplies the OAuth2 bearer token sent with every request.
pub trait TokenProvider {
    fn oauth_token(&self) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn oauth_token(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: Option<String>,
    tokens: Box<dyn TokenProvider>,
    max_retries: u32,
    initial_backoff: Duration,
}

impl ApiClient {
    pub fn new(config: &Config, tokens: Box<dyn TokenProvider>) -> Result<Self> {
        Ok(Self {
            http: http_client()?,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            tokens,
            max_retries: MAX_RETRIES,
            initial_backoff: INITIAL_BACKOFF,
        })
    }

    /// Uses the token stored in the config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let token = config.oauth_token.clone().ok_or_else(|| {
            BookclipError::Config(format!(
                "No OAuth token configured (run `bookclip config set --token` or set {})",
                crate::config::ENV_OAUTH_TOKEN
            ))
        })?;
        Self::new(config, Box::new(StaticToken::new(token)))
    }

    pub fn with_http_client(mut self, http: reqwest::blocking::Client) -> Self {
        self.http = http;
        self
    }

    pub fn with_backoff(mut self, initial: Duration, max_retries: u32) -> Self {
        self.initial_backoff = initial;
        self.max_retries = max_retries;
        self
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// GET with auth; 5xx answers are retried with doubling sleeps.
    fn get(&self, path: &str, params: &[(&str, String)]) -> Result<String> {
        let token = self.tokens.oauth_token()?;
        let mut query: Vec<(&str, String)> = params.to_vec();
        if let Some(key) = &self.api_key {
            query.push(("key", key.clone()));
        }
        let url = self.url(path);

        let mut retries = 0;
        let mut sleep = self.initial_backoff;
        loop {
            debug!(%url, attempt = retries + 1, "GET");
            let resp = self
                .http
                .get(&url)
                .query(&query)
                .bearer_auth(&token)
                .header(CONTENT_TYPE, "application/json; charset=UTF-8")
                .send()?;
            let status = resp.status();
            let body = resp.text()?;
            if status.is_success() {
                return Ok(body);
            }
            let message = error_message(&body);
            if status.is_server_error() && retries < self.max_retries {
                warn!(
                    status = status.as_u16(),
                    %message,
                    "Retrying in {} secs...",
                    sleep.as_secs_f64()
                );
                std::thread::sleep(sleep);
                sleep *= 2;
                retries += 1;
                continue;
            }
            return Err(BookclipError::Api {
                status: status.as_u16(),
                message,
            });
        }
    }

    pub fn get_book(&self, book_id: &str) -> Result<Book> {
        let body = self.get(&format!("ledgers/{}", book_id), &[])?;
        let payload: BookPayload = serde_json::from_str(&body)?;
        Ok(Book::from_payload(payload))
    }

    /// Runs a balances query against the book and wraps the answer.
    pub fn get_balances_report(&self, book: Book, query: &str) -> Result<BalancesReport> {
        let params = [
            ("query", query.to_string()),
            ("time", chrono::Utc::now().timestamp_millis().to_string()),
        ];
        let body = self.get(&format!("ledgers/{}/balances", book.id()), &params)?;
        BalancesReport::from_json(book, &body)
    }

    pub fn get_saved_queries(&self, book_id: &str) -> Result<Vec<SavedQuery>> {
        let body = self.get(&format!("ledgers/{}/savedqueries", book_id), &[])?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let list: SavedQueries = serde_json::from_str(&body)?;
        Ok(list.items)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// `error.message` of a JSON error body, else the body itself.
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(e) => e.error.message,
        Err(_) => body.trim().to_string(),
    }
}
