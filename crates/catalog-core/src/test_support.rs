//! Test Fixtures
//!
//! Scripted transport and service payload builders shared by unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::api::{ApiClient, ApiError, ApiResult, HttpResponse, HttpTransport};

pub const BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Replays queued responses in order and records every requested URL
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<ApiResult<HttpResponse>>>,
    requests: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: Value) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            reason: "OK".to_string(),
            body: body.to_string(),
        }));
    }

    pub fn respond_status(&self, status: u16, reason: &str) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            reason: reason.to_string(),
            body: json!({ "error": reason }).to_string(),
        }));
    }

    pub fn fail(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::Transport(message.to_string())));
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, url: &str) -> ApiResult<HttpResponse> {
        self.requests.borrow_mut().push(url.to_string());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request: {}", url))
    }
}

pub fn client(transport: &Rc<ScriptedTransport>) -> ApiClient {
    ApiClient::with_transport(BASE_URL, transport.clone())
}

pub fn character_json(id: i64, name: &str, status: &str, species: &str, gender: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": status,
        "species": species,
        "type": "",
        "gender": gender,
        "origin": { "name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1" },
        "location": { "name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3" },
        "image": format!("https://rickandmortyapi.com/api/character/avatar/{}.jpeg", id),
        "episode": ["https://rickandmortyapi.com/api/episode/1"],
        "url": format!("https://rickandmortyapi.com/api/character/{}", id),
        "created": "2017-11-04T18:48:46.250Z"
    })
}

pub fn episode_json(id: i64, code: &str, character_ids: &[i64]) -> Value {
    let characters: Vec<String> = character_ids
        .iter()
        .map(|id| format!("https://rickandmortyapi.com/api/character/{}", id))
        .collect();
    json!({
        "id": id,
        "name": format!("Episode {}", id),
        "air_date": "December 2, 2013",
        "episode": code,
        "characters": characters,
        "url": format!("https://rickandmortyapi.com/api/episode/{}", id),
        "created": "2017-11-10T12:56:33.798Z"
    })
}

pub fn page_json(results: Vec<Value>, pages: u32, next: Option<&str>) -> Value {
    json!({
        "info": { "count": results.len(), "pages": pages, "next": next, "prev": null },
        "results": results
    })
}
