#![allow(dead_code)]

use std::sync::Mutex;

use devapps::{
    host::{Confirmation, Host, Level},
    types::ErrorContext,
};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Growl(String, String, Level),
    Capture(String, ErrorContext),
    Confirm(String),
    ReplaceState(String),
    Visit(String),
}

/// Host that records every call and answers confirmations with a fixed value.
pub struct RecordingHost {
    answer: bool,
    calls: Mutex<Vec<Call>>,
}

impl RecordingHost {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn growls(&self, level: Level) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Growl(title, message, l) if l == level => Some((title, message)),
                _ => None,
            })
            .collect()
    }

    pub fn captures(&self) -> Vec<(String, ErrorContext)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Capture(message, context) => Some((message, context)),
                _ => None,
            })
            .collect()
    }

    pub fn confirms(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Confirm(_)))
            .count()
    }

    pub fn replaced_states(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::ReplaceState(url) => Some(url),
                _ => None,
            })
            .collect()
    }

    pub fn visits(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Visit(url) => Some(url),
                _ => None,
            })
            .collect()
    }

    fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Host for RecordingHost {
    fn growl(&self, title: &str, message: &str, level: Level) {
        self.push(Call::Growl(title.to_string(), message.to_string(), level));
    }

    fn capture_message(&self, message: &str, context: &ErrorContext) {
        self.push(Call::Capture(message.to_string(), context.clone()));
    }

    fn confirm(&self, confirmation: &Confirmation) -> bool {
        self.push(Call::Confirm(confirmation.title.to_string()));
        self.answer
    }

    fn replace_state(&self, url: &str) {
        self.push(Call::ReplaceState(url.to_string()));
    }

    fn visit(&self, url: &str) {
        self.push(Call::Visit(url.to_string()));
    }
}

// Helper function to create one application as the API returns it
pub fn app_json(base: &str, client_id: &str, name: &str) -> Value {
    json!({
        "name": name,
        "description": format!("{} description", name),
        "home_url": "http://home.example.com",
        "callback_url": "https://home.example.com/callback",
        "client_id": client_id,
        "client_secret": format!("{}-secret", client_id),
        "owner": "user1",
        "links": {
            "html": format!("{}/settings/applications/{}/", base, client_id),
            "self": format!("{}/v2/applications/{}/", base, client_id),
        }
    })
}

pub fn detail_path(client_id: &str) -> String {
    format!("/v2/applications/{}/", client_id)
}

pub const LIST_PATH: &str = "/v2/applications/";
