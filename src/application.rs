//! The in-memory record of one registered OAuth2 application.
//!
//! An [`ApplicationData`] is built either from an item of an API response or
//! empty, for the create page. User-editable fields go through setters so the
//! URL fields can be normalized on every write; `owner` and `client_id` are
//! read-only once the record exists.

use std::fmt;

use serde_json::Value;

use crate::{
    types::SerializedApplication,
    utils::{ensure_http, is_url},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    HomeUrl,
    CallbackUrl,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::Name => "name",
            Field::HomeUrl => "home_url",
            Field::CallbackUrl => "callback_url",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Url,
}

/// A validation rule that currently fails for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub rule: Rule,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rule {
            Rule::Required => write!(f, "{} is required", self.field),
            Rule::Url => write!(f, "{} must be a valid URL", self.field),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationData {
    name: Option<String>,
    description: Option<String>,
    home_url: Option<String>,
    callback_url: Option<String>,
    owner: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    web_detail_url: Option<String>,
    api_detail_url: Option<String>,
}

fn string_field(data: &Value, key: &str) -> Option<String> {
    data.get(key).and_then(Value::as_str).map(str::to_string)
}

impl ApplicationData {
    /// Reads one item of an API response; `None` gives an empty record.
    ///
    /// Values of the wrong JSON type are treated as missing.
    pub fn new(data: Option<&Value>) -> Self {
        let Some(data) = data else {
            return Self::default();
        };

        let links = data.get("links");
        Self {
            name: string_field(data, "name"),
            description: string_field(data, "description"),
            home_url: string_field(data, "home_url").map(|u| ensure_http(&u)),
            callback_url: string_field(data, "callback_url").map(|u| ensure_http(&u)),
            owner: string_field(data, "owner"),
            client_id: string_field(data, "client_id"),
            client_secret: string_field(data, "client_secret"),
            web_detail_url: links.and_then(|l| string_field(l, "html")),
            api_detail_url: links.and_then(|l| string_field(l, "self")),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn home_url(&self) -> Option<&str> {
        self.home_url.as_deref()
    }

    pub fn callback_url(&self) -> Option<&str> {
        self.callback_url.as_deref()
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    pub fn web_detail_url(&self) -> Option<&str> {
        self.web_detail_url.as_deref()
    }

    pub fn api_detail_url(&self) -> Option<&str> {
        self.api_detail_url.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_home_url(&mut self, url: impl AsRef<str>) -> &mut Self {
        self.home_url = Some(ensure_http(url.as_ref()));
        self
    }

    pub fn set_callback_url(&mut self, url: impl AsRef<str>) -> &mut Self {
        self.callback_url = Some(ensure_http(url.as_ref()));
        self
    }

    /// Converts the record to the body the API accepts on create and update.
    pub fn serialize(&self) -> SerializedApplication {
        SerializedApplication {
            name: self.name.clone(),
            description: self.description.clone(),
            home_url: self.home_url.clone(),
            callback_url: self.callback_url.clone(),
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            owner: self.owner.clone(),
        }
    }

    pub fn validation_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
            errors.push(FieldError {
                field: Field::Name,
                rule: Rule::Required,
            });
        }

        for (field, value) in [
            (Field::HomeUrl, &self.home_url),
            (Field::CallbackUrl, &self.callback_url),
        ] {
            match value.as_deref().map(str::trim) {
                None | Some("") => errors.push(FieldError {
                    field,
                    rule: Rule::Required,
                }),
                Some(url) if !is_url(url) => errors.push(FieldError {
                    field,
                    rule: Rule::Url,
                }),
                Some(_) => {}
            }
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validation_errors().is_empty()
    }
}
