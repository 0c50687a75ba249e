//! Test doubles for the pipeline traits
#![allow(dead_code)]

use agribot::domain::error::AgriError;
use agribot::domain::model::{LanguageCode, Provenance, Query};
use agribot::domain::traits::{LanguageDetector, ModelGateway, TranslationProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub struct FixedDetector {
    pub lang: LanguageCode,
    pub calls: AtomicUsize,
}

impl FixedDetector {
    pub fn new(lang: LanguageCode) -> Self {
        Self {
            lang,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LanguageDetector for FixedDetector {
    fn detect(&self, _text: &str) -> LanguageCode {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.lang
    }
}

pub enum Behavior {
    /// Return the input unchanged.
    Identity,
    /// Return `"[source->target] text"`.
    Tag,
    Fail,
}

pub struct StubProvider {
    pub provenance: Provenance,
    pub behavior: Behavior,
    pub calls: Mutex<Vec<(String, LanguageCode, LanguageCode)>>,
}

impl StubProvider {
    pub fn new(provenance: Provenance, behavior: Behavior) -> Self {
        Self {
            provenance,
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, LanguageCode, LanguageCode)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TranslationProvider for StubProvider {
    fn provenance(&self) -> Provenance {
        self.provenance
    }

    async fn translate(
        &self,
        text: &str,
        source: LanguageCode,
        target: LanguageCode,
    ) -> Result<String, AgriError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), source, target));
        match self.behavior {
            Behavior::Identity => Ok(text.to_string()),
            Behavior::Tag => Ok(format!("[{}->{}] {}", source, target, text)),
            Behavior::Fail => Err(AgriError::provider("stub", "HTTP 503")),
        }
    }
}

pub enum Reply {
    Text(String),
    Status(u16),
    /// Fail with a non-gateway error.
    Broken(String),
    Panic,
}

pub struct StubGateway {
    pub reply: Reply,
    pub queries: Mutex<Vec<Query>>,
}

impl StubGateway {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Reply::Text(text.to_string()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            reply: Reply::Status(status),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn broken(message: &str) -> Self {
        Self {
            reply: Reply::Broken(message.to_string()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn panicking() -> Self {
        Self {
            reply: Reply::Panic,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<Query> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelGateway for StubGateway {
    async fn invoke(&self, query: &Query) -> Result<String, AgriError> {
        self.queries.lock().unwrap().push(query.clone());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Status(status) => Err(AgriError::Gateway {
                status: *status,
                endpoint: "http://stub/generate".to_string(),
            }),
            Reply::Broken(message) => Err(AgriError::Config(message.clone())),
            Reply::Panic => panic!("model stub blew up"),
        }
    }
}
