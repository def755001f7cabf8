//! In-process stand-ins for the Slack and Cloudinary clients.

#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use scbridge_client::{Fetcher, Publisher};
use scbridge_core::constants::{
    BOT_TOKEN, CLOUDINARY_API_KEY, CLOUDINARY_API_SECRET, CLOUDINARY_CLOUD_NAME,
};
use scbridge_core::{BotToken, BridgeError, BridgeResult, CloudinaryCredentials, MapEnv};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn full_env() -> MapEnv {
    MapEnv::new()
        .with(BOT_TOKEN, "xoxb-test")
        .with(CLOUDINARY_API_KEY, "key")
        .with(CLOUDINARY_API_SECRET, "secret")
        .with(CLOUDINARY_CLOUD_NAME, "demo")
}

enum FetchBehavior {
    Respond(BridgeResult<Bytes>),
    /// Return the URL itself as the payload.
    Echo,
    Panic,
}

pub struct StubFetcher {
    behavior: FetchBehavior,
    calls: AtomicUsize,
    tokens: Mutex<Vec<String>>,
}

impl StubFetcher {
    fn with(behavior: FetchBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
            tokens: Mutex::new(Vec::new()),
        })
    }

    pub fn ok(body: &'static [u8]) -> Arc<Self> {
        Self::with(FetchBehavior::Respond(Ok(Bytes::from_static(body))))
    }

    pub fn failing(err: BridgeError) -> Arc<Self> {
        Self::with(FetchBehavior::Respond(Err(err)))
    }

    pub fn echo() -> Arc<Self> {
        Self::with(FetchBehavior::Echo)
    }

    pub fn panicking() -> Arc<Self> {
        Self::with(FetchBehavior::Panic)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn tokens(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, resource_url: &str, bot_token: &BotToken) -> BridgeResult<Bytes> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.tokens
            .lock()
            .unwrap()
            .push(bot_token.expose().to_string());

        match &self.behavior {
            FetchBehavior::Respond(result) => result.clone(),
            FetchBehavior::Echo => {
                tokio::time::sleep(Duration::from_millis(10)).await;
                Ok(Bytes::copy_from_slice(resource_url.as_bytes()))
            }
            FetchBehavior::Panic => panic!("fetcher exploded"),
        }
    }
}

enum PublishBehavior {
    Respond(BridgeResult<String>),
    /// Return `prefix` followed by the payload read as UTF-8.
    Echo(String),
}

pub struct StubPublisher {
    behavior: PublishBehavior,
    calls: AtomicUsize,
    payloads: Mutex<Vec<Bytes>>,
    credentials: Mutex<Vec<CloudinaryCredentials>>,
}

impl StubPublisher {
    fn with(behavior: PublishBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
            payloads: Mutex::new(Vec::new()),
            credentials: Mutex::new(Vec::new()),
        })
    }

    pub fn ok(url: &str) -> Arc<Self> {
        Self::with(PublishBehavior::Respond(Ok(url.to_string())))
    }

    pub fn failing(err: BridgeError) -> Arc<Self> {
        Self::with(PublishBehavior::Respond(Err(err)))
    }

    pub fn echo(prefix: &str) -> Arc<Self> {
        Self::with(PublishBehavior::Echo(prefix.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn payloads(&self) -> Vec<Bytes> {
        self.payloads.lock().unwrap().clone()
    }

    pub fn credentials(&self) -> Vec<CloudinaryCredentials> {
        self.credentials.lock().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for StubPublisher {
    async fn publish(
        &self,
        payload: Bytes,
        credentials: &CloudinaryCredentials,
    ) -> BridgeResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.payloads.lock().unwrap().push(payload.clone());
        self.credentials.lock().unwrap().push(credentials.clone());

        match &self.behavior {
            PublishBehavior::Respond(result) => result.clone(),
            PublishBehavior::Echo(prefix) => {
                tokio::time::sleep(Duration::from_millis(10)).await;
                Ok(format!("{}{}", prefix, String::from_utf8_lossy(&payload)))
            }
        }
    }
}
