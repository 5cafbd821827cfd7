#![allow(dead_code)]

use feed_loader::core::{HttpClient, HttpClientResult, HttpCompletion, HttpResponse};
use std::sync::{Arc, Mutex, Weak};
use url::Url;

/// Records every GET and lets the test decide when and how each one completes.
#[derive(Default)]
pub struct HttpClientSpy {
    messages: Mutex<Vec<(Url, Option<HttpCompletion>)>>,
}

impl HttpClientSpy {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn requested_urls(&self) -> Vec<Url> {
        let messages = self.messages.lock().unwrap();
        messages.iter().map(|(url, _)| url.clone()).collect()
    }

    pub fn complete_with_error(&self, error: anyhow::Error, index: usize) {
        self.complete(index, HttpClientResult::Failure(error));
    }

    pub fn complete_with_status(&self, status_code: u16, data: Vec<u8>, index: usize) {
        let url = self.requested_urls()[index].clone();
        self.complete(
            index,
            HttpClientResult::Success {
                data,
                response: HttpResponse { url, status_code },
            },
        );
    }

    fn complete(&self, index: usize, result: HttpClientResult) {
        // Take the completion out before calling it so the lock is not held.
        let completion = {
            let mut messages = self.messages.lock().unwrap();
            messages[index]
                .1
                .take()
                .expect("request was already completed")
        };
        completion(result);
    }
}

impl HttpClient for HttpClientSpy {
    fn get(&self, url: &Url, completion: HttpCompletion) {
        let mut messages = self.messages.lock().unwrap();
        messages.push((url.clone(), Some(completion)));
    }
}

pub fn any_url() -> Url {
    Url::parse("http://any-url.com").unwrap()
}

pub fn make_item_json(
    id: uuid::Uuid,
    description: Option<&str>,
    location: Option<&str>,
    image: &str,
) -> serde_json::Value {
    let mut json = serde_json::json!({ "id": id.to_string(), "image": image });
    if let Some(description) = description {
        json["description"] = description.into();
    }
    if let Some(location) = location {
        json["location"] = location.into();
    }
    json
}

pub fn make_items_data(items: Vec<serde_json::Value>) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({ "items": items })).unwrap()
}

/// Fails if `instance` is still alive, i.e. something kept a strong reference to it.
pub fn assert_released<T>(instance: &Weak<T>) {
    assert!(
        instance.upgrade().is_none(),
        "instance should have been released, potential memory leak"
    );
}
