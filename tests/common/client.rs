//! Thin reqwest wrapper over the server's routes.

use reqwest::Response;

pub struct TestClient {
    base_url: String,
    client: reqwest::Client,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        TestClient {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub async fn get_status(&self) -> Response {
        self.client
            .get(format!("{}/v1/status", self.base_url))
            .send()
            .await
            .expect("Request failed")
    }

    pub async fn get_song(&self, song_id: &str) -> Response {
        self.client
            .get(format!("{}/v1/catalog/song/{song_id}", self.base_url))
            .send()
            .await
            .expect("Request failed")
    }

    pub async fn list_songs(&self) -> Response {
        self.client
            .get(format!("{}/v1/catalog/songs", self.base_url))
            .send()
            .await
            .expect("Request failed")
    }

    pub async fn recommendations(&self, song_id: &str, k: Option<usize>) -> Response {
        let mut url = format!("{}/v1/recommendations/{song_id}", self.base_url);
        if let Some(k) = k {
            url.push_str(&format!("?k={k}"));
        }
        self.client.get(url).send().await.expect("Request failed")
    }

    pub async fn refit(&self) -> Response {
        self.client
            .post(format!("{}/v1/admin/refit", self.base_url))
            .send()
            .await
            .expect("Request failed")
    }
}
