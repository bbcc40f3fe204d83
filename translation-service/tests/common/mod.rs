use service_core::config::Config as CoreConfig;
use translation_service::config::{MarianConfig, TranslationConfig};
use translation_service::startup::Application;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        // Use random port for testing (port 0); the mock loader stands in
        // for the model toolkit so no weights are downloaded.
        let config = TranslationConfig {
            common: CoreConfig {
                port: 0,
                log_level: "info".to_string(),
            },
            marian: MarianConfig { enabled: false },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn get_health(&self) -> reqwest::Response {
        self.client
            .get(format!("{}/health", self.address))
            .send()
            .await
            .expect("Failed to send health request")
    }

    pub async fn post_translate(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/translate", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to send translate request")
    }
}
