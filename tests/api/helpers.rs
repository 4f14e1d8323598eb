use mural::{
    application::Application,
    settings::{get_settings, StorageBackend},
    telemetry::{get_subscriber, init_subscriber},
};
use once_cell::sync::Lazy;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber)
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber)
    };
});

pub struct TestApplication {
    pub address: String,
    pub port: u16,
}

impl TestApplication {
    pub async fn post_mensagem(&self, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/mensagens", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_mensagem(&self, id: String) -> reqwest::Response {
        reqwest::Client::new()
            .get(&format!("{}/mensagens/{}", &self.address, id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn put_mensagem(&self, id: String, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .put(&format!("{}/mensagens/{}", &self.address, id))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete_mensagem(&self, id: String) -> reqwest::Response {
        reqwest::Client::new()
            .delete(&format!("{}/mensagens/{}", &self.address, id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_mensagens(&self, query: Option<&str>) -> reqwest::Response {
        let url = match query {
            Some(query) => format!("{}/mensagens?{}", &self.address, query),
            None => format!("{}/mensagens", &self.address),
        };

        reqwest::Client::new()
            .get(&url)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Register a mensagem and return the created record as JSON.
    pub async fn register_mensagem(&self, usuario: &str, conteudo: &str) -> serde_json::Value {
        let response = self
            .post_mensagem(serde_json::json!({
                "usuario": usuario,
                "conteudo": conteudo,
            }))
            .await;

        assert_eq!(201, response.status().as_u16());

        response.json().await.expect("Failed to parse response body.")
    }
}

pub async fn spawn_app() -> TestApplication {
    Lazy::force(&TRACING);

    let settings = {
        let mut settings = get_settings().expect("Failed to read settings");

        settings.application.port = 0;
        settings.storage = StorageBackend::Memory;

        settings
    };

    let application = Application::build(settings)
        .await
        .expect("Failed to build application.");
    let port = application.port();

    let _ = tokio::spawn(application.run_until_stopped());

    TestApplication {
        address: format!("http://127.0.0.1:{}", port),
        port,
    }
}
