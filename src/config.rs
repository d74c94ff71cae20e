use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub gemini_api_key: SecretString,
    pub gemini_model: String,
    pub model_timeout_secs: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "interview_prep".to_string()),
            gemini_api_key: SecretString::from(
                env::var("GEMINI_API_KEY").unwrap_or_default(),
            ),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            model_timeout_secs: env::var("MODEL_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "interview_prep_test".to_string(),
            gemini_api_key: SecretString::from("test_api_key".to_string()),
            gemini_model: "gemini-2.0-flash".to_string(),
            model_timeout_secs: 1,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_origin: "http://localhost:3000".to_string(),
        }
    }
}
