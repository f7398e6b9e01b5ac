use crate::error::ClientError;
use crate::response::ExecResponse;

/// Auxiliary `/exec` parameters.
#[derive(Debug, Default, Clone)]
pub struct ExecOptions {
    /// Ask the server to report the total row count.
    pub count: bool,
    /// Row range in QuestDB `lo,hi` form, e.g. `"0,1000"`.
    pub limit: Option<String>,
}

/// Клиент QuestDB REST API.
///
/// Таймаут запроса не задаётся: выгрузка большой партиции через `/exp`
/// может легитимно занимать минуты. Известное ограничение инструмента.
pub struct QdbClient {
    http: reqwest::Client,
    base_url: String,
}

impl QdbClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Execute a SQL statement via `/exec` and decode the JSON envelope.
    pub async fn exec(&self, sql: &str, opts: &ExecOptions) -> Result<ExecResponse, ClientError> {
        let mut params: Vec<(&str, String)> = vec![
            ("query", sql.to_string()),
            ("explain", "false".into()),
            ("timings", "false".into()),
        ];
        if opts.count {
            params.push(("count", "true".into()));
        }
        if let Some(limit) = &opts.limit {
            params.push(("limit", limit.clone()));
        }

        let body = self.get("/exec", &params).await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Malformed(e.to_string()))
    }

    /// Run a SELECT via `/exp` and return the raw delimited-text body.
    pub async fn export(&self, sql: &str) -> Result<String, ClientError> {
        let params: Vec<(&str, String)> = vec![
            ("query", sql.to_string()),
            ("explain", "false".into()),
            ("timings", "false".into()),
        ];
        self.get("/exp", &params).await
    }

    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<String, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("GET {path}: {e}")))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ClientError::Transport(format!("read body: {e}")))?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}
