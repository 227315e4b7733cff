//! Loading users from the configured endpoint.
//!
//! The endpoint answers `GET` with a JSON array of `{id, name, email, role}`
//! objects. The whole list is always fetched; paging and searching happen
//! locally. Failures are reported once and never retried automatically.

use crate::error::Error;
use crate::record::Record;
use bubbletea_rs::{Cmd, Msg};

/// Result of a [`load`] command.
#[derive(Debug)]
pub struct LoadedMsg(pub Result<Vec<Record>, Error>);

/// Parses a response body into records.
///
/// ```rust
/// use usertable::fetch::parse_records;
///
/// let body = br#"[{"id":1,"name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"}]"#;
/// let users = parse_records(body).unwrap();
/// assert_eq!(users[0].name, "Aaron Miles");
///
/// assert!(parse_records(b"{").unwrap_err().is_parse());
/// ```
pub fn parse_records(body: &[u8]) -> Result<Vec<Record>, Error> {
    Ok(serde_json::from_slice(body)?)
}

/// Fetches and parses the user list.
///
/// Transport errors and non-2xx responses are fetch failures; a body that is
/// not a user array is a parse failure.
pub async fn fetch_records(client: &reqwest::Client, endpoint: &str) -> Result<Vec<Record>, Error> {
    tracing::debug!(endpoint, "fetching users");
    let fetch_err = |source| Error::Fetch {
        url: endpoint.to_string(),
        source,
    };

    let response = client.get(endpoint).send().await.map_err(fetch_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::FetchStatus {
            url: endpoint.to_string(),
            status,
        });
    }
    let body = response.bytes().await.map_err(fetch_err)?;
    parse_records(&body)
}

/// A command that fetches the user list and reports it as a [`LoadedMsg`].
pub fn load(endpoint: impl Into<String>) -> Cmd {
    let endpoint = endpoint.into();
    Box::pin(async move {
        let client = reqwest::Client::new();
        let result = fetch_records(&client, &endpoint).await;
        Some(Box::new(LoadedMsg(result)) as Msg)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Role;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}/members")
    }

    fn client() -> reqwest::Client {
        reqwest::Client::builder().no_proxy().build().unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let url = serve_once(
            "200 OK",
            r#"[{"id":1,"name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"},
                {"id":2,"name":"Aishwarya Naik","email":"aishwarya@mailinator.com","role":"admin"}]"#,
        )
        .await;

        let users = fetch_records(&client(), &url).await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].role, Role::Admin);
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let url = serve_once("503 Service Unavailable", "").await;
        let err = fetch_records(&client(), &url).await.unwrap_err();
        assert!(err.is_fetch());
        assert!(matches!(err, Error::FetchStatus { status, .. } if status.as_u16() == 503));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let url = serve_once("200 OK", r#"{"users": []}"#).await;
        let err = fetch_records(&client(), &url).await.unwrap_err();
        assert!(err.is_parse());
    }

    #[tokio::test]
    async fn test_load_command_reports_failure() {
        let msg = load("not a url").await.expect("load always reports");
        let LoadedMsg(result) = *msg.downcast::<LoadedMsg>().unwrap();
        assert!(result.unwrap_err().is_fetch());
    }

    #[test]
    fn test_parse_rejects_unknown_role() {
        let body = br#"[{"id":1,"name":"A","email":"a@b.c","role":"owner"}]"#;
        assert!(parse_records(body).unwrap_err().is_parse());
    }
}
