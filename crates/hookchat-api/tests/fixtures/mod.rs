use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const WEBHOOK_PATH: &str = "/webhook/chat";

/// Mock webhook endpoint for exercising the client
pub struct WebhookMockServer {
    server: MockServer,
}

impl WebhookMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.server.uri(), WEBHOOK_PATH)
    }

    /// Reply with `body` only when the expected JSON payload is posted
    pub async fn mock_reply_for(&self, session_id: &str, message: &str, body: Value) {
        Mock::given(method("POST"))
            .and(path(WEBHOOK_PATH))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "sessionId": session_id,
                "message": message
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Reply to any POST with a raw status and text body
    pub async fn mock_raw(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path(WEBHOOK_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }
}

/// URL of a local port nobody listens on
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}{}", port, WEBHOOK_PATH)
}

/// URL of a one-shot server that promises a 100-byte JSON body, sends a
/// few bytes of it and then closes the connection
pub async fn truncated_body_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        read_request(&mut stream).await;
        stream
            .write_all(
                b"HTTP/1.1 200 OK\r\n\
                  Content-Type: application/json\r\n\
                  Content-Length: 100\r\n\
                  \r\n\
                  {\"message\": \"cut",
            )
            .await
            .expect("write partial response");
        stream.flush().await.expect("flush");
    });

    format!("http://127.0.0.1:{}{}", port, WEBHOOK_PATH)
}

/// Consume the request head and its `Content-Length` body
async fn read_request(stream: &mut tokio::net::TcpStream) {
    let mut request = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).await.expect("read request");
        if n == 0 {
            return;
        }
        request.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&request);
        let Some(head_end) = text.find("\r\n\r\n") else {
            continue;
        };
        let content_length = text[..head_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        if request.len() >= head_end + 4 + content_length {
            return;
        }
    }
}
