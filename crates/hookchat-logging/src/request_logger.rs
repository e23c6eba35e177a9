use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use hookchat_types::WebhookRequest;
use crate::safe_truncate;

const MAX_CONSOLE_CHARS: usize = 5000;

/// Log HTTP request details for debugging (console output)
pub fn log_request(url: &str, request: &WebhookRequest, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_cyan());
    println!("{}", "🔍 WEBHOOK REQUEST".bright_cyan().bold());
    println!("{}", "═".repeat(80).bright_cyan());

    for line in url_summary(url) {
        println!("{}", line.bright_yellow());
    }

    println!("\n{}", "Headers:".bright_yellow());
    println!("  Content-Type: application/json");

    println!("\n{}", "Request Body:".bright_yellow());
    match serde_json::to_string_pretty(request) {
        Ok(json) => print_truncated(&json),
        Err(e) => println!("{}", format!("Error serializing request: {}", e).red()),
    }

    println!("{}", "═".repeat(80).bright_cyan());
    println!();
}

/// Log HTTP response details for debugging (console output)
pub fn log_response(status: &reqwest::StatusCode, headers: &reqwest::header::HeaderMap, body: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_green());
    println!("{}", "📥 WEBHOOK RESPONSE".bright_green().bold());
    println!("{}", "═".repeat(80).bright_green());

    println!("{}: {} {}",
        "Status".bright_yellow(),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );

    println!("\n{}", "Headers:".bright_yellow());
    for (name, value) in headers.iter() {
        if let Ok(val_str) = value.to_str() {
            println!("  {}: {}", name.as_str().bright_white(), val_str);
        }
    }

    println!("\n{}", "Response Body:".bright_yellow());
    print_truncated(&pretty_body(body));

    println!("{}", "═".repeat(80).bright_green());
    println!();
}

/// Log HTTP request to file for persistent debugging.
/// Returns the path of the written file.
pub fn log_request_to_file(
    logs_dir: &Path,
    request_timestamp: i64,
    url: &str,
    request: &WebhookRequest,
) -> Result<PathBuf> {
    let filename = format!("req-{}-{}.txt", request_timestamp, file_tag(request));
    let file_path = logs_dir.join(&filename);

    let mut log_content = String::new();
    log_content.push_str("WEBHOOK REQUEST LOG\n");
    log_content.push_str("===================\n\n");
    log_content.push_str(&format!("Timestamp: {}\n", request_timestamp));
    log_content.push_str(&format!("Session: {}\n\n", request.session_id));

    for line in url_summary(url) {
        log_content.push_str(&line);
        log_content.push('\n');
    }
    log_content.push('\n');

    log_content.push_str("Headers:\n");
    log_content.push_str("  Content-Type: application/json\n\n");

    log_content.push_str("Request Body:\n");
    match serde_json::to_string_pretty(request) {
        Ok(json) => {
            log_content.push_str(&json);
            log_content.push('\n');
        }
        Err(e) => {
            log_content.push_str(&format!("Error serializing request: {}\n", e));
        }
    }

    fs::write(&file_path, log_content)
        .with_context(|| format!("Failed to write request log to {}", file_path.display()))?;

    Ok(file_path)
}

/// Log HTTP response to file, named to match the request file.
/// Returns the path of the written file.
pub fn log_response_to_file(
    logs_dir: &Path,
    request_timestamp: i64,
    request: &WebhookRequest,
    status: &reqwest::StatusCode,
    headers: &reqwest::header::HeaderMap,
    body: &str,
) -> Result<PathBuf> {
    let filename = format!("resp-{}-{}.txt", request_timestamp, file_tag(request));
    let file_path = logs_dir.join(&filename);

    let mut log_content = String::new();
    log_content.push_str("WEBHOOK RESPONSE LOG\n");
    log_content.push_str("====================\n\n");
    log_content.push_str(&format!("Timestamp: {}\n", request_timestamp));
    log_content.push_str(&format!("Session: {}\n\n", request.session_id));

    log_content.push_str(&format!("Status: {} {}\n\n",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    ));

    log_content.push_str("Headers:\n");
    for (name, value) in headers.iter() {
        if let Ok(val_str) = value.to_str() {
            log_content.push_str(&format!("  {}: {}\n", name.as_str(), val_str));
        }
    }

    log_content.push_str("\nResponse Body:\n");
    log_content.push_str(&pretty_body(body));
    log_content.push('\n');

    log_content.push_str("\n---\n");
    log_content.push_str(&format!("Response Size: {} bytes\n", body.len()));
    log_content.push_str(&format!("Content-Type: {}\n",
        headers.get(reqwest::header::CONTENT_TYPE)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("unknown")
    ));

    fs::write(&file_path, log_content)
        .with_context(|| format!("Failed to write response log to {}", file_path.display()))?;

    Ok(file_path)
}

/// URL, host, port and scheme lines
fn url_summary(url: &str) -> Vec<String> {
    let Ok(parsed_url) = reqwest::Url::parse(url) else {
        return vec![format!("URL: {}", url)];
    };

    let port = parsed_url.port().map(|p| p.to_string()).unwrap_or_else(||
        if parsed_url.scheme() == "https" { "443 (default)".to_string() } else { "80 (default)".to_string() }
    );

    vec![
        format!("URL: {}", url),
        format!("Host: {}", parsed_url.host_str().unwrap_or("unknown")),
        format!("Port: {}", port),
        format!("Scheme: {}", parsed_url.scheme()),
    ]
}

/// Pretty-print JSON bodies, fall back to raw text
fn pretty_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json_val| serde_json::to_string_pretty(&json_val).ok())
        .unwrap_or_else(|| body.to_string())
}

fn print_truncated(text: &str) {
    if text.chars().count() > MAX_CONSOLE_CHARS {
        println!("{}", safe_truncate(text, MAX_CONSOLE_CHARS));
        println!("\n{}", format!("... (truncated, total {} bytes)", text.len()).bright_black());
    } else {
        println!("{}", text);
    }
}

/// Filename-safe fragment identifying the session
fn file_tag(request: &WebhookRequest) -> String {
    let tag: String = request
        .session_id
        .as_str()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .take(8)
        .collect();

    if tag.is_empty() {
        "anonymous".to_string()
    } else {
        tag
    }
}
