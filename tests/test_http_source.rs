use rpawogen::options::{GenerateRequest, GenerationOptions};
use rpawogen::source::{GenError, HttpPasswordSource, PasswordSource, generate};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

// 单次应答的 HTTP 服务，返回收到的请求体
fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test listener");
    let endpoint = format!("http://{}/api/generate/", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("Failed to accept connection");
        let mut data = Vec::new();
        let mut buf = [0u8; 1024];
        let (header_end, content_length) = loop {
            let n = stream.read(&mut buf).expect("Failed to read request");
            data.extend_from_slice(&buf[..n]);
            if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&data[..pos]).to_ascii_lowercase();
                let length = headers
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .map(|v| v.trim().parse::<usize>().unwrap())
                    .unwrap_or(0);
                break (pos + 4, length);
            }
        };
        while data.len() < header_end + content_length {
            let n = stream.read(&mut buf).expect("Failed to read body");
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);
        }
        stream.write_all(response.as_bytes()).expect("Failed to write response");
        String::from_utf8_lossy(&data[header_end..]).to_string()
    });
    (endpoint, handle)
}

// 测试只连接本机，绕过环境中的代理设置
fn source_with_timeout(endpoint: &str, timeout: Duration) -> HttpPasswordSource {
    let client = reqwest::blocking::Client::builder()
        .no_proxy()
        .timeout(timeout)
        .build()
        .expect("Failed to build client");
    HttpPasswordSource::with_client(endpoint, client)
}

fn source(endpoint: &str) -> HttpPasswordSource {
    source_with_timeout(endpoint, Duration::from_secs(5))
}

#[test]
fn test_fetch_posts_options_as_json() {
    let (endpoint, server) = serve_once("200 OK", r#"{"password":"Ab1!xyz2"}"#);
    let options = GenerationOptions {
        length: 20,
        include_upper: true,
        include_lower: false,
        include_numbers: true,
        include_symbols: false,
    };

    let password = generate(&source(&endpoint), &options).unwrap();
    assert_eq!(password, "Ab1!xyz2");

    let body = server.join().unwrap();
    let sent: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(sent, serde_json::json!({
        "length": 20,
        "upper": true,
        "lower": false,
        "numbers": true,
        "symbols": false
    }));
}

#[test]
fn test_error_status_is_reported() {
    let (endpoint, server) = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#);
    let result = source(&endpoint).fetch(&GenerationOptions::default().to_request());
    assert!(matches!(result, Err(GenError::Status(500))));
    server.join().unwrap();
}

#[test]
fn test_missing_password_is_an_error() {
    let (endpoint, server) = serve_once("200 OK", r#"{"password":""}"#);
    let result = source(&endpoint).fetch(&GenerationOptions::default().to_request());
    assert!(matches!(result, Err(GenError::EmptyPassword)));
    server.join().unwrap();

    let (endpoint, server) = serve_once("200 OK", r#"{}"#);
    let result = source(&endpoint).fetch(&GenerationOptions::default().to_request());
    assert!(matches!(result, Err(GenError::EmptyPassword)));
    server.join().unwrap();
}

#[test]
fn test_unreachable_endpoint_is_transport_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let endpoint = format!("http://127.0.0.1:{}/api/generate/", port);
    let result = source(&endpoint).fetch(&GenerateRequest::from(&GenerationOptions::default()));
    assert!(matches!(result, Err(GenError::Transport(_))));
}

#[test]
fn test_slow_service_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}/api/generate/", listener.local_addr().unwrap());
    let server = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        thread::sleep(Duration::from_secs(3));
        drop(stream);
    });

    let slow = source_with_timeout(&endpoint, Duration::from_millis(500));
    let result = slow.fetch(&GenerationOptions::default().to_request());
    assert!(matches!(result, Err(GenError::Transport(_))));
    server.join().unwrap();
}

#[test]
fn test_no_character_class_never_connects() {
    // 端口 9 (discard) 上通常没有服务；若真的发出请求会得到 Transport 错误
    let options = GenerationOptions {
        include_upper: false,
        include_lower: false,
        include_numbers: false,
        include_symbols: false,
        ..Default::default()
    };
    let result = generate(&source("http://127.0.0.1:9/"), &options);
    assert!(matches!(result, Err(GenError::NoCharacterClass)));
}

#[test]
fn test_new_uses_given_endpoint() {
    let source = HttpPasswordSource::new("http://localhost:8000/api/generate/", Duration::from_secs(1)).unwrap();
    assert_eq!(source.endpoint(), "http://localhost:8000/api/generate/");
}
