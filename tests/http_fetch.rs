// tests/http_fetch.rs
//
// LeetCode client against a one-shot local HTTP server.
mod common;

use std::{
    io::{BufRead, BufReader, Read, Write},
    net::TcpListener,
    thread::{self, JoinHandle},
};

use common::{BODY_5_3_1, BODY_NO_USER};
use lc_stats::{
    config::options::FetchOptions,
    fetcher::{LeetCode, Lookup, StatsSource},
};

/// Serve exactly one request with `status` and `body`; hand back what was sent.
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/graphql", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut head = String::new();
        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if line == "\r\n" || line.is_empty() {
                break;
            }
            let lower = line.to_ascii_lowercase();
            if let Some(v) = lower.strip_prefix("content-length:") {
                content_length = v.trim().parse().unwrap();
            }
            head.push_str(&line);
        }
        let mut req_body = vec![0u8; content_length];
        reader.read_exact(&mut req_body).unwrap();

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
        stream.flush().unwrap();

        head.push_str(&String::from_utf8_lossy(&req_body));
        head
    });

    (url, handle)
}

fn client(url: &str) -> LeetCode {
    LeetCode::new(&FetchOptions::unpaced(url)).unwrap()
}

#[test]
fn matched_user_is_found() {
    let (url, server) = serve_once("200 OK", BODY_5_3_1);
    let got = client(&url).lookup("ada_l");
    let request = server.join().unwrap();

    match got {
        Lookup::Found(t) => {
            assert_eq!((t.easy(), t.medium(), t.hard(), t.total()), (5, 3, 1, 9));
        }
        other => panic!("expected Found, got {other:?}"),
    }

    let lower = request.to_ascii_lowercase();
    assert!(lower.starts_with("post /graphql"));
    assert!(lower.contains("referer: https://leetcode.com"));
    assert!(lower.contains("content-type: application/json"));
    // username travels as a variable, not inside the query text
    assert!(request.contains(r#""variables":{"username":"ada_l"}"#));
    assert!(request.contains("acSubmissionNum"));
}

#[test]
fn null_user_is_not_found() {
    let (url, server) = serve_once("200 OK", BODY_NO_USER);
    assert_eq!(client(&url).lookup("ghost"), Lookup::NotFound);
    server.join().unwrap();
}

#[test]
fn server_error_is_failed() {
    let (url, server) = serve_once("500 Internal Server Error", "{}");
    let got = client(&url).lookup("ada_l");
    server.join().unwrap();
    assert!(matches!(got, Lookup::Failed(ref m) if m.contains("500")), "{got:?}");
}

#[test]
fn garbage_body_is_failed() {
    let (url, server) = serve_once("200 OK", "<html>rate limited</html>");
    let got = client(&url).lookup("ada_l");
    server.join().unwrap();
    assert!(matches!(got, Lookup::Failed(_)));
}

#[test]
fn refused_connection_is_failed() {
    // bind then drop to get a port nobody listens on
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let got = client(&format!("http://127.0.0.1:{port}/graphql")).lookup("ada_l");
    assert!(matches!(got, Lookup::Failed(_)));
}
