// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use bookclip::api::ApiClient;
use bookclip::config::Config;
use bookclip::BookclipError;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Answers one connection per canned response and returns the request heads it saw.
fn serve(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut head = String::new();
            loop {
                let mut line = String::new();
                let n = reader.read_line(&mut line).unwrap();
                if n == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }
            seen.push(head);
            let resp = format!(
                "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(resp.as_bytes()).unwrap();
            stream.flush().unwrap();
        }
        seen
    });
    (format!("http://{}/", addr), handle)
}

fn client(base_url: String, max_retries: u32) -> ApiClient {
    let cfg = Config {
        api_key: Some("k1".into()),
        oauth_token: Some("tok".into()),
        base_url,
    };
    ApiClient::from_config(&cfg)
        .unwrap()
        .with_http_client(reqwest::blocking::Client::builder().no_proxy().build().unwrap())
        .with_backoff(Duration::from_millis(1), max_retries)
}

const BOOK: &str = r#"{"id":"b1","name":"Acme","fractionDigits":2,"decimalSeparator":"DOT"}"#;
const SERVER_ERROR: &str = r#"{"error":{"code":503,"message":"Backend unavailable"}}"#;

#[test]
fn get_book_sends_token_and_key() {
    let (url, handle) = serve(vec![(200, BOOK)]);
    let book = client(url, 5).get_book("b1").unwrap();
    assert_eq!(book.name(), "Acme");

    let seen = handle.join().unwrap();
    assert_eq!(seen.len(), 1);
    let head = seen[0].to_lowercase();
    assert!(head.starts_with("get /ledgers/b1?key=k1 "));
    assert!(head.contains("authorization: bearer tok"));
}

#[test]
fn server_errors_are_retried() {
    let (url, handle) = serve(vec![
        (503, SERVER_ERROR),
        (500, SERVER_ERROR),
        (200, r#"{"periodicity":"DAILY","accountBalances":[{"name":"Cash","cumulativeBalance":"5"}]}"#),
    ]);
    let c = client(url, 5);
    let book = bookclip::Book::offline();
    let report = c.get_balances_report(book, "account:Cash").unwrap();
    assert_eq!(report.balances_containers()[0].name(), "Cash");

    let seen = handle.join().unwrap();
    assert_eq!(seen.len(), 3);
    assert!(seen[2].starts_with("GET /ledgers/offline/balances?query=account%3ACash&time="));
}

#[test]
fn client_errors_fail_without_retry() {
    let (url, handle) = serve(vec![(404, r#"{"error":{"code":404,"message":"Book not found"}}"#)]);
    match client(url, 5).get_book("nope") {
        Err(BookclipError::Api { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Book not found");
        }
        other => panic!("unexpected {:?}", other.map(|b| b.id().to_string())),
    }
    assert_eq!(handle.join().unwrap().len(), 1);
}

#[test]
fn retries_give_up_after_limit() {
    let (url, handle) = serve(vec![(500, SERVER_ERROR), (502, SERVER_ERROR), (503, SERVER_ERROR)]);
    match client(url, 2).get_book("b1") {
        Err(BookclipError::Api { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "Backend unavailable");
        }
        other => panic!("unexpected {:?}", other.map(|b| b.id().to_string())),
    }
    assert_eq!(handle.join().unwrap().len(), 3);
}

#[test]
fn saved_queries_default_to_empty() {
    let (url, handle) = serve(vec![
        (200, r#"{"items":[{"id":"q1","title":"Monthly","query":"after:$m-1"}]}"#),
        (200, "{}"),
    ]);
    let c = client(url, 0);
    let queries = c.get_saved_queries("b1").unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].title, "Monthly");
    assert!(c.get_saved_queries("b1").unwrap().is_empty());
    handle.join().unwrap();
}
