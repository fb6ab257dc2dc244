//! Tests for the Telegram notifier

use homework_relay::core::ports::Notifier;
use homework_relay::{RelayError, TelegramNotifier};

use crate::common::server::{StubServer, closed_port_url};

const OK_REPLY: &str = r#"{"ok": true, "result": {"message_id": 1}}"#;

#[test]
fn posts_chat_and_text() {
    let server = StubServer::fixed(200, OK_REPLY);
    let notifier = TelegramNotifier::new(server.url(), "123:abc", "-100500");

    notifier.notify("Attention! New HW status: No homework").unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].url, "/bot123:abc/sendMessage");

    let body = requests[0].json();
    assert_eq!(body["chat_id"], "-100500");
    assert_eq!(body["text"], "Attention! New HW status: No homework");
}

#[test]
fn trailing_slash_in_api_url_is_ignored() {
    let server = StubServer::fixed(200, OK_REPLY);
    let notifier = TelegramNotifier::new(format!("{}/", server.url()), "t", "1");

    notifier.notify("hi").unwrap();
    assert_eq!(server.requests()[0].url, "/bott/sendMessage");
}

#[test]
fn api_rejection_carries_description() {
    let server = StubServer::fixed(
        400,
        r#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#,
    );
    let notifier = TelegramNotifier::new(server.url(), "t", "1");

    let err = notifier.notify("hi").unwrap_err();
    assert_eq!(err, RelayError::Delivery("Bad Request: chat not found".to_string()));
}

#[test]
fn one_attempt_per_call() {
    let server = StubServer::fixed(502, "bad gateway");
    let notifier = TelegramNotifier::new(server.url(), "t", "1");

    assert!(matches!(notifier.notify("hi"), Err(RelayError::Delivery(_))));
    assert_eq!(server.requests().len(), 1);
}

#[test]
fn unreachable_api_is_delivery_error() {
    let notifier = TelegramNotifier::new(closed_port_url(), "secret-token", "1");

    let err = notifier.notify("hi").unwrap_err();
    assert!(matches!(&err, RelayError::Delivery(message) if !message.contains("secret-token")));
}
