mod common;

use common::OneShotServer;
use rawget::client::HttpClient;
use rawget::error::Error;

#[test]
fn forwards_response_verbatim() {
    let response = common::binary_response();
    let server = OneShotServer::start(response.clone());
    let port = server.port;

    let mut sink = Vec::new();
    let url = format!("127.0.0.1:{}/d20", port);
    let n = HttpClient::new().get(&url, &mut sink).unwrap();

    assert_eq!(n, response.len() as u64);
    assert_eq!(sink, response);

    let request = server.request();
    let expected = format!(
        "GET /d20 HTTP/1.1\r\nHost: 127.0.0.1:{}\r\nConnection: close\r\n\r\n",
        port
    );
    assert_eq!(String::from_utf8(request).unwrap(), expected);
}

#[test]
fn scheme_and_root_path() {
    let server = OneShotServer::start(b"HTTP/1.1 204 No Content\r\n\r\n".to_vec());
    let port = server.port;

    let mut sink = Vec::new();
    let url = format!("http://127.0.0.1:{}", port);
    HttpClient::new().get(&url, &mut sink).unwrap();

    assert_eq!(&sink, b"HTTP/1.1 204 No Content\r\n\r\n");
    let request = String::from_utf8(server.request()).unwrap();
    assert!(request.starts_with("GET / HTTP/1.1\r\n"), "{}", request);
    assert!(request.contains(&format!("Host: 127.0.0.1:{}\r\n", port)));
}

#[test]
fn empty_response() {
    let server = OneShotServer::start(Vec::new());

    let mut sink = Vec::new();
    let url = format!("127.0.0.1:{}/", server.port);
    assert_eq!(HttpClient::new().get(&url, &mut sink).unwrap(), 0);
    assert!(sink.is_empty());
    server.request();
}

#[test]
fn connection_refused() {
    let port = common::closed_port();

    let mut sink = Vec::new();
    let url = format!("127.0.0.1:{}/", port);
    let err = HttpClient::new().get(&url, &mut sink).unwrap_err();
    assert!(matches!(err, Error::Connect { .. }), "{:?}", err);
    assert!(sink.is_empty());
}
