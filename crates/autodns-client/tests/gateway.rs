use autodns_client::{AutoDnsClient, AutoDnsError};
use autodns_core::{Identifier, ListView, ListZonesQuery, Lookup, Target, WhereClause, WriteOptions};
use serde_json::json;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn reply(code: &str, data: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <response>\n  <result>\n    {data}\n    <status>\n      <code>{code}</code>\n      \
         <text>status text</text>\n      <type>{}</type>\n    </status>\n  </result>\n</response>",
        if code.starts_with('E') { "error" } else { "success" }
    )
}

fn domain_reply(name: &str) -> String {
    reply(
        "S0105",
        &format!(
            "<data><domain><name>{name}</name>\
             <nserver><name>a.ns14.net</name></nserver></domain></data>"
        ),
    )
}

fn client(server: &MockServer) -> AutoDnsClient {
    AutoDnsClient::builder("api-user", "secret", "4")
        .email("ops@example.com")
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn get_domain_returns_domain_block() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("content-type", "text/xml; charset=utf-8"))
        .and(body_string_contains(
            "<task><code>0105</code><domain><name>example.com</name></domain></task>",
        ))
        .and(body_string_contains("<user>api-user</user>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(domain_reply("example.com")))
        .expect(1)
        .mount(&server)
        .await;

    let domain = client(&server).domains().get("example.com").await.unwrap();

    assert_eq!(domain["name"], "example.com");
    assert_eq!(domain["nserver"], json!([{"name": "a.ns14.net"}]));
}

#[tokio::test]
async fn error_status_surfaces_whole_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(reply(
            "E0105",
            "<msg><text>Domain does not exist.</text><code>EF01</code></msg>",
        )))
        .mount(&server)
        .await;

    let err = client(&server).domains().get("missing.com").await.unwrap_err();

    assert_eq!(err.status_code(), Some("E0105"));
    let result = err.response().unwrap();
    assert_eq!(result.messages(), vec!["Domain does not exist."]);
    assert_eq!(result.status.status_type.as_deref(), Some("error"));
}

#[tokio::test]
async fn http_error_status_still_reads_xml_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string(reply("E0205", "")))
        .mount(&server)
        .await;

    let err = client(&server).zones().get("example.com").await.unwrap_err();
    assert!(err.is_protocol());
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<response><result>"))
        .mount(&server)
        .await;

    let err = client(&server).domains().get("example.com").await.unwrap_err();
    assert!(matches!(err, AutoDnsError::Xml(_)));
}

#[tokio::test]
async fn connection_failure_is_transport_error() {
    let client = AutoDnsClient::builder("u", "p", "4")
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client.domains().get("example.com").await.unwrap_err();
    assert!(err.is_transport());
    assert!(err.status_code().is_none());
}

#[tokio::test]
async fn get_many_keeps_order_and_per_item_errors() {
    let server = MockServer::start().await;
    for name in ["a.com", "c.com"] {
        Mock::given(method("POST"))
            .and(body_string_contains(format!("<name>{name}</name>")))
            .respond_with(ResponseTemplate::new(200).set_body_string(domain_reply(name)))
            .expect(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("POST"))
        .and(body_string_contains("<name>b.com</name>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(reply("E0105", "")))
        .expect(1)
        .mount(&server)
        .await;

    let results = client(&server)
        .domains()
        .get_many(["a.com", "b.com", "c.com"])
        .await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap()["name"], "a.com");
    assert_eq!(
        results[1].as_ref().unwrap_err().status_code(),
        Some("E0105")
    );
    assert_eq!(results[2].as_ref().unwrap()["name"], "c.com");
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn lookup_routes_by_target_variant() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(domain_reply("example.com")))
        .mount(&server)
        .await;
    let client = client(&server);

    match client.domains().lookup("example.com").await.unwrap() {
        Lookup::Single(domain) => assert_eq!(domain["name"], "example.com"),
        Lookup::Batch(_) => panic!("expected single lookup"),
    }

    let target = Target::Batch(vec![
        Identifier::from("example.com"),
        Identifier::from(json!({"name": "example.com"})),
    ]);
    match client.domains().lookup(target).await.unwrap() {
        Lookup::Batch(items) => assert_eq!(items.len(), 2),
        Lookup::Single(_) => panic!("expected batch lookup"),
    }
}

#[tokio::test]
async fn transfer_in_always_routes_replies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("<code>0104</code>"))
        .and(body_string_contains("<reply_to>ops@example.com</reply_to>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(reply("N0104", "")))
        .expect(2)
        .mount(&server)
        .await;
    let client = client(&server);

    let requests = [
        json!({"name": "a.com", "authinfo": "x1"}),
        json!({"name": "b.com", "authinfo": "x2"}),
    ];

    let status = client
        .domains()
        .transfer_in(&requests, WriteOptions::new())
        .await
        .unwrap();
    assert_eq!(status.code, "N0104");

    let status = client
        .domains()
        .transfer_in(&requests, WriteOptions::new().defaults(json!({"ownerc": "4711"})))
        .await
        .unwrap();
    assert!(status.is_success());

    let bodies: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| String::from_utf8_lossy(&r.body).into_owned())
        .collect();
    assert_eq!(bodies[0].matches("<domain>").count(), 2);
    assert!(!bodies[0].contains("<default>"));
    assert!(bodies[1].contains("<default><ownerc>4711</ownerc></default>"));
}

#[tokio::test]
async fn transfer_in_without_email_fails_locally() {
    let server = MockServer::start().await;
    let client = AutoDnsClient::builder("u", "p", "4")
        .base_url(server.uri())
        .build()
        .unwrap();

    let err = client
        .domains()
        .transfer_in(&[json!({"name": "a.com"})], WriteOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AutoDnsError::Config(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn transfer_in_with_no_requests_fails_locally() {
    let server = MockServer::start().await;

    let err = client(&server)
        .domains()
        .transfer_in(&Vec::<serde_json::Value>::new(), WriteOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AutoDnsError::InvalidRequest(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn success_status_without_data_is_still_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(reply("S0105", "<data/>")))
        .mount(&server)
        .await;

    let domain = client(&server).domains().get("example.com").await.unwrap();
    assert!(domain.is_null());
}

#[tokio::test]
async fn undeclared_repeat_in_reply_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(reply(
            "S0105",
            "<data><domain><name>example.com</name>\
             <contact>a</contact><contact>b</contact></domain></data>",
        )))
        .mount(&server)
        .await;

    let err = client(&server).domains().get("example.com").await.unwrap_err();
    match err {
        AutoDnsError::MalformedResponse(message) => {
            assert!(message.contains("data.domain.contact"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn zone_writes_use_their_codes() {
    let server = MockServer::start().await;
    for (code, status) in [("0201", "S0201"), ("0202", "S0202"), ("0203", "S0203")] {
        Mock::given(method("POST"))
            .and(body_string_contains(format!("<code>{code}</code>")))
            .respond_with(ResponseTemplate::new(200).set_body_string(reply(status, "")))
            .expect(1)
            .mount(&server)
            .await;
    }
    let client = client(&server);
    let zone = json!({"origin": "example.com", "nserver": [{"name": "a.ns14.net"}]});

    let created = client
        .zones()
        .create(&zone, WriteOptions::new().defaults(json!({"soa": {"ttl": 86400}})))
        .await
        .unwrap();
    assert_eq!(created.code, "S0201");

    let updated = client.zones().update(&zone, WriteOptions::new()).await.unwrap();
    assert_eq!(updated.code, "S0202");

    let deleted = client.zones().delete("example.com").await.unwrap();
    assert_eq!(deleted.code, "S0203");

    let create_body = &server.received_requests().await.unwrap()[0].body;
    let create_body = String::from_utf8_lossy(create_body);
    assert!(create_body.contains("<default><soa><ttl>86400</ttl></soa></default>"));
    assert!(!create_body.contains("reply_to"));
}

#[tokio::test]
async fn get_zone_unwraps_zone_block() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("<code>0205</code><zone><name>example.com</name></zone>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(reply(
            "S0205",
            "<data><zone><origin>example.com</origin>\
             <rr><name>www</name><type>A</type><value>192.0.2.1</value></rr></zone></data>",
        )))
        .mount(&server)
        .await;

    let zone = client(&server).zones().get("example.com").await.unwrap();
    assert_eq!(zone["origin"], "example.com");
    assert_eq!(zone["rr"][0]["value"], "192.0.2.1");
    assert_eq!(zone["nserver"], json!([]));
}

#[tokio::test]
async fn list_zones_always_returns_sequence() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("<view><limit>1</limit></view>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(reply(
            "S0205",
            "<data><zone><origin>a.de</origin></zone></data>",
        )))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("<where>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(reply(
            "S0205",
            "<data><zone><origin>a.de</origin></zone><zone><origin>b.de</origin></zone></data>",
        )))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("<key>created</key>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(reply("S0205", "")))
        .mount(&server)
        .await;
    let client = client(&server);

    let one = client
        .zones()
        .list(&ListZonesQuery::new().view(ListView {
            limit: Some(1),
            ..ListView::default()
        }))
        .await
        .unwrap();
    assert_eq!(one, vec![json!({"origin": "a.de", "nserver": [], "rr": []})]);

    let two = client
        .zones()
        .list(&ListZonesQuery::new().filter(WhereClause::condition("origin", "like", "*.de")))
        .await
        .unwrap();
    assert_eq!(two.len(), 2);
    assert_eq!(two[1]["origin"], "b.de");

    let none = client
        .zones()
        .list(&ListZonesQuery::new().key("created"))
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn trace_hook_sees_raw_responses() {
    let server = MockServer::start().await;
    let body = domain_reply("example.com");
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.clone()))
        .mount(&server)
        .await;

    let seen: Arc<Mutex<Vec<(String, String)>>> = Arc::default();
    let sink = Arc::clone(&seen);
    let client = AutoDnsClient::builder("u", "p", "4")
        .base_url(server.uri())
        .trace(move |exchange| {
            sink.lock()
                .unwrap()
                .push((exchange.code.to_string(), exchange.response.to_string()));
        })
        .build()
        .unwrap();

    client.domains().get("example.com").await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "0105");
    assert_eq!(seen[0].1, body);
}
