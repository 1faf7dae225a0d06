//! `template.get` tests against a mock Zabbix frontend.
//!
//! # Invariants
//! - A non-empty result is returned unchanged and in server order
//! - An empty result becomes `ClientError::NotFound`
//! - Transport and JSON-RPC failures are returned unchanged

mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use zabbix_client::{
    ClientError, GetParameters, Relation, SelectQuery, TemplateGetParams, TemplateTag,
    TemplateTagOperator, get_templates,
};

#[tokio::test]
async fn test_get_templates_success() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("templates/get_templates.json");

    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .and(header("content-type", "application/json-rpc"))
        .and(body_partial_json(json!({
            "jsonrpc": "2.0",
            "method": "template.get",
            "auth": "test-api-token"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = token_client(&mock_server);
    let templates = client
        .get_templates(&TemplateGetParams::default())
        .await
        .unwrap();

    assert_eq!(templates.len(), 2);
    let linux = &templates[0];
    assert_eq!(linux.template_id, "10001");
    assert_eq!(linux.name, "Template OS Linux");
    assert_eq!(linux.groups.items()[0].group_id, "1");
    assert_eq!(linux.tags.count(), 2);
    assert_eq!(linux.parent_templates.items()[0].template_id, "10047");
    assert_eq!(linux.hosts.items()[0].host_id, "10084");
    assert_eq!(linux.macros.items()[0].macro_name, "{$AGENT.TIMEOUT}");
    assert_eq!(templates[1].template_id, "10047");
}

#[tokio::test]
async fn test_get_templates_empty_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("templates/empty.json")),
        )
        .mount(&mock_server)
        .await;

    let mut client = token_client(&mock_server);
    let result = get_templates(&mut client, &TemplateGetParams::default()).await;

    assert!(matches!(result, Err(ClientError::NotFound)));
}

#[tokio::test]
async fn test_get_templates_count_selectors_decode_as_counts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .and(body_partial_json(json!({
            "params": {"selectTemplates": "count", "selectHosts": "count"}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("templates/get_templates_counted.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let params = TemplateGetParams {
        select_templates: Some(SelectQuery::count()),
        select_hosts: Some(SelectQuery::count()),
        ..Default::default()
    };
    let mut client = token_client(&mock_server);
    let templates = get_templates(&mut client, &params).await.unwrap();

    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].templates, Relation::Count(3));
    assert_eq!(templates[0].hosts.count(), 12);
    assert!(templates[0].groups.is_empty());
}

#[tokio::test]
async fn test_get_templates_sends_only_set_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .and(body_partial_json(json!({
            "method": "template.get",
            "params": {
                "output": "extend",
                "templateids": ["10001"],
                "with_triggers": true,
                "evaltype": 0,
                "tags": [{"tag": "class", "value": "os", "operator": 1}],
                "selectGroups": "extend",
                "selectMacros": ["macro", "value"]
            }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("templates/get_templates.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let params = TemplateGetParams {
        get: GetParameters {
            output: Some(SelectQuery::extend()),
            ..Default::default()
        },
        template_ids: vec!["10001".to_string()],
        with_triggers: true,
        evaltype: Some(Default::default()),
        tags: vec![TemplateTag::new("class", "os").with_operator(TemplateTagOperator::Equals)],
        select_groups: Some(SelectQuery::extend()),
        select_macros: Some(SelectQuery::fields(["macro", "value"])),
        ..Default::default()
    };

    let mut client = token_client(&mock_server);
    let templates = client.get_templates(&params).await.unwrap();
    assert_eq!(templates.len(), 2);

    let requests = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let sent = body["params"].as_object().unwrap();
    assert!(!sent.contains_key("with_items"));
    assert!(!sent.contains_key("hostids"));
    assert!(!sent.contains_key("selectHosts"));
}

#[tokio::test]
async fn test_get_templates_rpc_error_is_propagated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("errors/invalid_parameter.json")),
        )
        .mount(&mock_server)
        .await;

    let mut client = token_client(&mock_server);
    let err = client
        .get_templates(&TemplateGetParams::default())
        .await
        .unwrap_err();

    match err {
        ClientError::Rpc {
            code,
            message,
            data,
        } => {
            assert_eq!(code, -32602);
            assert_eq!(message, "Invalid params.");
            assert!(data.contains("selectFoo"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_get_templates_http_error_is_propagated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = token_client(&mock_server);
    let err = client
        .get_templates(&TemplateGetParams::default())
        .await
        .unwrap_err();

    match err {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_get_templates_transport_error_is_propagated() {
    // Nothing listens on the discard port.
    let mut client = zabbix_client::ZabbixClient::builder()
        .base_url("http://127.0.0.1:9".to_string())
        .auth_strategy(zabbix_client::AuthStrategy::ApiToken {
            token: secrecy::SecretString::new("t".to_string().into()),
        })
        .max_retries(0)
        .build()
        .unwrap();

    let err = client
        .get_templates(&TemplateGetParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::HttpError(_)), "got {err:?}");
}

#[tokio::test]
async fn test_get_templates_malformed_body_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let mut client = token_client(&mock_server);
    let err = client
        .get_templates(&TemplateGetParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)), "got {err:?}");
}
