//! Integration tests for `zabbix-cli templates`.

mod common;

use common::zabbix_cmd_with_url;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn templates_response() -> serde_json::Value {
    json!({
        "jsonrpc": "2.0",
        "result": [{
            "templateid": "10001",
            "host": "Template OS Linux",
            "name": "Template OS Linux",
            "groups": [{"groupid": "1", "name": "Templates"}]
        }],
        "id": 1
    })
}

#[tokio::test]
async fn test_templates_table_output() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api_jsonrpc.php"))
        .and(body_partial_json(json!({
            "method": "template.get",
            "auth": "test-token",
            "params": {"selectGroups": "extend"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(templates_response()))
        .expect(1)
        .mount(&server)
        .await;

    zabbix_cmd_with_url(&server.uri())
        .args(["templates", "--select-groups"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID\tHost\tName\tGroups\tTags\tLinked"))
        .stdout(predicate::str::contains("10001\tTemplate OS Linux"));
}

#[tokio::test]
async fn test_templates_json_output_with_filters() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api_jsonrpc.php"))
        .and(body_partial_json(json!({
            "method": "template.get",
            "params": {
                "templateids": ["10001"],
                "with_triggers": true,
                "tags": [{"tag": "class", "value": "os", "operator": 1}]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(templates_response()))
        .expect(1)
        .mount(&server)
        .await;

    let output = zabbix_cmd_with_url(&server.uri())
        .args([
            "-o",
            "json",
            "templates",
            "--template-id",
            "10001",
            "--with-triggers",
            "--tag",
            "class=os",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value[0]["templateid"], "10001");
    assert_eq!(value[0]["groups"][0]["name"], "Templates");
}

#[tokio::test]
async fn test_templates_password_auth_logs_in() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api_jsonrpc.php"))
        .and(body_partial_json(json!({
            "method": "user.login",
            "params": {"user": "Admin", "password": "secret"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0", "result": "session-abc", "id": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api_jsonrpc.php"))
        .and(body_partial_json(json!({"method": "template.get", "auth": "session-abc"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(templates_response()))
        .expect(1)
        .mount(&server)
        .await;

    zabbix_cmd_with_url(&server.uri())
        .env_remove("ZABBIX_API_TOKEN")
        .args(["--username", "Admin", "--password", "secret", "templates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Template OS Linux"));
}

#[test]
fn test_templates_rejects_empty_tag_name() {
    common::zabbix_cmd()
        .args(["templates", "--tag", "=os"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tag name is empty"));
}
