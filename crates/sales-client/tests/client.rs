//! Client tests against a mock sales directory server.

use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sales_client::{ClientError, ContactQuery, SalesClient};

fn account(id: &str, name: &str, state: &str, revenue: u64, third_party: bool) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "state": state,
        "revenue": revenue,
        "is_third_party": third_party
    })
}

#[tokio::test]
async fn my_accounts_decodes_territory() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/my-accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accounts": [account("acc_1", "Apex Industries", "NY", 1_200_000, false)],
            "coverage_id": "COV-001",
            "client_status": "Active"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SalesClient::new(server.uri()).unwrap();
    let territory = client.my_accounts().await.unwrap();

    assert_eq!(territory.coverage_id, "COV-001");
    assert_eq!(territory.client_status, "Active");
    assert_eq!(territory.accounts.len(), 1);
    assert_eq!(territory.accounts[0].id.to_string(), "acc_1");
    assert_eq!(territory.accounts[0].name, "Apex Industries");
}

#[tokio::test]
async fn third_party_accounts_sends_campaign_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/third-party-accounts"))
        .and(query_param("campaign_name", "High Value Outreach"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accounts": [account("acc_16", "Blue Ocean Co.", "CA", 6_200_000, true)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SalesClient::new(server.uri()).unwrap();
    let accounts = client
        .third_party_accounts(Some("High Value Outreach"))
        .await
        .unwrap();

    assert_eq!(accounts.len(), 1);
    assert!(accounts[0].is_third_party);
    assert_eq!(accounts[0].state, "CA");
}

#[tokio::test]
async fn third_party_accounts_without_campaign_omits_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/third-party-accounts"))
        .and(query_param_is_missing("campaign_name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accounts": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SalesClient::new(server.uri()).unwrap();
    let accounts = client.third_party_accounts(None).await.unwrap();

    assert!(accounts.is_empty());
}

#[tokio::test]
async fn job_titles_unwraps_title_objects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts/acc_1/job-titles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job_titles": [{"title": "Sales Manager"}, {"title": "Data Scientist"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SalesClient::new(server.uri()).unwrap();
    let titles = client.job_titles("acc_1").await.unwrap();

    let titles: Vec<_> = titles.into_iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["Sales Manager", "Data Scientist"]);
}

#[tokio::test]
async fn contacts_sends_both_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(query_param("account_id", "acc_1"))
        .and(query_param("job_title", "software engineer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "contacts": [{
                "id": "con_2",
                "name": "Fiona Davis",
                "email": "fionadavis@apexcom",
                "account_id": "acc_1",
                "job_title": "Software Engineer"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SalesClient::new(server.uri()).unwrap();
    let query = ContactQuery::for_account("acc_1").with_job_title("software engineer");
    let contacts = client.contacts(&query).await.unwrap();

    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].id.to_string(), "con_2");
    assert_eq!(contacts[0].email, "fionadavis@apexcom");
}

#[tokio::test]
async fn contacts_without_filters_sends_no_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(query_param_is_missing("account_id"))
        .and(query_param_is_missing("job_title"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "contacts": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SalesClient::new(server.uri()).unwrap();
    let contacts = client.contacts(&ContactQuery::default()).await.unwrap();

    assert!(contacts.is_empty());
}

#[tokio::test]
async fn api_error_body_is_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": "not_found", "message": "no route for /health"}
        })))
        .mount(&server)
        .await;

    let client = SalesClient::new(server.uri()).unwrap();
    let err = client.health().await.unwrap_err();

    match err {
        ClientError::Api {
            code,
            message,
            status,
        } => {
            assert_eq!(code, "not_found");
            assert_eq!(message, "no route for /health");
            assert_eq!(status, 404);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn non_json_error_is_reported_as_unknown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/my-accounts"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let client = SalesClient::new(server.uri()).unwrap();
    let err = client.my_accounts().await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::Api { ref code, status: 503, .. } if code == "unknown"
    ));
}

#[tokio::test]
async fn health_decodes_counts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "service": "sales-directory",
            "version": "0.1.0",
            "accounts": 100,
            "contacts": 196
        })))
        .mount(&server)
        .await;

    let client = SalesClient::new(server.uri()).unwrap();
    let health = client.health().await.unwrap();

    assert_eq!(health.status, "ok");
    assert_eq!(health.accounts, 100);
    assert_eq!(health.contacts, 196);
}
