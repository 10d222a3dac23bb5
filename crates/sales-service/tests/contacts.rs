//! Contact endpoint integration tests.

mod common;

use std::collections::HashSet;

use common::{array, field_set, ids, sequence, TestHarness};

#[tokio::test]
async fn contacts_unfiltered_lists_everyone_in_order() {
    let harness = TestHarness::new();

    let body = harness.get_json("/contacts").await;
    let contacts = array(&body, "contacts");

    let health = harness.get_json("/health").await;
    assert_eq!(contacts.len() as u64, health["contacts"].as_u64().unwrap());

    let sequences: Vec<u32> = ids(contacts).iter().map(|id| sequence(id)).collect();
    let expected: Vec<u32> = (1..=u32::try_from(contacts.len()).unwrap()).collect();
    assert_eq!(sequences, expected);
}

#[tokio::test]
async fn contact_json_shape() {
    let harness = TestHarness::new();

    let body = harness.get_json("/contacts?account_id=acc_1").await;
    let contact = &array(&body, "contacts")[0];

    let keys: HashSet<&str> = contact
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        HashSet::from(["id", "name", "email", "account_id", "job_title"])
    );
    assert_eq!(contact["id"], "con_1");

    let email = contact["email"].as_str().unwrap();
    assert!(email.ends_with("@apexcom"), "unexpected email {email}");
    assert!(!email.contains('.'));
}

#[tokio::test]
async fn contacts_filtered_by_account() {
    let harness = TestHarness::new();

    let body = harness.get_json("/contacts?account_id=acc_1").await;
    let contacts = array(&body, "contacts");

    assert!((1..=3).contains(&contacts.len()));
    for contact in contacts {
        assert_eq!(contact["account_id"], "acc_1");
    }
}

#[tokio::test]
async fn account_filter_is_exact() {
    let harness = TestHarness::new();

    for account_id in ["ACC_1", "acc_01", "acc_9999"] {
        let body = harness
            .get_json(&format!("/contacts?account_id={account_id}"))
            .await;
        assert!(array(&body, "contacts").is_empty(), "{account_id} matched");
    }
}

#[tokio::test]
async fn repeated_account_id_uses_last_value() {
    let harness = TestHarness::new();

    let body = harness
        .get_json("/contacts?account_id=acc_2&account_id=acc_1")
        .await;
    let contacts = array(&body, "contacts");

    assert!(!contacts.is_empty());
    for contact in contacts {
        assert_eq!(contact["account_id"], "acc_1");
    }

    let single = harness.get_json("/contacts?account_id=acc_1").await;
    assert_eq!(body, single);
}

#[tokio::test]
async fn contacts_filtered_by_job_title_ignore_case() {
    let harness = TestHarness::new();

    let exact = harness
        .get_json("/contacts?job_title=Software%20Engineer")
        .await;
    let lower = harness
        .get_json("/contacts?job_title=software%20engineer")
        .await;

    assert_eq!(exact, lower);
    let contacts = array(&exact, "contacts");
    assert!(!contacts.is_empty());
    assert_eq!(
        field_set(contacts, "job_title"),
        HashSet::from(["Software Engineer".to_string()])
    );
}

#[tokio::test]
async fn contact_filters_compose() {
    let harness = TestHarness::new();

    let all = harness.get_json("/contacts?account_id=acc_1").await;
    let title = array(&all, "contacts")[0]["job_title"]
        .as_str()
        .unwrap()
        .to_lowercase();

    let response = harness
        .server
        .get("/contacts")
        .add_query_param("account_id", "acc_1")
        .add_query_param("job_title", &title)
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let contacts = array(&body, "contacts");

    assert!(!contacts.is_empty());
    for contact in contacts {
        assert_eq!(contact["account_id"], "acc_1");
        assert_eq!(contact["job_title"].as_str().unwrap().to_lowercase(), title);
    }

    let body = harness
        .get_json("/contacts?account_id=acc_1&job_title=Software%20Engineer")
        .await;
    for contact in array(&body, "contacts") {
        assert_eq!(contact["account_id"], "acc_1");
        assert_eq!(contact["job_title"], "Software Engineer");
    }
}

#[tokio::test]
async fn every_contact_references_an_existing_account() {
    let harness = TestHarness::new();

    let mine = harness.get_json("/my-accounts").await;
    let third_party = harness.get_json("/third-party-accounts").await;
    let mut account_ids: HashSet<String> = ids(array(&mine, "accounts")).into_iter().collect();
    account_ids.extend(ids(array(&third_party, "accounts")));
    assert_eq!(account_ids.len(), 100);

    let body = harness.get_json("/contacts").await;
    for account_id in field_set(array(&body, "contacts"), "account_id") {
        assert!(account_ids.contains(&account_id), "{account_id} missing");
    }
}
