use crate::helpers::{add_member, get_json_response_body, TestApp};
use chrono::Utc;
use member_ledger::{
    domain::{Installment, MemberWithInstallments},
    routes::{AddMemberResponse, ADD_MEMBER_SUCCESS_MESSAGE},
    services::data_stores::{HashmapEmployeeStore, HashmapMemberStore},
    ErrorResponse,
};
use rust_decimal::Decimal;
use serde_json::json;
use std::sync::Arc;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_201_for_valid_requests(app: &mut TestApp) {
    let schema = json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "properties": {
        "message": { "type": "string" },
        "member_id": { "type": "integer" }
      },
      "required": ["message", "member_id"]
    });

    let test_cases = [
        json!({
            "full_name": "Asha",
            "phone": "555",
            "contribution_amt": 100,
            "installment_amt": 20
        }),
        json!({
            "full_name": "Ravi",
            "phone": "+91 98450 00000",
            "contribution_amt": "250.50",
            "installment_amt": 12.75
        }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_add_member(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            201,
            "Failed for input: {}",
            test_case
        );

        let response_body = get_json_response_body(response).await;
        assert!(
            jsonschema::is_valid(&schema, &response_body),
            "response does not match schema"
        );
        assert_eq!(
            response_body.get("message").unwrap(),
            ADD_MEMBER_SUCCESS_MESSAGE
        );
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_422_if_malformed_request(app: &mut TestApp) {
    let test_cases = [
        json!({
            "phone": "555",
            "contribution_amt": 100,
            "installment_amt": 20
        }),
        json!({
            "full_name": "Asha",
            "contribution_amt": 100,
            "installment_amt": 20
        }),
        json!({
            "full_name": "Asha",
            "phone": "555",
            "installment_amt": 20
        }),
        json!({
            "full_name": "Asha",
            "phone": "555",
            "contribution_amt": 100
        }),
        json!({
            "full_name": "Asha",
            "phone": "555",
            "contribution_amt": "a lot",
            "installment_amt": 20
        }),
        json!({
            "full_name": "Asha",
            "phone": "555",
            "contribution_amt": 100,
            "installment_amt": 20,
            "member_id": 5
        }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_add_member(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            422,
            "Failed for input: {:?}",
            test_case
        );
    }

    let names = app.get_all_members_names().await;
    assert_eq!(names.status().as_u16(), 404, "Nothing should be stored");
}

#[tokio::test]
async fn should_return_500_and_store_nothing_if_installment_insert_fails() {
    let app = TestApp::with_stores(
        Arc::new(HashmapEmployeeStore::default()),
        Arc::new(HashmapMemberStore::with_failing_installment_inserts()),
    )
    .await;

    let response = app
        .post_add_member(&json!({
            "full_name": "Asha",
            "phone": "555",
            "contribution_amt": 100,
            "installment_amt": 20
        }))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(
        response
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialise response body to ErrorResponse")
            .error,
        "Failed to add member and installment"
    );

    let members = app.get_all_members(None).await;
    assert_eq!(get_json_response_body(members).await, json!([]));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_list_new_member_with_todays_installment(app: &mut TestApp) {
    let response = app
        .post_add_member(&json!({
            "full_name": "Asha",
            "phone": "555",
            "contribution_amt": 100,
            "installment_amt": 20
        }))
        .await;
    assert_eq!(response.status().as_u16(), 201);
    let member_id = response
        .json::<AddMemberResponse>()
        .await
        .expect("Could not deserialise response body to AddMemberResponse")
        .member_id;

    let response = app
        .get_all_members(Some(&member_id.as_ref().to_string()))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let members = response
        .json::<Vec<MemberWithInstallments>>()
        .await
        .expect("Could not deserialise response body to members");

    assert_eq!(members.len(), 1);
    assert_eq!(members[0].member_id, member_id);
    assert_eq!(members[0].full_name, "Asha");
    assert_eq!(members[0].phone, "555");
    assert_eq!(members[0].contribution_amt, Decimal::from(100));
    assert_eq!(
        members[0].installments,
        vec![Installment {
            date: Utc::now().date_naive(),
            amount: Decimal::from(20),
        }]
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_create_a_new_member_on_every_retry(app: &mut TestApp) {
    let first = add_member(app, "Asha", 20).await;
    let second = add_member(app, "Asha", 20).await;

    assert_ne!(first, second);

    let response = app.get_all_members(None).await;
    let members = response
        .json::<Vec<MemberWithInstallments>>()
        .await
        .expect("Could not deserialise response body to members");
    assert_eq!(members.len(), 2);
}
