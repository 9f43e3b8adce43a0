use crate::helpers::{add_member, TestApp};
use color_eyre::eyre::eyre;
use member_ledger::{
    domain::{
        MemberId, MemberInstallmentRow, MemberName, MemberStore,
        MemberStoreError, MemberSummary, NewMember, SearchTerm,
    },
    services::data_stores::HashmapEmployeeStore,
    ErrorResponse,
};
use serde_json::json;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use test_context::test_context;

/// Fails every call and counts how many were made.
#[derive(Default)]
struct UnreachableMemberStore {
    calls: AtomicUsize,
}

impl UnreachableMemberStore {
    fn fail<T>(&self) -> Result<T, MemberStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(MemberStoreError::UnexpectedError(eyre!("store unavailable")))
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl MemberStore for UnreachableMemberStore {
    async fn get_member_installment_rows(
        &self,
        _member_id: Option<&MemberId>,
    ) -> Result<Vec<MemberInstallmentRow>, MemberStoreError> {
        self.fail()
    }

    async fn search_members(
        &self,
        _term: &SearchTerm,
        _limit: i64,
    ) -> Result<Vec<MemberSummary>, MemberStoreError> {
        self.fail()
    }

    async fn add_member(
        &self,
        _member: &NewMember,
    ) -> Result<MemberId, MemberStoreError> {
        self.fail()
    }

    async fn get_member_names(
        &self,
    ) -> Result<Vec<MemberName>, MemberStoreError> {
        self.fail()
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_case_insensitive_matches_in_name_order(
    app: &mut TestApp,
) {
    for name in ["Shanti", "Ravi", "Ashwin", "Prakash"] {
        add_member(app, name, 10).await;
    }

    let response = app.post_search_members(&json!({ "search": "sH" })).await;
    assert_eq!(response.status().as_u16(), 200);

    let members = response
        .json::<Vec<MemberSummary>>()
        .await
        .expect("Could not deserialise response body to member summaries");
    assert_eq!(
        members.iter().map(|m| m.full_name.as_str()).collect::<Vec<_>>(),
        vec!["Ashwin", "Prakash", "Shanti"]
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_at_most_10_results(app: &mut TestApp) {
    for idx in (0..15).rev() {
        add_member(app, &format!("Member {idx:02}"), 10).await;
    }

    let response = app.post_search_members(&json!({ "search": "member" })).await;
    assert_eq!(response.status().as_u16(), 200);

    let members = response
        .json::<Vec<MemberSummary>>()
        .await
        .expect("Could not deserialise response body to member summaries");
    let expected: Vec<String> =
        (0..10).map(|idx| format!("Member {idx:02}")).collect();
    assert_eq!(
        members.into_iter().map(|m| m.full_name).collect::<Vec<_>>(),
        expected
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_empty_array_when_nothing_matches(app: &mut TestApp) {
    add_member(app, "Asha", 10).await;

    let response = app.post_search_members(&json!({ "search": "zz" })).await;
    assert_eq!(response.status().as_u16(), 200);
    assert!(response
        .json::<Vec<MemberSummary>>()
        .await
        .expect("Could not deserialise response body to member summaries")
        .is_empty());
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_search_term_missing_or_empty(app: &mut TestApp) {
    let test_cases = [
        json!({}),
        json!({ "search": null }),
        json!({ "search": "" }),
        json!({ "search": "   " }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_search_members(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Should fail with HTTP400 for input: {}",
            test_case
        );
        assert_eq!(
            response
                .json::<ErrorResponse>()
                .await
                .expect("Could not deserialise response body to ErrorResponse")
                .error,
            "Validation error: Search term cannot be empty"
        );
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_422_if_malformed_request(app: &mut TestApp) {
    let test_cases = [
        json!({ "search": 42 }),
        json!({ "search": "Asha", "limit": 50 }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_search_members(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            422,
            "Failed for input: {:?}",
            test_case
        );
    }
}

#[tokio::test]
async fn should_reject_blank_search_before_querying_the_store() {
    let member_store = Arc::new(UnreachableMemberStore::default());
    let app = TestApp::with_stores(
        Arc::new(HashmapEmployeeStore::default()),
        member_store.clone(),
    )
    .await;

    let test_cases = [
        json!({}),
        json!({ "search": null }),
        json!({ "search": "" }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_search_members(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Should fail with HTTP400 for input: {}",
            test_case
        );
    }
    assert_eq!(member_store.calls(), 0, "Store should not be queried");

    let response = app.post_search_members(&json!({ "search": "Asha" })).await;
    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(
        response
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialise response body to ErrorResponse")
            .error,
        "Unexpected error"
    );
    assert_eq!(member_store.calls(), 1);
}
