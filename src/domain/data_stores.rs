use super::{
    MemberId, MemberInstallmentRow, MemberName, MemberSummary, NewMember,
    SearchTerm,
};
use color_eyre::eyre::Report;
use serde_json::Value;
use thiserror::Error;

#[async_trait::async_trait]
pub trait EmployeeStore {
    async fn get_employees(&self) -> Result<Vec<Value>, EmployeeStoreError>;
}

#[derive(Debug, Error)]
pub enum EmployeeStoreError {
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

#[async_trait::async_trait]
pub trait MemberStore {
    /// Members left-joined with their installments, ordered by
    /// `member_id, installment_date`.
    async fn get_member_installment_rows(
        &self,
        member_id: Option<&MemberId>,
    ) -> Result<Vec<MemberInstallmentRow>, MemberStoreError>;
    async fn search_members(
        &self,
        term: &SearchTerm,
        limit: i64,
    ) -> Result<Vec<MemberSummary>, MemberStoreError>;
    /// Inserts the member and its first installment atomically.
    async fn add_member(
        &self,
        member: &NewMember,
    ) -> Result<MemberId, MemberStoreError>;
    async fn get_member_names(
        &self,
    ) -> Result<Vec<MemberName>, MemberStoreError>;
}

#[derive(Debug, Error)]
pub enum MemberStoreError {
    #[error("Transaction rolled back")]
    TransactionRolledBack(#[source] Report),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for MemberStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (
                Self::TransactionRolledBack(_),
                Self::TransactionRolledBack(_)
            ) | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
