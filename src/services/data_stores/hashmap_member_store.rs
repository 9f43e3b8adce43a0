use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use color_eyre::eyre::eyre;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::domain::{
    Member, MemberId, MemberInstallmentRow, MemberName, MemberStore,
    MemberStoreError, MemberSummary, NewMember, SearchTerm,
};

#[derive(Default)]
struct MemberTables {
    last_member_id: i32,
    members: HashMap<MemberId, Member>,
    installments: Vec<(MemberId, NaiveDate, Decimal)>,
}

/// In-memory stand-in for the `members` and `member_installments` tables.
#[derive(Default)]
pub struct HashmapMemberStore {
    tables: RwLock<MemberTables>,
    fail_installment_inserts: bool,
}

impl HashmapMemberStore {
    /// A store whose installment insert always fails, after the member
    /// insert of the same call has succeeded.
    pub fn with_failing_installment_inserts() -> Self {
        Self {
            fail_installment_inserts: true,
            ..Default::default()
        }
    }
}

#[async_trait::async_trait]
impl MemberStore for HashmapMemberStore {
    async fn get_member_installment_rows(
        &self,
        member_id: Option<&MemberId>,
    ) -> Result<Vec<MemberInstallmentRow>, MemberStoreError> {
        let tables = self.tables.read().await;

        let mut members: Vec<&Member> = tables
            .members
            .values()
            .filter(|m| member_id.map_or(true, |id| &m.member_id == id))
            .collect();
        members.sort_by_key(|m| m.member_id);

        let mut rows = Vec::new();
        for member in members {
            let mut installments: Vec<(NaiveDate, Decimal)> = tables
                .installments
                .iter()
                .filter(|(id, _, _)| id == &member.member_id)
                .map(|(_, date, amount)| (*date, *amount))
                .collect();
            installments.sort_by_key(|(date, _)| *date);

            let row = |installment: Option<(NaiveDate, Decimal)>| {
                MemberInstallmentRow {
                    member_id: member.member_id,
                    full_name: member.full_name.clone(),
                    phone: member.phone.clone(),
                    contribution_amt: member.contribution_amt,
                    installment_date: installment.map(|(date, _)| date),
                    installment_amt: installment.map(|(_, amount)| amount),
                }
            };

            if installments.is_empty() {
                rows.push(row(None));
            }
            rows.extend(installments.into_iter().map(|i| row(Some(i))));
        }

        Ok(rows)
    }

    async fn search_members(
        &self,
        term: &SearchTerm,
        limit: i64,
    ) -> Result<Vec<MemberSummary>, MemberStoreError> {
        let tables = self.tables.read().await;

        let mut matches: Vec<MemberSummary> = tables
            .members
            .values()
            .filter(|m| term.matches(&m.full_name))
            .map(|m| MemberSummary {
                member_id: m.member_id,
                full_name: m.full_name.clone(),
            })
            .collect();
        matches.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        matches.truncate(usize::try_from(limit).unwrap_or(0));

        Ok(matches)
    }

    async fn add_member(
        &self,
        member: &NewMember,
    ) -> Result<MemberId, MemberStoreError> {
        let mut tables = self.tables.write().await;

        let member_id = MemberId::new(tables.last_member_id + 1);
        tables.members.insert(
            member_id,
            Member {
                member_id,
                full_name: member.full_name.clone(),
                phone: member.phone.clone(),
                contribution_amt: member.contribution_amt,
            },
        );

        if self.fail_installment_inserts {
            tables.members.remove(&member_id);
            return Err(MemberStoreError::TransactionRolledBack(eyre!(
                "Failed to insert installment"
            )));
        }

        tables.installments.push((
            member_id,
            Utc::now().date_naive(),
            member.installment_amt,
        ));
        tables.last_member_id = *member_id.as_ref();

        Ok(member_id)
    }

    async fn get_member_names(
        &self,
    ) -> Result<Vec<MemberName>, MemberStoreError> {
        let tables = self.tables.read().await;

        let mut members: Vec<&Member> = tables.members.values().collect();
        members.sort_by_key(|m| m.member_id);

        Ok(members
            .into_iter()
            .map(|m| MemberName {
                full_name: m.full_name.clone(),
            })
            .collect())
    }
}
