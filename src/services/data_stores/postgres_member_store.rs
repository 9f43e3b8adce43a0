use color_eyre::eyre::eyre;
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::{
    MemberId, MemberInstallmentRow, MemberName, MemberStore,
    MemberStoreError, MemberSummary, NewMember, SearchTerm,
};

pub struct PostgresMemberStore {
    pool: PgPool,
}

impl PostgresMemberStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl MemberStore for PostgresMemberStore {
    #[tracing::instrument(
        name = "Getting members with installments from PostgreSQL",
        skip_all
    )]
    async fn get_member_installment_rows(
        &self,
        member_id: Option<&MemberId>,
    ) -> Result<Vec<MemberInstallmentRow>, MemberStoreError> {
        sqlx::query_as::<_, MemberInstallmentRow>(
            r#"
                SELECT members.member_id, members.full_name, members.phone,
                       members.contribution_amt,
                       member_installments.installment_date,
                       member_installments.installment_amt
                FROM members
                LEFT JOIN member_installments
                    ON members.member_id = member_installments.member_id
                WHERE $1::INTEGER IS NULL OR members.member_id = $1
                ORDER BY members.member_id, member_installments.installment_date
            "#,
        )
        .bind(member_id.copied())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))
    }

    #[tracing::instrument(name = "Searching members in PostgreSQL", skip_all)]
    async fn search_members(
        &self,
        term: &SearchTerm,
        limit: i64,
    ) -> Result<Vec<MemberSummary>, MemberStoreError> {
        sqlx::query_as::<_, MemberSummary>(
            r#"
                SELECT member_id, full_name
                FROM members
                WHERE LOWER(full_name) LIKE LOWER($1)
                ORDER BY full_name
                LIMIT $2
            "#,
        )
        .bind(term.as_like_pattern())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))
    }

    #[tracing::instrument(name = "Adding member to PostgreSQL", skip_all)]
    async fn add_member(
        &self,
        member: &NewMember,
    ) -> Result<MemberId, MemberStoreError> {
        let mut transaction = self
            .pool
            .begin()
            .await
            .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?;

        match insert_member_with_installment(&mut transaction, member).await {
            Ok(member_id) => {
                transaction
                    .commit()
                    .await
                    .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?;
                Ok(member_id)
            }
            Err(e) => {
                if let Err(rollback_error) = transaction.rollback().await {
                    tracing::error!(
                        "Failed to roll back add-member transaction: {}",
                        rollback_error
                    );
                }
                Err(MemberStoreError::TransactionRolledBack(eyre!(e)))
            }
        }
    }

    #[tracing::instrument(
        name = "Getting member names from PostgreSQL",
        skip_all
    )]
    async fn get_member_names(
        &self,
    ) -> Result<Vec<MemberName>, MemberStoreError> {
        sqlx::query_as::<_, MemberName>(
            r#"
                SELECT full_name FROM members
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))
    }
}

#[tracing::instrument(name = "Inserting member and installment", skip_all)]
async fn insert_member_with_installment(
    transaction: &mut Transaction<'_, Postgres>,
    member: &NewMember,
) -> Result<MemberId, sqlx::Error> {
    let member_id = sqlx::query_scalar::<_, MemberId>(
        r#"
            INSERT INTO members (full_name, phone, contribution_amt)
            VALUES ($1, $2, $3)
            RETURNING member_id
        "#,
    )
    .bind(&member.full_name)
    .bind(&member.phone)
    .bind(member.contribution_amt)
    .fetch_one(&mut **transaction)
    .await?;

    sqlx::query(
        r#"
            INSERT INTO member_installments (member_id, installment_date, installment_amt)
            VALUES ($1, CURRENT_DATE, $2)
        "#,
    )
    .bind(member_id)
    .bind(member.installment_amt)
    .execute(&mut **transaction)
    .await?;

    Ok(member_id)
}
