use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Member, MemberId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    pub date: NaiveDate,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberWithInstallments {
    pub member_id: MemberId,
    pub full_name: String,
    pub phone: String,
    pub contribution_amt: Decimal,
    pub installments: Vec<Installment>,
}

impl From<Member> for MemberWithInstallments {
    fn from(member: Member) -> Self {
        Self {
            member_id: member.member_id,
            full_name: member.full_name,
            phone: member.phone,
            contribution_amt: member.contribution_amt,
            installments: Vec::new(),
        }
    }
}

/// One row of `members LEFT JOIN member_installments`. The installment
/// columns are null for members without installments.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct MemberInstallmentRow {
    pub member_id: MemberId,
    pub full_name: String,
    pub phone: String,
    pub contribution_amt: Decimal,
    pub installment_date: Option<NaiveDate>,
    pub installment_amt: Option<Decimal>,
}

impl MemberInstallmentRow {
    fn installment(&self) -> Option<Installment> {
        match (self.installment_date, self.installment_amt) {
            (Some(date), Some(amount)) => Some(Installment { date, amount }),
            _ => None,
        }
    }
}

/// Folds flat join rows into one entry per member in a single pass.
///
/// Members are emitted in the order they are first seen and each member's
/// installments keep the order of the rows, so input sorted by
/// `(member_id, installment_date)` yields chronological installments.
/// Rows with a null date or amount only contribute the member itself.
pub fn group_member_installments<I>(rows: I) -> Vec<MemberWithInstallments>
where
    I: IntoIterator<Item = MemberInstallmentRow>,
{
    let mut members: Vec<MemberWithInstallments> = Vec::new();
    let mut positions: HashMap<MemberId, usize> = HashMap::new();

    for row in rows {
        let installment = row.installment();
        let position = *positions.entry(row.member_id).or_insert_with(|| {
            members.push(MemberWithInstallments::from(Member {
                member_id: row.member_id,
                full_name: row.full_name,
                phone: row.phone,
                contribution_amt: row.contribution_amt,
            }));
            members.len() - 1
        });

        if let Some(installment) = installment {
            members[position].installments.push(installment);
        }
    }

    members
}
