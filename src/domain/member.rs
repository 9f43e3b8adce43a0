use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MemberId;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Member {
    pub member_id: MemberId,
    pub full_name: String,
    pub phone: String,
    pub contribution_amt: Decimal,
}

/// Input of the add-member transaction: the member row plus its first
/// installment. The id and the installment date are assigned on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub full_name: String,
    pub phone: String,
    pub contribution_amt: Decimal,
    pub installment_amt: Decimal,
}

impl NewMember {
    pub fn new(
        full_name: String,
        phone: String,
        contribution_amt: Decimal,
        installment_amt: Decimal,
    ) -> Self {
        Self {
            full_name,
            phone,
            contribution_amt,
            installment_amt,
        }
    }
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct MemberSummary {
    pub member_id: MemberId,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct MemberName {
    pub full_name: String,
}
