use super::ValidationError;
use serde::{Deserialize, Serialize};

/// Database-assigned identity of a member (`members.member_id`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct MemberId(i32);

impl MemberId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let parsed = id.trim().parse::<i32>().map_err(|e| {
            ValidationError::new(format!("Invalid member ID: {e}"))
        })?;
        Ok(Self(parsed))
    }

    pub fn new(id: i32) -> Self {
        Self(id)
    }
}

impl AsRef<i32> for MemberId {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}

#[test]
fn test_valid_ids() {
    let valid_ids = [("1", 1), ("42", 42), (" 7 ", 7)];
    for (raw, expected) in valid_ids.iter() {
        let parsed = MemberId::parse(raw).expect(raw);
        assert_eq!(
            parsed.as_ref(),
            expected,
            "ID does not match expected value"
        );
    }
}

#[test]
fn test_invalid_ids() {
    let invalid_ids = ["", "abc", "1.5", "99999999999"];
    for invalid_id in invalid_ids.iter() {
        let error = MemberId::parse(invalid_id).expect_err(invalid_id);
        assert!(
            error.as_ref().starts_with("Invalid member ID: "),
            "Unexpected error message: {}",
            error.as_ref()
        );
    }
}
