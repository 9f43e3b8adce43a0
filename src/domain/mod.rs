mod data_stores;
mod error;
mod member;
mod member_id;
mod member_installments;
mod search_term;

pub use data_stores::*;
pub use error::*;
pub use member::*;
pub use member_id::*;
pub use member_installments::*;
pub use search_term::*;
