mod add_member;
mod get_all_members;
mod get_employees;
mod get_member_names;
mod search_members;

pub use add_member::*;
pub use get_all_members::*;
pub use get_employees::*;
pub use get_member_names::*;
pub use search_members::*;
