mod hashmap_employee_store;
mod hashmap_member_store;
mod postgres_employee_store;
mod postgres_member_store;

pub use hashmap_employee_store::*;
pub use hashmap_member_store::*;
pub use postgres_employee_store::*;
pub use postgres_member_store::*;
