#[allow(dead_code, unused_imports)]
pub mod school_repo;
#[allow(dead_code, unused_imports)]
pub mod utils;

#[allow(dead_code, unused_imports)]
pub use school_repo::MockSchoolRepo;
#[allow(dead_code, unused_imports)]
pub use utils::{destination, STORE_FAILURE_REASON};
