mod school_service;

pub use school_service::{SchoolService, ADD_SCHOOL_FAILURE, LIST_SCHOOLS_FAILURE};
