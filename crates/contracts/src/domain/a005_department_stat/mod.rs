pub mod aggregate;

pub use aggregate::DepartmentStat;
