pub mod aggregate;

pub use aggregate::{Employee, EmployeeFiller, EmployeeId, NewEmployee};
