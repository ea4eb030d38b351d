pub mod a001_employee;
pub mod a002_team;
pub mod a003_challenge;
