pub mod a001_employee;
pub mod a002_team;
pub mod a003_challenge;
pub mod a004_activity;
pub mod a005_department_stat;
pub mod a006_company_info;
pub mod a007_wellness_category;
pub mod common;
