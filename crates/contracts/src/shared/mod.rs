pub mod formatting;
pub mod list_view;
pub mod palette;
pub mod query;
pub mod team_stats;
pub mod timeline;
pub mod validation;
