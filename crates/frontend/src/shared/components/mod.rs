pub mod form_field;
pub mod loading_spinner;
pub mod page_header;
pub mod progress_bar;
pub mod stat_card;

pub use form_field::{FormField, FormSelect};
pub use loading_spinner::LoadingSpinner;
pub use page_header::PageHeader;
pub use progress_bar::ProgressBar;
pub use stat_card::StatCard;
