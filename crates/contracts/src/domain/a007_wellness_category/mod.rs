pub mod aggregate;

pub use aggregate::WellnessCategory;
