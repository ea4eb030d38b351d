/// Integer identifier shared by all in-memory records
pub trait RecordId: Copy + Eq {
    fn value(&self) -> u32;

    fn from_value(value: u32) -> Self;

    fn as_string(&self) -> String {
        self.value().to_string()
    }
}

/// Identifier for a record appended to a collection of `current_len` records.
///
/// Mirrors the add forms of the dashboard: the id is `len + 1`, so it can
/// collide with an existing id after a deletion.
pub fn next_record_id<Id: RecordId>(current_len: usize) -> Id {
    let next = u32::try_from(current_len).unwrap_or(u32::MAX - 1) + 1;
    Id::from_value(next)
}

/// Declares a `#[serde(transparent)]` newtype id over `u32`
#[macro_export]
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $crate::domain::common::RecordId for $name {
            fn value(&self) -> u32 {
                self.0
            }

            fn from_value(value: u32) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
