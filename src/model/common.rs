use uuid::Uuid;

pub type Id = String;

pub const DEFAULT_STATUS: &str = "Pending";

pub fn generate_id() -> Id {
    Uuid::new_v4().to_string()
}

/// Case-insensitive comparison used for every catalog lookup.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
