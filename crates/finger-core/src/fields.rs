//! Capacities of the bounded text fields in a [`UserInfoRecord`](crate::UserInfoRecord).
//!
//! A capacity counts a terminator slot, so a field holds at most
//! `capacity - 1` characters. Longer values are cut at that length.

pub const LOGIN: usize = 32;
pub const FULL_NAME: usize = 256;
pub const DIRECTORY: usize = 50;
pub const SHELL: usize = 32;
pub const TERMINAL: usize = 32;
pub const REMOTE_HOST: usize = 256;
pub const IDLE: usize = 50;
pub const WEEKDAY: usize = 32;
pub const CLOCK_TIME: usize = 32;
pub const OFFICE_LOCATION: usize = 32;
pub const OFFICE_PHONE: usize = 32;

/// Working capacity for the whole identity field before it is split.
pub const IDENTITY: usize = 256;

/// Copies `value` into a field of the given capacity, dropping trailing characters.
pub fn bounded(value: &str, capacity: usize) -> String {
    value.chars().take(capacity.saturating_sub(1)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_values_are_copied_verbatim() {
        assert_eq!(bounded("alice", LOGIN), "alice");
    }

    #[test]
    fn long_values_keep_capacity_minus_one_characters() {
        let long = "x".repeat(300);
        assert_eq!(bounded(&long, FULL_NAME).chars().count(), 255);
        assert_eq!(bounded(&long, LOGIN).chars().count(), 31);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let name = "é".repeat(40);
        let cut = bounded(&name, OFFICE_LOCATION);
        assert_eq!(cut.chars().count(), 31);
        assert!(cut.chars().all(|c| c == 'é'));
    }

    #[test]
    fn zero_capacity_yields_empty() {
        assert_eq!(bounded("anything", 0), "");
    }
}
