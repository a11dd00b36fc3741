//! Counter Endpoints

pub const COUNTERS_WITH_COUNT_PATH: &str = "api/counter/with-count";
pub const CREATE_COUNTER_PATH: &str = "api/counter";

pub fn counter_with_count_path(id: u32) -> String {
    format!("{}/{}", COUNTERS_WITH_COUNT_PATH, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_with_count_path() {
        assert_eq!(counter_with_count_path(12), "api/counter/with-count/12");
    }
}
