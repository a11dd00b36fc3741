//! Reason Endpoints

pub const CREATE_REASON_PATH: &str = "api/reason";

pub fn reasons_by_counter_path(counter_id: u32) -> String {
    format!("api/reason/by-counter/{}", counter_id)
}

pub fn increment_path(reason_id: u32, counter_id: u32) -> String {
    format!("api/reason/increment/{}/{}", reason_id, counter_id)
}
