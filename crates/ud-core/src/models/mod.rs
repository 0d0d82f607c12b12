pub mod address;
pub mod company;
pub mod user_id;
pub mod user_record;
