mod property_tests;

use crate::{Address, Company, UserId, UserRecord};

/// A fetched-looking record for `id`
pub(crate) fn sample_user(id: u64) -> UserRecord {
    UserRecord {
        id: UserId(id),
        name: format!("User {id}"),
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        phone: format!("8-999-000-00-{id:02}"),
        address: Address::new("Gwenborough"),
        company: Company::new("Romaguera-Crona"),
    }
}

pub(crate) fn sample_users(count: u64) -> Vec<UserRecord> {
    (1..=count).map(sample_user).collect()
}
