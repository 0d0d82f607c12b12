
use ud_core::{Address, Company, UserId, UserRecord};

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
