//! Domain layer for user-desk: the user model, the local edit overlay,
//! profile form validation, and the view projections built on top of them.
//!
//! Nothing in this crate performs I/O. Fetching lives in `ud-client`,
//! terminal output in `ud-cli`.

pub mod error;
pub mod form;
pub mod models;
pub mod route;
pub mod store;
pub mod validation;
pub mod view;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use form::{EditForm, SubmitOutcome};
pub use models::address::Address;
pub use models::company::Company;
pub use models::user_id::UserId;
pub use models::user_record::UserRecord;
pub use route::Route;
pub use store::overlay_state::OverlayState;
pub use store::overlay_store::{OverlaySnapshot, OverlayStore};
pub use store::subscription_id::SubscriptionId;
pub use validation::form_field::FormField;
pub use validation::form_schema::FormSchema;
pub use validation::form_values::FormValues;
pub use validation::rule::{FieldRule, Rule};
pub use validation::validation_errors::ValidationErrors;
pub use view::edit_view::{AVATAR_BASE_URL, EditView};
pub use view::list_view::ListView;
pub use view::success_notice::SuccessNotice;
