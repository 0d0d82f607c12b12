pub mod overlay_state;
pub mod overlay_store;
pub mod subscription_id;
