pub mod kv;
pub mod session_store;
