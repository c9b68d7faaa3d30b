// State managers
// Managers handle stateful operations over persisted data.

pub mod bookmark_store;
