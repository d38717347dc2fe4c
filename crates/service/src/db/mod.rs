pub mod routine_store;
