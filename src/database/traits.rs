pub mod database_backend;
