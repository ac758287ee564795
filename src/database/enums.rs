pub mod database_drivers;
