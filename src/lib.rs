pub mod configuration;
pub mod routes;
pub mod startup;
pub mod supabase;
pub mod telemetry;
