pub mod exec;
pub mod remove_dir;
