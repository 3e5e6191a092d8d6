pub mod ensure_installer;
pub mod installer;
pub mod launch;
pub mod login;
pub mod start;
pub mod update;
