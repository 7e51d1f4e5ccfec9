pub mod analyze;
pub mod classify;
pub mod config;
pub mod init;
pub mod likely;
pub mod toc;
