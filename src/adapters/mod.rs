pub mod archive_client_http;
pub mod credential_file;
pub mod process_command;
pub mod zip_extract;
