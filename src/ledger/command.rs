pub mod get_status_cmd;
