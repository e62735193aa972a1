pub mod lend_media_cmd;
pub mod return_media_cmd;
