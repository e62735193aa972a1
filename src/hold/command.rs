pub mod reserve_media_cmd;
pub mod cancel_reservation_cmd;
