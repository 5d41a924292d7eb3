pub mod sender_id;
