pub mod d100_activity_feed;
pub mod d101_transaction_register;
pub mod d102_loyalty_summary;
pub mod d103_room_occupancy;
pub mod d104_student_roster;
pub mod d105_member_directory;
