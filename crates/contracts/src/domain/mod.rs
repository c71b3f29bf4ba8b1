pub mod a001_activity_log;
pub mod a002_card_transaction;
pub mod a003_student;
pub mod a004_fitness_member;
pub mod a005_guest_room;
pub mod a006_loyalty_account;
