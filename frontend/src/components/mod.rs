pub mod bookings_table;
pub mod design_card;
pub mod forms;
