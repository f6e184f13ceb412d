pub mod opened;
