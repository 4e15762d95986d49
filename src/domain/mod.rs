pub mod carousel;
pub mod contact;
pub mod listing;
