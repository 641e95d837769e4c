pub mod account;
pub mod intent;
pub mod observation;
