pub mod c6_bank;
