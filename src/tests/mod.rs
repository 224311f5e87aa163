mod filter_tests;
mod table_tests;
