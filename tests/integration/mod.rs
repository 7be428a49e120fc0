/// Integration tests against on-disk slot storage
mod persistence_tests;
mod server_tests;
