/// Unit tests for the record model and prediction rules
mod record_tests;
mod prediction_tests;
