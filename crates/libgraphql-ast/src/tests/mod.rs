mod selection_field_tests;
mod value_tests;
