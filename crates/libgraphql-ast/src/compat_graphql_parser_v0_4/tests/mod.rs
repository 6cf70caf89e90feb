mod from_schema_tests;
