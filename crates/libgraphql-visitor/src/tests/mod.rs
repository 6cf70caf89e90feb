mod prune_tests;
mod visit_order_property_tests;
mod visit_order_tests;
