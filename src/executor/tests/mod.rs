mod helpers;
mod operator_tests;
mod plugin_tests;
