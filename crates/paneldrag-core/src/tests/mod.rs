mod activation_tests;
mod controller_tests;
