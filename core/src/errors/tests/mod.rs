mod gateway_error_tests;
