mod models_api_tests;
