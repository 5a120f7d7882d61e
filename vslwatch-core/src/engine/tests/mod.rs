mod coupler_tests;
