//! Unit tests for project domain and services.

mod single_flight_tests;
