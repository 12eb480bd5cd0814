mod health_tests;
mod todo_tests;
mod toto_tests;
