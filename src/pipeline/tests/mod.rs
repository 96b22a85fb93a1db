mod tests_driver;
