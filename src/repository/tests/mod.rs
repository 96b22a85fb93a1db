mod helpers;
mod tests_environment;
