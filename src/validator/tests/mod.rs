mod helpers;
mod tests_extension_base;
mod tests_identity_rename;
