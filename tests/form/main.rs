mod application;
mod field_input;
mod helpers;
