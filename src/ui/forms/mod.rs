//! Form rendering module
//!
//! - `field_renderer`: Field and error line rendering
//! - `login_form`: The login form view

mod field_renderer;
mod login_form;

pub use login_form::draw_login;
