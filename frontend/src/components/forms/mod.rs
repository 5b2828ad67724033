pub mod contact_form;
pub mod register_form;

pub use contact_form::ContactForm;
pub use register_form::RegisterForm;
