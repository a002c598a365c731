pub mod collection;
pub mod escape;
pub mod examples;
pub mod locales;
pub mod slug;
