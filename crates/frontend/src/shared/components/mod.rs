pub mod breadcrumbs;
pub mod card_animated;
pub mod page_header;
pub mod stepper;
