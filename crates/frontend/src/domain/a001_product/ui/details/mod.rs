mod view;

pub use view::ProductDetailsPage;
