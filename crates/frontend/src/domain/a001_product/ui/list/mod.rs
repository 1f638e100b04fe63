mod view;

pub use view::ProductsPage;
