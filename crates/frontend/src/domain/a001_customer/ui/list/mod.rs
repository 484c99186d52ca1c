mod view;

pub use view::CustomerList;
