mod category_button;

pub use category_button::CategoryButton;
