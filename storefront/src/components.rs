pub mod product_grid;
pub mod styles;
pub mod theme_toggle;
pub mod toast_stack;

pub use product_grid::{
    format_price, render_card_markup, render_catalog_markup, ProductCard, ProductGrid,
};
pub use theme_toggle::ThemeToggle;
pub use toast_stack::ToastStack;
