pub mod clients;
pub mod date;
pub mod export;
pub mod order_filter;
pub mod shell;

pub use clients::ClientDirectory;
pub use date::{format_order_date, parse_order_date, OrderDate};
pub use order_filter::{apply_view, filter_options, filter_orders, sort_orders, FilterOptions};
pub use shell::ShellStore;
