pub mod client;
pub mod filter;
pub mod location;
pub mod order;
pub mod shell;

pub use client::{Client, ClientFilter, ClientStatus};
pub use filter::{FilterSpec, NameFilter, SortDirection, SortField, SortSpec, StatusFilter};
pub use location::{CoordinateError, Coordinates, GeolocationFailure, LocationData};
pub use order::{BadgeTone, Order, OrderAction, OrderStatus, RowAction};
pub use shell::{Icon, NavItem, NavSection, Role, ShellAction, ShellState, User};
