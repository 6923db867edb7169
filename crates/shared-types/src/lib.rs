pub mod config;
pub mod dates;
pub mod error;
pub mod guard;
pub mod models;
pub mod requests;
pub mod role;
pub mod route_map;
pub mod session;
pub mod summary;
pub mod table;

pub use config::*;
pub use error::*;
pub use guard::*;
pub use models::*;
pub use requests::*;
pub use role::*;
pub use session::*;
pub use summary::*;
// route_map and table are used through their module paths; their column
// and path constants would otherwise crowd the crate root.
pub use table::{CellValue, Column, SortDirection, TableRow, TableState, TableView};
