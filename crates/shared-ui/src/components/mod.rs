pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod error_state;
pub mod form;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod pagination;
pub mod sidebar;
pub mod skeleton;
pub mod stat_card;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use error_state::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use pagination::*;
pub use sidebar::*;
pub use skeleton::*;
pub use stat_card::*;
