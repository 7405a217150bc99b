//! The data side of keebtrack: typed records as the store returns them,
//! identifier lookups, the write envelopes, form definitions and the renderer
//! that turns a [`Snapshot`] into list and dropdown views.

pub mod category;
pub mod cell;
pub mod form;
pub mod lookup;
pub mod messages;
pub mod record;
pub mod render;
pub mod snapshot;

pub use category::Category;
pub use cell::Cell;
pub use form::{Form, FormError, FormKind, FormSpec};
pub use lookup::find_by_id;
pub use messages::{AddPart, DeletePart, FormFields, StoreRequest};
pub use record::{Case, Keyboard, Keycap, Part, Record, Stabilizer, Switch};
pub use render::{render, DeleteAffordance, Dropdown, ListItem, ListView, RenderedView, SelectOption};
pub use snapshot::Snapshot;
