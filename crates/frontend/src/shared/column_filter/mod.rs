//! Pluggable per-column filters
//!
//! ## Использование
//!
//! ```ignore
//! let state = TableFilterState::new();
//! provide_table_filters(state);
//!
//! let editor = AnyFilterEditor::new(NumberRangeFilterEditor);
//! view! {
//!     <ColumnFilter column=state.column("age") filter_fn=editor color="#e67e22" />
//! }
//! ```
//!
//! New filter types implement [`FilterEditor`] for a value type that is a
//! [`RowFilter`](contracts::shared::column_filter::RowFilter) and get registered
//! in a [`FilterRegistry`]; neither control changes.

pub mod control;
pub mod editor;
pub mod editors;
pub mod external;
pub mod registry;
pub mod session;
pub mod table_state;

pub use control::ColumnFilter;
pub use editor::{is_filter_editor, AnyFilterEditor, ColumnFilterFn, FilterEditor};
pub use external::{ExternalColumnFilter, ExternalFilter};
pub use registry::{ColumnDef, FilterRegistry};
pub use session::{FilterSession, StagedValue};
pub use table_state::{
    load_filters, provide_table_filters, save_filters, use_table_filters, FilterColumn,
    TableColumn, TableFilterState,
};
