//! Pure renderers from content records to document fragments.
//!
//! # Responsibility
//! - Turn validated content into `Fragment` trees and HTML strings.
//! - Stay side-effect free: no I/O, no clock, no counters.
//!
//! # Invariants
//! - Identical input always produces identical output.
//! - Renderers borrow their inputs for a single pass and keep nothing.

pub mod grid;
pub mod inline;
pub mod markup;
pub mod page;
pub mod style;
pub mod timeline;

pub use grid::{
    group_by_category, render_card, render_grid, CategorySection, ColumnCount, ColumnHint,
};
pub use markup::{Element, Fragment, Node};
pub use page::{render_home_page, render_not_found_page, Page};
pub use style::render_stylesheet;
pub use timeline::render_timeline;
